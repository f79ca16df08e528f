//! loglik_optimizer::builders — Nelder–Mead solver construction helpers.
//!
//! Purpose
//! -------
//! Build a configured simplex solver from a starting point, the box and the
//! crate-level options, so higher layers never touch Argmin-specific types.
//!
//! Conventions
//! -----------
//! - The initial simplex has `n + 1` vertices: `θ₀` itself and, for each
//!   coordinate `i`, `θ₀` displaced along axis `i` by
//!   `simplex_step · |θ₀ᵢ|` (or [`ZERO_COORD_STEP`] when `θ₀ᵢ = 0`). The
//!   displacement is taken towards the interior when the forward step would
//!   leave the box.
//! - The cost-spread tolerance is always set explicitly; the iteration cap is
//!   left to the runner.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        bounds::Bounds,
        traits::MLEOptions,
        types::{NelderMeadSolver, Theta, ZERO_COORD_STEP},
    },
};

/// Vertices of the initial simplex around `theta0`.
pub fn initial_simplex(theta0: &Theta, bounds: &Bounds, step: f64) -> Vec<Theta> {
    let mut vertices = Vec::with_capacity(theta0.len() + 1);
    vertices.push(theta0.clone());
    for i in 0..theta0.len() {
        let mut vertex = theta0.clone();
        let delta = if theta0[i] != 0.0 { step * theta0[i].abs() } else { ZERO_COORD_STEP };
        if theta0[i] + delta > bounds.upper[i] {
            vertex[i] -= delta;
        } else {
            vertex[i] += delta;
        }
        vertices.push(vertex);
    }
    vertices
}

/// Construct a Nelder–Mead solver around `theta0`.
///
/// # Errors
/// - `OptError` (via `From<argmin::core::Error>`) if Argmin rejects the
///   cost tolerance.
pub fn build_nelder_mead(
    theta0: &Theta, bounds: &Bounds, opts: &MLEOptions,
) -> OptResult<NelderMeadSolver> {
    let mut solver = NelderMeadSolver::new(initial_simplex(theta0, bounds, opts.simplex_step));
    if let Some(tol) = opts.tols.tol_cost {
        solver = solver.with_sd_tolerance(tol)?;
    }
    Ok(solver)
}
