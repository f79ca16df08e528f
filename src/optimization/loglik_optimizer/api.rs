//! High-level entry point for maximizing a user-provided `LogLikelihood`.
//!
//! Wraps the model in an `ArgMinAdapter` (which *minimizes* `-ℓ(θ)` inside a
//! box), runs Nelder–Mead from the initial guess, restarts from the best
//! point `opts.restarts` times, and reports the finite-difference gradient
//! norm at the optimum.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        bounds::Bounds,
        builders::build_nelder_mead,
        finite_diff::gradient,
        run::run_nelder_mead,
        traits::{LogLikelihood, MLEOptions},
    },
};
use argmin_math::ArgminL2Norm;

/// Maximize a log-likelihood `ℓ(θ)` over a box using Nelder–Mead.
///
/// # Behavior
/// - Validates the box and checks that `theta0` lies inside it.
/// - Validates the initial guess via `f.check(theta0, data)` and rejects a
///   start where `ℓ(θ₀) = -∞`.
/// - Runs the simplex solver, then `opts.restarts` further runs each
///   starting from the current best point. Iterations and evaluation counts
///   are summed; the convergence flag comes from the last run.
/// - Computes `‖∇ℓ(θ̂)‖` by central differences; it is `None` when the
///   stencil leaves the admissible region.
///
/// # Errors
/// - [`OptError::InvalidBounds`] / [`OptError::BoundsDimMismatch`] for a bad box.
/// - [`OptError::ThetaOutOfBounds`] if `theta0` is outside the box.
/// - [`OptError::InfeasibleStart`] if `ℓ(θ₀) = -∞`.
/// - Propagates errors from `f.check`, `f.value` and the solver.
///
/// # Example
/// ```no_run
/// use ndarray::array;
/// use rust_volatility::optimization::{
///     errors::OptResult,
///     loglik_optimizer::{Bounds, LogLikelihood, MLEOptions, Theta, maximize},
/// };
///
/// struct Parabola;
/// impl LogLikelihood for Parabola {
///     type Data = ();
///     fn value(&self, theta: &Theta, _: &()) -> OptResult<f64> {
///         Ok(-(theta[0] - 0.3).powi(2))
///     }
///     fn check(&self, _: &Theta, _: &()) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let bounds = Bounds::new(array![0.0], array![1.0])?;
/// let out = maximize(&Parabola, array![0.8], &(), &bounds, &MLEOptions::default())?;
/// println!("θ̂ = {:?}", out.theta_hat);
/// # Ok::<(), rust_volatility::optimization::errors::OptError>(())
/// ```
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, bounds: &Bounds, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    bounds.validate()?;
    bounds.check_point(&theta0)?;
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data, bounds);
    if problem.loglik(&theta0)? == f64::NEG_INFINITY {
        return Err(OptError::InfeasibleStart);
    }

    let solver = build_nelder_mead(&theta0, bounds, opts)?;
    let mut outcome = run_nelder_mead(opts, ArgMinAdapter::new(f, data, bounds), solver)?;
    for _ in 0..opts.restarts {
        let solver = build_nelder_mead(&outcome.theta_hat, bounds, opts)?;
        let next = run_nelder_mead(opts, ArgMinAdapter::new(f, data, bounds), solver)?;
        outcome.absorb(next);
    }

    outcome.grad_norm = gradient(&|theta: &Theta| problem.loglik(theta), &outcome.theta_hat)
        .ok()
        .map(|g| g.l2_norm());
    Ok(outcome)
}
