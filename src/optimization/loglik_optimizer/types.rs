//! loglik_optimizer::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the core numeric types and solver aliases used by the
//! log-likelihood optimizer so the rest of the optimization code stays
//! agnostic to `ndarray` and Argmin generics.
//!
//! Conventions
//! -----------
//! - `Theta` and `Grad` are column vectors with one entry per free
//!   parameter; `Hessian` is the matching dense `n × n` matrix.
//! - `Cost` is the scalar `c(θ) = -ℓ(θ)` seen by the solver.
//! - The simplex solver is derivative-free and works directly on the
//!   box-constrained parameter vector.
use argmin::solver::neldermead::NelderMead;
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// Parameter vector `θ` for log-likelihood optimization.
pub type Theta = Array1<f64>;

/// Gradient vector `∇ℓ(θ)`, matching the shape of `Theta`.
pub type Grad = Array1<f64>;

/// Dense Hessian matrix; `n × n` for `n = Theta.len()`.
pub type Hessian = Array2<f64>;

/// Scalar objective value used by the optimizer, `c(θ) = -ℓ(θ)`.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Default relative edge length of the initial simplex.
pub const DEFAULT_SIMPLEX_STEP: f64 = 0.05;

/// Absolute edge length used for coordinates that start at zero.
pub const ZERO_COORD_STEP: f64 = 2.5e-4;

/// Default cost-spread tolerance for simplex convergence.
pub const DEFAULT_TOL_COST: f64 = 1e-8;

/// Default iteration cap per solver run.
pub const DEFAULT_MAX_ITER: usize = 2000;

/// Nelder–Mead specialized to this crate's numeric types.
pub type NelderMeadSolver = NelderMead<Theta, Cost>;
