//! loglik_optimizer — MLE-friendly, argmin-powered log-likelihood optimizer.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **maximizing
//! log-likelihoods** `ℓ(θ)` over a box of admissible parameters. Callers
//! implement a single trait, [`LogLikelihood`], and invoke [`maximize`] to run
//! a derivative-free Nelder–Mead search with configurable tolerances and
//! restarts.
//!
//! Key behaviors
//! -------------
//! - Convert user-supplied log-likelihoods `ℓ(θ)` into Argmin-compatible
//!   cost functions `c(θ) = -ℓ(θ)` via [`adapter::ArgMinAdapter`], scoring
//!   points outside the [`Bounds`] and inadmissible points as `+∞`.
//! - Expose a single, user-facing entrypoint [`maximize`] that:
//!   - validates the box and the initial guess,
//!   - builds the initial simplex via [`builders`],
//!   - executes the solver via [`run::run_nelder_mead`], restarting from the
//!     best point, and
//!   - normalizes results into an [`OptimOutcome`].
//! - Provide finite-difference gradients and Hessians in [`finite_diff`] for
//!   post-fit diagnostics and standard errors.
//!
//! Conventions
//! -----------
//! - Cost is always `c(θ) = -ℓ(θ)` internally; all user-facing APIs and
//!   diagnostics (including [`OptimOutcome::value`]) are expressed in terms
//!   of the log-likelihood `ℓ`.
//! - Hitting the iteration cap is reported as `converged = false`.
//! - Errors bubble up as [`OptResult<T>`] / [`OptError`]; this module and its
//!   children never intentionally panic or use `unsafe`.
//!
//! [`OptResult<T>`]: crate::optimization::errors::OptResult
//! [`OptError`]: crate::optimization::errors::OptError

pub mod adapter;
pub mod api;
pub mod bounds;
pub mod builders;
pub mod finite_diff;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::bounds::Bounds;
pub use self::traits::{LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
pub use self::types::{Cost, FnEvalMap, Grad, Hessian, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_volatility::optimization::loglik_optimizer::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::maximize;
    pub use super::bounds::Bounds;
    pub use super::traits::{LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
    pub use super::types::{Cost, Grad, Theta};
}
