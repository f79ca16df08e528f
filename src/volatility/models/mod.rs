//! models — GARCH(p, q) estimation, simulation and reporting.
//!
//! Purpose
//! -------
//! Collect the user-facing GARCH(p, q) workflow on top of `volatility::core`:
//! bounded maximum-likelihood estimation, the immutable fit result,
//! Monte Carlo simulation, and the fit report with reference validation.
//!
//! Key behaviors
//! -------------
//! - [`GARCHModel`] implements [`LogLikelihood`] and provides `fit`,
//!   `filter` and `negative_log_likelihood`; [`fit`] is the one-call
//!   shortcut with default options.
//! - [`FittedModel`] carries parameters, the in-sample variance series,
//!   likelihood values and the convergence status, and offers forecasts
//!   and simulation from the estimate.
//! - [`simulate`] generates independent paths, optionally in parallel.
//! - [`FitReport`] adds standard errors, information criteria and residual
//!   diagnostics, and validates estimates against [`ReferenceIntervals`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Fitting never mutates the model; there is no interior mutability, so
//!   models and results are `Send + Sync` and independent fits may run on
//!   separate threads.
//! - Non-convergence is recorded on the [`FittedModel`], not raised; use
//!   [`FittedModel::ensure_converged`] to turn it into an error.
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule cover the likelihood wiring, input
//!   validation, seed determinism and report assembly.
//! - Parameter recovery and ensemble convergence are covered by the
//!   integration tests.
//!
//! [`LogLikelihood`]: crate::optimization::loglik_optimizer::LogLikelihood

pub mod fitted;
pub mod garch;
pub mod report;
pub mod simulation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::fitted::{Convergence, FittedModel};
pub use self::garch::{GARCHModel, fit};
pub use self::report::{FitReport, ParameterCheck, ParameterEstimate, ReferenceIntervals};
pub use self::simulation::{SimulatedPath, ensemble_mean_variance, simulate};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_volatility::volatility::models::prelude::*;
//
// to import the main GARCH model surface in a single line.

pub mod prelude {
    pub use super::fitted::FittedModel;
    pub use super::garch::{GARCHModel, fit};
    pub use super::report::{FitReport, ReferenceIntervals};
    pub use super::simulation::{SimulatedPath, simulate};
}
