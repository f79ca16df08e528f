//! optimization — MLE stack and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for model fitting: an
//! Argmin-backed, box-constrained log-likelihood optimizer plus a single
//! error/result surface. Callers implement a log-likelihood, choose
//! tolerances and bounds, and obtain fitted parameters and diagnostics
//! without touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **maximizing log-likelihoods** `ℓ(θ)`
//!   (`loglik_optimizer`), including solver construction and stopping
//!   criteria.
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer works directly on the constrained parameter vector; the
//!   box is enforced by the cost adapter, not by a change of variables.
//! - Log-likelihood implementations report inadmissible parameters as
//!   `-∞` and genuine numerical failures as `OptError`; nothing here panics.
//!
//! Downstream usage
//! ----------------
//! - Model code implements `LogLikelihood` for its types and calls
//!   `maximize` with a parameter guess, data payload, `Bounds`, and
//!   `MLEOptions` to obtain an `OptimOutcome`.
//! - Inference code uses `loglik_optimizer::finite_diff` for Hessians at the
//!   optimum.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules cover solver wiring, tolerance handling,
//!   box handling, finite differences, and error conversions.
//! - The GARCH integration tests exercise the full MLE path end to end.

pub mod errors;
pub mod loglik_optimizer;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_volatility::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::loglik_optimizer::prelude::*;
}
