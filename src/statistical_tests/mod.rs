//! statistical_tests — residual diagnostics for fitted volatility models.
//!
//! Purpose
//! -------
//! Collect statistical-test routines and their shared infrastructure. This
//! subtree implements the Ljung–Box portmanteau test, used on standardized
//! residuals and their squares to check for remaining autocorrelation and
//! ARCH effects after a GARCH fit.
//!
//! Key behaviors
//! -------------
//! - [`LBOutcome::ljung_box`](ljung_box::LBOutcome::ljung_box) computes the
//!   Q statistic and its χ² p-value, with an optional degrees-of-freedom
//!   correction.
//! - [`validate_input`] centralizes the series and lag checks.
//! - [`LBError`] / [`LBResult`] form the error surface, convertible to
//!   Python exceptions under the `python-bindings` feature.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite real series; routines never panic on user input.

pub mod errors;
pub mod ljung_box;
pub mod validation;

pub use self::errors::{LBError, LBResult};
pub use self::ljung_box::LBOutcome;
pub use self::validation::validate_input;
