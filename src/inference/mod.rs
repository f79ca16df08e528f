//! inference — standard errors for fitted models.
//!
//! Purpose
//! -------
//! Post-estimation uncertainty quantification: classical
//! (observed-information) covariance and standard errors computed from a
//! finite-difference Hessian of the log-likelihood at the estimate.
//!
//! Conventions
//! -----------
//! - Parameters are the model's own coordinates (for GARCH, `[ω, α…, β…]`);
//!   the Hessian is taken on the summed log-likelihood, so the covariance
//!   needs no further scaling by the sample size.
//! - All functions are pure: no logging, no global state.
pub mod hessian;

pub use self::hessian::{calc_covariance, calc_standard_errors, observed_information};
