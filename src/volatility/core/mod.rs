//! volatility::core — building blocks for GARCH(p, q) models.
//!
//! Purpose
//! -------
//! Hold the model-agnostic pieces the estimator and simulator are assembled
//! from: validated inputs, parameter containers, the variance recursion, the
//! likelihood, innovation samplers, and configuration.
//!
//! Key behaviors
//! -------------
//! - [`ReturnSeries`] wraps a finite, non-empty return sample.
//! - [`GARCHOrder`] and [`GARCHParams`] describe the model and its
//!   coefficients; [`ParamBounds`] is the estimation box.
//! - [`filter`] / [`variance_step`] implement the conditional-variance
//!   recursion with long-run substitution for pre-sample lags.
//! - [`negative_log_likelihood`] scores a parameter set (`+∞` when
//!   inadmissible).
//! - [`forecast_variance`] projects variances beyond the sample.
//! - [`Innovation`] / [`InnovationSampler`] supply standardized shocks.
//!
//! Conventions
//! -----------
//! - `p` counts α (squared-return) lags and `q` counts β (variance) lags.
//! - Flat parameter vectors are ordered `[ω, α₁…α_p, β₁…β_q]`.

pub mod bounds;
pub mod data;
pub mod forecasts;
pub mod guards;
pub mod init;
pub mod innovations;
pub mod likelihood;
pub mod options;
pub mod order;
pub mod params;
pub mod validation;
pub mod variance;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::bounds::ParamBounds;
pub use self::data::ReturnSeries;
pub use self::forecasts::forecast_variance;
pub use self::guards::VarianceGuards;
pub use self::init::default_initial_guess;
pub use self::innovations::{HansenSkewedT, Innovation, InnovationSampler, StandardizedStudentT};
pub use self::likelihood::{
    LikelihoodForm, log_likelihood_score, negative_log_likelihood, nll_from_variances,
};
pub use self::options::{GARCHOptions, SimOpts};
pub use self::order::GARCHOrder;
pub use self::params::{GARCHParams, parameter_names};
pub use self::variance::{filter, variance_step};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_volatility::volatility::core::prelude::*;
//
// to import the main GARCH core surface in a single line.

pub mod prelude {
    pub use super::bounds::ParamBounds;
    pub use super::data::ReturnSeries;
    pub use super::forecasts::forecast_variance;
    pub use super::guards::VarianceGuards;
    pub use super::innovations::{Innovation, InnovationSampler};
    pub use super::likelihood::{LikelihoodForm, negative_log_likelihood};
    pub use super::options::{GARCHOptions, SimOpts};
    pub use super::order::GARCHOrder;
    pub use super::params::GARCHParams;
    pub use super::variance::filter;
}
