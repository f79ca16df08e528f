//! volatility — GARCH(p, q) stack: core numerics, models, and errors.
//!
//! Purpose
//! -------
//! Provide a cohesive GARCH(p, q) conditional-volatility layer that bundles
//! validated inputs, the variance recursion and likelihood, estimation,
//! simulation, forecasting and reporting under a single namespace. This is
//! the surface most consumers (including the Python bindings) depend on.
//!
//! Key behaviors
//! -------------
//! - [`core`] holds the building blocks: [`ReturnSeries`], [`GARCHOrder`],
//!   [`GARCHParams`], the filter, the likelihood, innovation samplers,
//!   bounds, guards and options.
//! - [`models`] holds [`GARCHModel`] / [`fit`], [`FittedModel`],
//!   [`simulate`] and [`FitReport`].
//! - [`errors`] centralizes [`GarchError`] and [`ParamError`] so callers
//!   see one error surface across the stack.
//!
//! Invariants & assumptions
//! ------------------------
//! - Return series are finite and non-empty; parameter sets used for
//!   filtering satisfy ω > 0, α, β ≥ 0 and Σα + Σβ < 1, otherwise the
//!   filter reports `InvalidParameters`.
//! - Every lag reaching before the start of a series is replaced by the
//!   long-run variance, both when filtering and when simulating.
//!
//! Conventions
//! -----------
//! - `p` counts α (squared-return) lags and `q` counts β (variance) lags;
//!   flat parameter vectors are ordered `[ω, α₁…α_p, β₁…β_q]`.
//! - Indexing is 0-based with the oldest observation at index 0.
//! - Logging goes through `tracing`; the library never installs a
//!   subscriber.
//!
//! Downstream usage
//! ----------------
//! 1. Build a [`ReturnSeries`] (directly or from prices).
//! 2. Fit with [`fit`] or a configured [`GARCHModel`].
//! 3. Inspect the [`FittedModel`], forecast, simulate, or build a
//!    [`FitReport`] and export it as JSON.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    GARCHOptions, GARCHOrder, GARCHParams, Innovation, InnovationSampler, LikelihoodForm,
    ParamBounds, ReturnSeries, SimOpts, VarianceGuards,
};

pub use self::errors::{GarchError, GarchResult, ParamError, ParamResult};

pub use self::models::{
    FitReport, FittedModel, GARCHModel, ReferenceIntervals, SimulatedPath, fit, simulate,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_volatility::volatility::prelude::*;
//
// to import the main GARCH surface in a single line, without pulling in
// lower-level internals.

pub mod prelude {
    pub use super::{
        FitReport, FittedModel, GARCHModel, GARCHOptions, GARCHOrder, GARCHParams, GarchError,
        GarchResult, Innovation, InnovationSampler, LikelihoodForm, ParamBounds, ParamError,
        ParamResult, ReferenceIntervals, ReturnSeries, SimOpts, SimulatedPath, VarianceGuards,
        fit, simulate,
    };
}
