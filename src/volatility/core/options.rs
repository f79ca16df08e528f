//! GARCH options — configuration for estimation and simulation workflows.
//!
//! Purpose
//! -------
//! Collect configuration knobs for GARCH(p, q) estimation and simulation in
//! one place, so call sites pass explicit, validated options instead of
//! ad-hoc flags.
//!
//! Key behaviors
//! -------------
//! - [`GARCHOptions`] bundles the optimizer options, an optional parameter
//!   box, the variance floor used by the likelihood, and the likelihood form.
//! - [`SimOpts`] controls RNG seeding, burn-in, and whether paths are
//!   generated in parallel.
//!
//! Invariants & assumptions
//! ------------------------
//! - Components are validated by their own builders (`MLEOptions::new`,
//!   `ParamBounds::new`, `VarianceGuards::new`); this module adds no
//!   cross-field checks except matching the box to the model order, which
//!   happens at fit time.
//! - With a fixed seed, simulation output does not depend on `parallel`.
use crate::{
    optimization::loglik_optimizer::MLEOptions,
    volatility::core::{bounds::ParamBounds, guards::VarianceGuards, likelihood::LikelihoodForm},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GARCHOptions {
    /// Nelder–Mead tolerances, simplex step, restarts and verbosity.
    pub mle_opts: MLEOptions,
    /// Parameter box; `None` uses [`ParamBounds::for_order`].
    pub bounds: Option<ParamBounds>,
    /// Floor applied to variances inside the likelihood.
    pub variance_guards: VarianceGuards,
    /// Exact Gaussian NLL or its constant-free kernel.
    pub likelihood: LikelihoodForm,
}

impl GARCHOptions {
    pub fn new(
        mle_opts: MLEOptions, bounds: Option<ParamBounds>, variance_guards: VarianceGuards,
        likelihood: LikelihoodForm,
    ) -> GARCHOptions {
        GARCHOptions { mle_opts, bounds, variance_guards, likelihood }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimOpts {
    /// Base RNG seed; path `i` uses `seed + i`. `None` draws a base seed.
    pub seed: Option<u64>,
    /// Steps simulated and discarded before the returned window.
    pub burn_in: usize,
    /// Generate paths on the rayon thread pool.
    pub parallel: bool,
}

impl SimOpts {
    pub fn new(seed: Option<u64>, burn_in: usize, parallel: bool) -> SimOpts {
        SimOpts { seed, burn_in, parallel }
    }
}

impl Default for SimOpts {
    fn default() -> Self {
        SimOpts { seed: Some(42), burn_in: 0, parallel: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volatility::core::guards::DEFAULT_VARIANCE_FLOOR;

    #[test]
    // Purpose
    // -------
    // Defaults match the documented configuration.
    //
    // Given
    // -----
    // - `GARCHOptions::default()` and `SimOpts::default()`.
    //
    // Expect
    // ------
    // - Exact likelihood, default floor, no explicit box; seed 42, no burn-in,
    //   parallel generation.
    fn defaults_are_documented_values() {
        let opts = GARCHOptions::default();
        let sim = SimOpts::default();

        assert_eq!(opts.likelihood, LikelihoodForm::Exact);
        assert_eq!(opts.variance_guards.floor, DEFAULT_VARIANCE_FLOOR);
        assert!(opts.bounds.is_none());
        assert_eq!(sim, SimOpts::new(Some(42), 0, true));
    }
}
