//! Monte Carlo simulation of GARCH(p, q) paths.
//!
//! Purpose
//! -------
//! Generate `count` independent return/variance paths of length `horizon`
//! from a parameter set, reusing the estimation recursion
//! ([`variance_step`]) generatively on simulated returns.
//!
//! Key behaviors
//! -------------
//! - Each path starts at the long-run variance; step `t` draws a
//!   standardized shock `z_t`, sets `r_t = σ_t · z_t`, and feeds `r_t` into
//!   the next variance update.
//! - Path `i` owns its own `StdRng` seeded with `base_seed + i`, so output
//!   does not depend on `SimOpts::parallel` or on rayon's scheduling.
//! - An optional burn-in is simulated and discarded before the returned
//!   window.
//!
//! Invariants & assumptions
//! ------------------------
//! - `horizon >= 1` and `count >= 1`; paths have exactly `horizon` pairs.
//! - Buffers are sized once per path (`burn_in + horizon`).
use crate::volatility::{
    core::{
        innovations::InnovationSampler, options::SimOpts, params::GARCHParams,
        variance::variance_step,
    },
    errors::{GarchError, GarchResult},
};
use ndarray::{Array1, s};
use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use tracing::debug;

/// One simulated path: `returns[t]` was drawn with variance `variances[t]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPath {
    pub returns: Array1<f64>,
    pub variances: Array1<f64>,
}

impl SimulatedPath {
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// `(return, variance)` pairs in time order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.returns.iter().copied().zip(self.variances.iter().copied())
    }
}

/// Simulate `count` independent paths of `horizon` steps.
///
/// # Errors
/// - [`GarchError::InvalidParameters`] if `params` is inadmissible or
///   non-stationary.
/// - [`GarchError::InvalidSimulation`] if `horizon == 0` or `count == 0`.
/// - [`GarchError::DegenerateVariance`] if a simulated variance is
///   non-finite (e.g. a sampler returned NaN).
///
/// # Example
/// ```rust
/// # use ndarray::array;
/// # use rust_volatility::volatility::core::{GARCHParams, Innovation, SimOpts};
/// # use rust_volatility::volatility::models::simulate;
/// let params = GARCHParams::new(0.05, array![0.1], array![0.85]).unwrap();
/// let paths = simulate(&params, 250, 4, &Innovation::Normal, &SimOpts::default()).unwrap();
/// assert_eq!(paths.len(), 4);
/// assert!(paths.iter().all(|path| path.len() == 250));
/// ```
pub fn simulate<S: InnovationSampler>(
    params: &GARCHParams, horizon: usize, count: usize, sampler: &S, opts: &SimOpts,
) -> GarchResult<Vec<SimulatedPath>> {
    let long_run = params.long_run_variance()?;
    if horizon == 0 {
        return Err(GarchError::InvalidSimulation {
            value: horizon,
            reason: "Simulation horizon must be at least 1.",
        });
    }
    if count == 0 {
        return Err(GarchError::InvalidSimulation {
            value: count,
            reason: "Number of simulated paths must be at least 1.",
        });
    }
    let base_seed = opts.seed.unwrap_or_else(rand::random);
    debug!(horizon, count, seed = base_seed, burn_in = opts.burn_in, "simulating GARCH paths");

    let build = |i: usize| {
        simulate_path(params, long_run, horizon, opts.burn_in, sampler, base_seed.wrapping_add(i as u64))
    };
    if opts.parallel {
        (0..count).into_par_iter().map(build).collect()
    } else {
        (0..count).map(build).collect()
    }
}

/// Cross-sectional mean of the variance at `step` across `paths`.
///
/// # Errors
/// - [`GarchError::InvalidSimulation`] if `paths` is empty or `step` is past
///   the end of any path.
pub fn ensemble_mean_variance(paths: &[SimulatedPath], step: usize) -> GarchResult<f64> {
    if paths.is_empty() {
        return Err(GarchError::InvalidSimulation {
            value: 0,
            reason: "Ensemble must contain at least one path.",
        });
    }
    let mut total = 0.0;
    for path in paths {
        match path.variances.get(step) {
            Some(&v) => total += v,
            None => {
                return Err(GarchError::InvalidSimulation {
                    value: step,
                    reason: "Step index exceeds the simulated path length.",
                });
            }
        }
    }
    Ok(total / paths.len() as f64)
}

// ---- Helper methods ----

fn simulate_path<S: InnovationSampler>(
    params: &GARCHParams, long_run: f64, horizon: usize, burn_in: usize, sampler: &S, seed: u64,
) -> GarchResult<SimulatedPath> {
    let total = burn_in + horizon;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut returns = Array1::<f64>::zeros(total);
    let mut variances = Array1::<f64>::zeros(total);
    for t in 0..total {
        let var = variance_step(params, returns.view(), variances.view(), t, long_run);
        if !var.is_finite() || var < 0.0 {
            return Err(GarchError::DegenerateVariance { index: t, value: var });
        }
        variances[t] = var;
        returns[t] = var.sqrt() * sampler.draw(&mut rng);
    }
    if burn_in == 0 {
        return Ok(SimulatedPath { returns, variances });
    }
    Ok(SimulatedPath {
        returns: returns.slice(s![burn_in..]).to_owned(),
        variances: variances.slice(s![burn_in..]).to_owned(),
    })
}
