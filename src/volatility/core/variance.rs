//! Conditional-variance recursion for GARCH(p, q).
//!
//! Purpose
//! -------
//! Map `(ω, α, β)` and a return series to the one-step-ahead conditional
//! variance series
//!
//! ```text
//! σ²_t = ω + Σ_{k=1..p} α_k r²_{t-k} + Σ_{j=1..q} β_j σ²_{t-j}
//! ```
//!
//! Key behaviors
//! -------------
//! - Any lag that would read before the start of the series (including every
//!   lag at `t = 0`) is replaced by the long-run variance
//!   `σ̄² = ω / (1 − Σα − Σβ)`, so `σ²_0 = σ̄²` exactly.
//! - [`variance_step`] is the single recursion step; [`filter`] drives it over
//!   observed returns and the simulator drives it over simulated ones.
//! - Inadmissible or non-stationary parameters are reported as
//!   `InvalidParameters` before any value is produced.
//!
//! Invariants & assumptions
//! ------------------------
//! - Causality: `σ²_t` depends only on `r_0..r_{t-1}` and `σ²_0..σ²_{t-1}`.
//! - The output buffer is allocated once per [`filter`] call; there is no
//!   incremental state between calls.
//! - Summation order is fixed (ω, then α terms by lag, then β terms by lag) so
//!   recomputing a step from the filter's own outputs is bit-for-bit stable.
use crate::volatility::{
    core::params::GARCHParams,
    errors::{GarchError, GarchResult},
};
use ndarray::{Array1, ArrayView1};

/// One step of the GARCH recursion at time `t`.
///
/// `returns` and `variances` must hold at least `t` entries; only indices
/// `< t` are read. Lags reaching before index 0 use `long_run`.
#[inline]
pub fn variance_step(
    params: &GARCHParams, returns: ArrayView1<f64>, variances: ArrayView1<f64>, t: usize,
    long_run: f64,
) -> f64 {
    if t == 0 {
        return long_run;
    }
    let mut value = params.omega;
    for (k, &alpha_k) in params.alpha.iter().enumerate() {
        let lag = k + 1;
        let sq_return = if lag > t {
            long_run
        } else {
            let r = returns[t - lag];
            r * r
        };
        value += alpha_k * sq_return;
    }
    for (j, &beta_j) in params.beta.iter().enumerate() {
        let lag = j + 1;
        let lagged_var = if lag > t { long_run } else { variances[t - lag] };
        value += beta_j * lagged_var;
    }
    value
}

/// Conditional variance series for `returns` under `params`.
///
/// # Errors
/// - [`GarchError::InvalidParameters`] if `params` is inadmissible or
///   non-stationary (`Σα + Σβ ≥ 1`).
/// - [`GarchError::DegenerateVariance`] if a step yields a negative or
///   non-finite value (e.g. non-finite input returns).
pub fn filter(params: &GARCHParams, returns: ArrayView1<f64>) -> GarchResult<Array1<f64>> {
    let long_run = params.long_run_variance()?;
    let n = returns.len();
    let mut variances = Array1::<f64>::zeros(n);
    for t in 0..n {
        let value = variance_step(params, returns, variances.view(), t, long_run);
        if !value.is_finite() || value < 0.0 {
            return Err(GarchError::DegenerateVariance { index: t, value });
        }
        variances[t] = value;
    }
    Ok(variances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volatility::errors::ParamError;
    use approx::assert_relative_eq;
    use ndarray::array;
    use proptest::prelude::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The worked GARCH(1, 1) trace and the σ²_0 = σ̄² rule.
    // - Long-run substitution for lags before the sample when p ≠ q.
    // - Degenerate orders (ARCH only, constant variance).
    // - Rejection of non-stationary parameters.
    // - Property tests for causality and recursion self-consistency.
    // -------------------------------------------------------------------------

    fn garch11() -> GARCHParams {
        GARCHParams::new(0.05, array![0.1], array![0.85]).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Reproduce the hand-computed GARCH(1, 1) trace.
    //
    // Given
    // -----
    // - (ω, α, β) = (0.05, 0.1, 0.85) and r = [1.0, -0.5, 0.8, -1.2, 0.3].
    //
    // Expect
    // ------
    // - σ² = [1.0, 1.0, 0.925, 0.90025, 0.9592125].
    fn worked_example_matches_hand_trace() {
        // Arrange
        let params = garch11();
        let returns = array![1.0, -0.5, 0.8, -1.2, 0.3];

        // Act
        let variances = filter(&params, returns.view()).unwrap();

        // Assert
        let expected = [1.0, 1.0, 0.925, 0.90025, 0.9592125];
        assert_eq!(variances.len(), expected.len());
        for (got, want) in variances.iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // The first element equals the long-run variance exactly.
    //
    // Given
    // -----
    // - A GARCH(2, 3) parameter set and a short series.
    //
    // Expect
    // ------
    // - `σ²_0 == long_run_variance()` bit-for-bit.
    fn first_element_is_long_run_variance() {
        let params =
            GARCHParams::new(0.2, array![0.05, 0.04], array![0.3, 0.2, 0.1]).unwrap();
        let returns = array![0.4, -1.1, 0.2, 0.9];

        let variances = filter(&params, returns.view()).unwrap();

        assert_eq!(variances[0], params.long_run_variance().unwrap());
    }

    #[test]
    // Purpose
    // -------
    // With p ≠ q, lags before the sample use σ̄² for whichever group lacks
    // history.
    //
    // Given
    // -----
    // - GARCH(1, 2) with ω = 0.1, α = [0.1], β = [0.4, 0.3]; σ̄² = 0.5.
    // - r = [2.0, 1.0].
    //
    // Expect
    // ------
    // - σ²_1 = ω + α r²_0 + β₁ σ²_0 + β₂ σ̄² = 0.1 + 0.4 + 0.2 + 0.15 = 0.85.
    fn missing_variance_lag_uses_long_run_variance() {
        let params = GARCHParams::new(0.1, array![0.1], array![0.4, 0.3]).unwrap();
        let returns = array![2.0, 1.0];

        let variances = filter(&params, returns.view()).unwrap();

        assert_relative_eq!(variances[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(variances[1], 0.85, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Empty α/β groups reduce to ARCH and constant-variance models without a
    // separate code path.
    //
    // Given
    // -----
    // - ARCH(1): ω = 0.5, α = [0.5]; constant: ω = 2.0.
    // - r = [1.0, 3.0, 0.0].
    //
    // Expect
    // ------
    // - ARCH(1): σ² = [1.0, 0.5 + 0.5 · 1², 0.5 + 0.5 · 3²] = [1.0, 1.0, 5.0].
    // - Constant: σ² = [2.0, 2.0, 2.0].
    fn degenerate_orders_are_empty_sums() {
        let arch = GARCHParams::new(0.5, array![0.5], Array1::zeros(0)).unwrap();
        let constant = GARCHParams::new(2.0, Array1::zeros(0), Array1::zeros(0)).unwrap();
        let returns = array![1.0, 3.0, 0.0];

        let arch_var = filter(&arch, returns.view()).unwrap();
        let const_var = filter(&constant, returns.view()).unwrap();

        assert_relative_eq!(arch_var[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(arch_var[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(arch_var[2], 5.0, epsilon = 1e-12);
        assert!(const_var.iter().all(|&v| v == 2.0));
    }

    #[test]
    // Purpose
    // -------
    // Non-stationary parameters are rejected instead of producing values.
    //
    // Given
    // -----
    // - Unchecked parameters with Σα + Σβ = 1.0 and 1.1.
    //
    // Expect
    // ------
    // - `InvalidParameters(StationarityViolated)` in both cases.
    fn non_stationary_parameters_are_rejected() {
        let returns = array![0.1, 0.2];
        for (alpha, beta) in [(0.25, 0.75), (0.3, 0.8)] {
            let params = GARCHParams { omega: 0.1, alpha: array![alpha], beta: array![beta] };
            assert!(matches!(
                filter(&params, returns.view()),
                Err(GarchError::InvalidParameters(ParamError::StationarityViolated { .. }))
            ));
        }
    }

    #[test]
    fn non_finite_return_is_degenerate() {
        let returns = array![0.1, f64::INFINITY, 0.2];
        assert!(matches!(
            filter(&garch11(), returns.view()),
            Err(GarchError::DegenerateVariance { index: 2, .. })
        ));
    }

    fn returns_strategy() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-5.0..5.0f64, 1..60)
    }

    fn params_strategy() -> impl Strategy<Value = GARCHParams> {
        (
            0.01..1.0f64,
            prop::collection::vec(0.0..0.15f64, 0..4),
            prop::collection::vec(0.0..0.15f64, 0..4),
        )
            .prop_map(|(omega, alpha, beta)| GARCHParams {
                omega,
                alpha: Array1::from(alpha),
                beta: Array1::from(beta),
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn recursion_is_self_consistent(params in params_strategy(), returns in returns_strategy()) {
            let returns = Array1::from(returns);
            let variances = filter(&params, returns.view()).unwrap();
            let long_run = params.long_run_variance().unwrap();
            let start = params.order().max_lag();
            for t in start..returns.len() {
                let mut direct = params.omega;
                for k in 1..=params.alpha.len() {
                    direct += params.alpha[k - 1] * (returns[t - k] * returns[t - k]);
                }
                for j in 1..=params.beta.len() {
                    direct += params.beta[j - 1] * variances[t - j];
                }
                prop_assert_eq!(direct.to_bits(), variances[t].to_bits());
            }
            prop_assert_eq!(variances[0], long_run);
        }

        #[test]
        fn filter_is_causal(
            params in params_strategy(),
            returns in returns_strategy(),
            shock in -50.0..50.0f64,
        ) {
            let base = Array1::from(returns);
            let cut = base.len() / 2;
            let mut perturbed = base.clone();
            for r in perturbed.iter_mut().skip(cut) {
                *r += shock;
            }
            let a = filter(&params, base.view()).unwrap();
            let b = filter(&params, perturbed.view()).unwrap();
            for t in 0..=cut.min(base.len() - 1) {
                prop_assert_eq!(a[t].to_bits(), b[t].to_bits());
            }
        }
    }
}
