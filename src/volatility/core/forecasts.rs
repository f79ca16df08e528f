//! Multi-step conditional-variance forecasts.
//!
//! Given an observed sample `r_0..r_{n-1}` with its filtered variances
//! `σ²_0..σ²_{n-1}`, the forecast for `h = 1..H` steps ahead is
//!
//! ```text
//! σ̂²_{n+h-1} = ω + Σ_k α_k E[r²_{n+h-1-k}] + Σ_j β_j σ̂²_{n+h-1-j}
//! ```
//!
//! with `E[r²_s] = r²_s` inside the sample and `E[r²_s] = σ̂²_s` beyond it.
//! Lags before the start of the sample use the long-run variance, matching
//! the filter. Forecasts converge geometrically to the long-run variance at
//! rate `Σα + Σβ`.
use crate::volatility::{
    core::params::GARCHParams,
    errors::{GarchError, GarchResult},
};
use ndarray::{Array1, ArrayView1, s};

/// `horizon` variance forecasts following the sample.
///
/// Element `h - 1` is the forecast for observation `n + h - 1`.
///
/// # Errors
/// - [`GarchError::InvalidParameters`] if `params` is inadmissible.
/// - [`GarchError::InvalidOrder`] if `returns` and `variances` differ in length.
/// - [`GarchError::InvalidSimulation`] if `horizon == 0`.
pub fn forecast_variance(
    params: &GARCHParams, returns: ArrayView1<f64>, variances: ArrayView1<f64>, horizon: usize,
) -> GarchResult<Array1<f64>> {
    let long_run = params.long_run_variance()?;
    let n = returns.len();
    if variances.len() != n {
        return Err(GarchError::InvalidOrder {
            expected: n,
            actual: variances.len(),
            reason: "Variance series must have one entry per return.",
        });
    }
    if horizon == 0 {
        return Err(GarchError::InvalidSimulation {
            value: horizon,
            reason: "Forecast horizon must be at least 1.",
        });
    }

    let total = n + horizon;
    let mut sq_returns = Array1::<f64>::zeros(total);
    let mut path = Array1::<f64>::zeros(total);
    sq_returns.slice_mut(s![..n]).assign(&returns.mapv(|r| r * r));
    path.slice_mut(s![..n]).assign(&variances);

    for t in n..total {
        let mut value = params.omega;
        for (k, &alpha_k) in params.alpha.iter().enumerate() {
            let lag = k + 1;
            value += alpha_k * if lag > t { long_run } else { sq_returns[t - lag] };
        }
        for (j, &beta_j) in params.beta.iter().enumerate() {
            let lag = j + 1;
            value += beta_j * if lag > t { long_run } else { path[t - lag] };
        }
        if !value.is_finite() {
            return Err(GarchError::DegenerateVariance { index: t, value });
        }
        path[t] = value;
        sq_returns[t] = value;
    }
    Ok(path.slice(s![n..]).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volatility::core::variance::filter;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement of the one-step forecast with the filter's next step.
    // - The closed-form GARCH(1, 1) term structure.
    // - Empty samples and argument validation.
    // -------------------------------------------------------------------------

    fn garch11() -> GARCHParams {
        GARCHParams::new(0.05, array![0.1], array![0.85]).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // The first forecast equals what the filter would produce for the next
    // observation.
    //
    // Given
    // -----
    // - GARCH(1, 1), r = [1.0, -0.5, 0.8, -1.2, 0.3]; the filter is run on
    //   r plus an arbitrary sixth return.
    //
    // Expect
    // ------
    // - forecast[0] == filter(r ++ [x])[5].
    fn one_step_forecast_matches_filter() {
        // Arrange
        let params = garch11();
        let returns = array![1.0, -0.5, 0.8, -1.2, 0.3];
        let variances = filter(&params, returns.view()).unwrap();
        let extended = filter(&params, array![1.0, -0.5, 0.8, -1.2, 0.3, 9.0].view()).unwrap();

        // Act
        let fc = forecast_variance(&params, returns.view(), variances.view(), 3).unwrap();

        // Assert
        assert_relative_eq!(fc[0], extended[5], epsilon = 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // GARCH(1, 1) forecasts follow σ̂²_{h} − σ̄² = (α+β)^{h-1} (σ̂²_1 − σ̄²).
    //
    // Given
    // -----
    // - GARCH(1, 1) with σ̄² = 1 and a sample ending in a large shock.
    //
    // Expect
    // ------
    // - Geometric decay towards 1 at rate 0.95.
    fn garch11_term_structure_decays_geometrically() {
        let params = garch11();
        let returns = array![0.1, 3.0];
        let variances = filter(&params, returns.view()).unwrap();

        let fc = forecast_variance(&params, returns.view(), variances.view(), 50).unwrap();

        for h in 1..50 {
            assert_relative_eq!(fc[h] - 1.0, 0.95f64.powi(h as i32) * (fc[0] - 1.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn empty_sample_forecasts_long_run_variance() {
        let params = garch11();
        let empty = Array1::<f64>::zeros(0);

        let fc = forecast_variance(&params, empty.view(), empty.view(), 4).unwrap();

        assert!(fc.iter().all(|&v| (v - 1.0).abs() < 1e-12));
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        let params = garch11();
        let r = array![0.1, 0.2];

        assert!(matches!(
            forecast_variance(&params, r.view(), array![1.0].view(), 2),
            Err(GarchError::InvalidOrder { .. })
        ));
        assert!(matches!(
            forecast_variance(&params, r.view(), array![1.0, 1.0].view(), 0),
            Err(GarchError::InvalidSimulation { .. })
        ));
    }
}
