//! Ljung–Box portmanteau test for residual autocorrelation.
//!
//! Purpose
//! -------
//! Test the null of no serial correlation up to lag `h` in a series, usually
//! the standardized residuals `z_t = r_t / σ_t` of a fitted volatility model
//! (or their squares, to detect remaining ARCH effects).
//!
//! Key behaviors
//! -------------
//! - Sample autocorrelations use the demeaned series with the lag-0
//!   autocovariance in the denominator:
//!   `ρ̂_k = Σ_{t=k}^{n-1} (y_t − ȳ)(y_{t-k} − ȳ) / Σ_t (y_t − ȳ)²`.
//! - The statistic is `Q = n (n + 2) Σ_{k=1}^{h} ρ̂_k² / (n − k)`.
//! - The p-value is the upper tail of `χ²(h − m)`, where `m` is an optional
//!   correction for estimated model parameters.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated by
//!   [`validate_input`](crate::statistical_tests::validation::validate_input):
//!   at least two finite observations and `1 ≤ h < n`.
//! - A constant series is rejected with `LBError::ZeroVariance`.
use crate::statistical_tests::{
    errors::{LBError, LBResult},
    validation::validate_input,
};
use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Ljung–Box test result.
///
/// - `lags`: number of autocorrelations `h` in the statistic.
/// - `dof`: χ² degrees of freedom `h − m`.
/// - `stat`: `Q`.
/// - `p_value`: `P(χ²(dof) > Q)`, in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct LBOutcome {
    lags: usize,
    dof: usize,
    stat: f64,
    p_value: f64,
}

impl LBOutcome {
    /// Run the Ljung–Box test with `h = lags` and no degrees-of-freedom
    /// correction.
    ///
    /// # Errors
    /// - Any `LBError` from input validation, or `LBError::ZeroVariance`.
    ///
    /// # Examples
    /// ```rust
    /// use rust_volatility::statistical_tests::ljung_box::LBOutcome;
    ///
    /// let data = vec![1.0, -1.0, 1.0, -1.0];
    /// let outcome = LBOutcome::ljung_box(&data, 1).unwrap();
    ///
    /// assert!((outcome.stat() - 4.5).abs() < 1e-12);
    /// assert!((0.0..=1.0).contains(&outcome.p_value()));
    /// ```
    pub fn ljung_box(data: &[f64], lags: usize) -> LBResult<Self> {
        LBOutcome::ljung_box_with_dof(data, lags, 0)
    }

    /// Ljung–Box test whose χ² reference has `lags − model_df` degrees of
    /// freedom.
    ///
    /// # Errors
    /// - `LBError::InvalidDof` if `model_df >= lags`.
    /// - See [`LBOutcome::ljung_box`].
    pub fn ljung_box_with_dof(data: &[f64], lags: usize, model_df: usize) -> LBResult<Self> {
        validate_input(data, lags)?;
        if model_df >= lags {
            return Err(LBError::InvalidDof { lags, model_df });
        }
        let dof = lags - model_df;
        let n = data.len() as f64;
        let rho = calc_autocorrelations(data, lags)?;
        let stat = rho
            .iter()
            .enumerate()
            .map(|(i, &r)| r * r / (n - (i + 1) as f64))
            .sum::<f64>()
            * n
            * (n + 2.0);
        let chi2 =
            ChiSquared::new(dof as f64).map_err(|_| LBError::InvalidDof { lags, model_df })?;
        let p_value = (1.0 - chi2.cdf(stat)).clamp(0.0, 1.0);

        Ok(LBOutcome { lags, dof, stat, p_value })
    }

    pub fn lags(&self) -> usize {
        self.lags
    }

    pub fn dof(&self) -> usize {
        self.dof
    }

    /// Ljung–Box statistic `Q`.
    pub fn stat(&self) -> f64 {
        self.stat
    }

    pub fn p_value(&self) -> f64 {
        self.p_value
    }
}

// ---------- Private helpers ----------

/// `ρ̂_1 … ρ̂_h` of a validated series.
fn calc_autocorrelations(data: &[f64], lags: usize) -> LBResult<Vec<f64>> {
    let n = data.len();
    let mean = data.iter().sum::<f64>() / n as f64;
    let gamma0: f64 = data.iter().map(|&y| (y - mean) * (y - mean)).sum();
    if gamma0 <= 0.0 {
        return Err(LBError::ZeroVariance);
    }
    Ok((1..=lags)
        .map(|k| {
            let gamma_k: f64 =
                (k..n).map(|t| (data[t] - mean) * (data[t - k] - mean)).sum();
            gamma_k / gamma0
        })
        .collect())
}
