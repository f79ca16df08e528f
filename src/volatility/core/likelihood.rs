//! Gaussian quasi-likelihood for GARCH(p, q).
//!
//! The estimator minimizes the negative log-likelihood
//!
//! ```text
//! Exact:   ½ Σ_t [ ln 2π + ln σ²_t + r²_t / σ²_t ]
//! Kernel:     Σ_t [ ln σ²_t + r²_t / σ²_t ]
//! ```
//!
//! Both forms share the same minimizer. `Exact` is the default and is the
//! value used for AIC/BIC; `Kernel` is the constant-free objective.
//!
//! Inadmissible candidates score `+∞` so a bounded minimizer can step away
//! from them. Numerical breakdown (`DegenerateVariance`) is an error.
//!
//! [`log_likelihood_score`] is the analytic gradient of the exact
//! log-likelihood `ℓ = −NLL`, obtained by differentiating the variance
//! recursion alongside the filter. Pre-sample lags contribute through the
//! long-run variance, which itself depends on every parameter.
use crate::volatility::{
    core::{guards::VarianceGuards, params::GARCHParams, variance::filter},
    errors::{GarchError, GarchResult},
};
use ndarray::{Array1, Array2, ArrayView1};
use statrs::consts::LN_SQRT_2PI;

/// Which negative log-likelihood is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LikelihoodForm {
    /// Full Gaussian negative log-likelihood including `½ ln 2π` per point.
    #[default]
    Exact,
    /// `Σ [ln σ² + r²/σ²]`, twice the exact form minus its constant.
    Kernel,
}

/// Negative log-likelihood of `returns` under `params`; smaller is better.
///
/// # Errors
/// - [`GarchError::DegenerateVariance`] if a (clamped) variance is non-finite.
///
/// Returns `Ok(f64::INFINITY)` when `params` is inadmissible or non-stationary.
pub fn negative_log_likelihood(
    params: &GARCHParams, returns: ArrayView1<f64>, form: LikelihoodForm,
    guards: &VarianceGuards,
) -> GarchResult<f64> {
    let variances = match filter(params, returns) {
        Ok(variances) => variances,
        Err(GarchError::InvalidParameters(_)) => return Ok(f64::INFINITY),
        Err(err) => return Err(err),
    };
    nll_from_variances(returns, variances.view(), form, guards)
}

/// Negative log-likelihood given an already filtered variance series.
pub fn nll_from_variances(
    returns: ArrayView1<f64>, variances: ArrayView1<f64>, form: LikelihoodForm,
    guards: &VarianceGuards,
) -> GarchResult<f64> {
    let mut kernel = 0.0;
    for (index, (&r, &raw)) in returns.iter().zip(variances.iter()).enumerate() {
        let var = guards.clamp(raw);
        if !var.is_finite() {
            return Err(GarchError::DegenerateVariance { index, value: raw });
        }
        kernel += var.ln() + r * r / var;
    }
    Ok(match form {
        LikelihoodForm::Exact => 0.5 * kernel + returns.len() as f64 * LN_SQRT_2PI,
        LikelihoodForm::Kernel => kernel,
    })
}

/// Gradient `∇ℓ(θ)` of the exact log-likelihood with respect to
/// `[ω, α₁…α_p, β₁…β_q]`.
///
/// Uses `∂ℓ/∂θ = −½ Σ_t (1/σ²_t − r²_t/σ⁴_t) ∂σ²_t/∂θ`, where `∂σ²_t/∂θ`
/// follows the same recursion as σ²_t. Steps whose variance sits on the
/// guard floor contribute nothing.
///
/// # Errors
/// - [`GarchError::InvalidParameters`] if `params` is inadmissible or
///   non-stationary.
/// - [`GarchError::DegenerateVariance`] from the filter.
pub fn log_likelihood_score(
    params: &GARCHParams, returns: ArrayView1<f64>, guards: &VarianceGuards,
) -> GarchResult<Array1<f64>> {
    let variances = filter(params, returns)?;
    let long_run = params.long_run_variance()?;
    let p = params.alpha.len();
    let dim = 1 + p + params.beta.len();
    let slack = 1.0 - params.persistence();

    let mut d_long_run = Array1::from_elem(dim, long_run / slack);
    d_long_run[0] = 1.0 / slack;
    let mut d_var = Array2::<f64>::zeros((returns.len(), dim));
    let mut score = Array1::<f64>::zeros(dim);

    for t in 0..returns.len() {
        let mut row = Array1::<f64>::zeros(dim);
        row[0] = 1.0;
        for (k, &alpha_k) in params.alpha.iter().enumerate() {
            let lag = k + 1;
            if lag > t {
                row[1 + k] += long_run;
                row.scaled_add(alpha_k, &d_long_run);
            } else {
                row[1 + k] += returns[t - lag] * returns[t - lag];
            }
        }
        for (j, &beta_j) in params.beta.iter().enumerate() {
            let lag = j + 1;
            if lag > t {
                row[1 + p + j] += long_run;
                row.scaled_add(beta_j, &d_long_run);
            } else {
                row[1 + p + j] += variances[t - lag];
                row.scaled_add(beta_j, &d_var.row(t - lag));
            }
        }

        let raw = variances[t];
        if guards.clamp(raw) == raw {
            let r2 = returns[t] * returns[t];
            score.scaled_add(-0.5 * (1.0 / raw - r2 / (raw * raw)), &row);
        }
        d_var.row_mut(t).assign(&row);
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array1, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement with the closed-form Gaussian likelihood for a constant
    //   variance model, and the location of its minimum.
    // - The relation between the exact and kernel forms.
    // - +∞ for non-stationary candidates and clamping of tiny variances.
    // - The analytic score against central differences of the likelihood.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // For GARCH(0, 0), σ²_t = ω and the objective has a closed form.
    //
    // Given
    // -----
    // - r = [1, -2, 0.5, 1.5], ω = 1.25.
    //
    // Expect
    // ------
    // - NLL = n/2 ln(2π ω) + Σr² / (2ω).
    fn constant_variance_matches_closed_form() {
        // Arrange
        let returns = array![1.0, -2.0, 0.5, 1.5];
        let omega = 1.25;
        let params = GARCHParams::new(omega, Array1::zeros(0), Array1::zeros(0)).unwrap();
        let sum_sq: f64 = returns.iter().map(|r| r * r).sum();
        let n = returns.len() as f64;
        let expected = 0.5 * n * (2.0 * std::f64::consts::PI * omega).ln() + sum_sq / (2.0 * omega);

        // Act
        let nll = negative_log_likelihood(
            &params,
            returns.view(),
            LikelihoodForm::Exact,
            &VarianceGuards::default(),
        )
        .unwrap();

        // Assert
        assert_relative_eq!(nll, expected, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // The sign convention makes the MLE a minimum: for a constant-variance
    // model the objective is minimized at ω = mean(r²).
    //
    // Given
    // -----
    // - r = [1, -2, 0.5, 1.5], mean(r²) = 1.875.
    //
    // Expect
    // ------
    // - NLL at 1.875 is below NLL at 1.875 ± 0.2.
    fn constant_variance_minimum_is_mean_square() {
        let returns = array![1.0, -2.0, 0.5, 1.5];
        let guards = VarianceGuards::default();
        let nll = |omega: f64| {
            let params = GARCHParams::new(omega, Array1::zeros(0), Array1::zeros(0)).unwrap();
            negative_log_likelihood(&params, returns.view(), LikelihoodForm::Exact, &guards)
                .unwrap()
        };

        let at_min = nll(1.875);

        assert!(at_min < nll(1.675));
        assert!(at_min < nll(2.075));
    }

    #[test]
    // Purpose
    // -------
    // `Kernel = 2 · Exact − n ln 2π`.
    //
    // Given
    // -----
    // - A GARCH(1, 1) parameter set and five returns.
    //
    // Expect
    // ------
    // - The identity holds to 1e-12.
    fn kernel_form_is_affine_in_exact_form() {
        let params = GARCHParams::new(0.05, array![0.1], array![0.85]).unwrap();
        let returns = array![1.0, -0.5, 0.8, -1.2, 0.3];
        let guards = VarianceGuards::default();

        let exact =
            negative_log_likelihood(&params, returns.view(), LikelihoodForm::Exact, &guards)
                .unwrap();
        let kernel =
            negative_log_likelihood(&params, returns.view(), LikelihoodForm::Kernel, &guards)
                .unwrap();

        assert_relative_eq!(kernel, 2.0 * exact - 10.0 * LN_SQRT_2PI, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Non-stationary candidates are scored +∞ instead of raising.
    //
    // Given
    // -----
    // - Unchecked parameters with α + β = 1.1.
    //
    // Expect
    // ------
    // - `Ok(f64::INFINITY)`.
    fn non_stationary_candidate_scores_infinity() {
        let params = GARCHParams { omega: 0.1, alpha: array![0.3], beta: array![0.8] };
        let returns = array![0.1, -0.2, 0.3];

        let nll = negative_log_likelihood(
            &params,
            returns.view(),
            LikelihoodForm::Exact,
            &VarianceGuards::default(),
        )
        .unwrap();

        assert_eq!(nll, f64::INFINITY);
    }

    #[test]
    fn zero_variance_is_clamped_before_division() {
        let returns = array![0.0, 0.0];
        let variances = array![0.0, 1.0];
        let guards = VarianceGuards::new(1e-6).unwrap();

        let nll = nll_from_variances(returns.view(), variances.view(), LikelihoodForm::Kernel, &guards)
            .unwrap();

        assert_relative_eq!(nll, (1e-6f64).ln(), epsilon = 1e-12);
    }

    #[test]
    fn nan_variance_is_degenerate() {
        let returns = array![0.1];
        let variances = array![f64::NAN];
        let err = nll_from_variances(
            returns.view(),
            variances.view(),
            LikelihoodForm::Exact,
            &VarianceGuards::default(),
        );
        assert!(matches!(err, Err(GarchError::DegenerateVariance { index: 0, .. })));
    }

    #[test]
    // Purpose
    // -------
    // The analytic score agrees with central differences of `−NLL`,
    // including the long-run terms used for pre-sample lags when p ≠ q.
    //
    // Given
    // -----
    // - GARCH(2, 1) with (ω, α₁, α₂, β₁) = (0.05, 0.08, 0.04, 0.8) on eight
    //   returns, and the same returns under GARCH(1, 1).
    //
    // Expect
    // ------
    // - Component-wise agreement with `finite_diff::gradient` to 1e-5.
    fn score_matches_numerical_gradient() {
        // Arrange
        use crate::optimization::{errors::OptResult, loglik_optimizer::finite_diff::gradient};
        use crate::volatility::core::order::GARCHOrder;
        let returns = array![0.9, -1.4, 0.3, 2.1, -0.6, 0.2, -1.1, 0.7];
        let guards = VarianceGuards::default();
        let cases = [
            (GARCHOrder::new(2, 1), array![0.05, 0.08, 0.04, 0.8]),
            (GARCHOrder::new(1, 1), array![0.05, 0.1, 0.85]),
        ];

        for (order, theta) in cases {
            let loglik = |t: &Array1<f64>| -> OptResult<f64> {
                let params = GARCHParams::from_theta(t.view(), &order)?;
                Ok(-negative_log_likelihood(&params, returns.view(), LikelihoodForm::Exact, &guards)?)
            };
            let params = GARCHParams::from_theta(theta.view(), &order).unwrap();

            // Act
            let analytic = log_likelihood_score(&params, returns.view(), &guards).unwrap();
            let numeric = gradient(&loglik, &theta).unwrap();

            // Assert
            for (a, n) in analytic.iter().zip(numeric.iter()) {
                assert_relative_eq!(*a, *n, epsilon = 1e-5, max_relative = 1e-5);
            }
        }
    }

    #[test]
    fn score_rejects_non_stationary_parameters() {
        let params = GARCHParams { omega: 0.1, alpha: array![0.3], beta: array![0.8] };

        let err = log_likelihood_score(&params, array![0.1, -0.2].view(), &VarianceGuards::default());

        assert!(matches!(err, Err(GarchError::InvalidParameters(_))));
    }
}
