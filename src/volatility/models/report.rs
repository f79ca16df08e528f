//! Fit report and validation against reference estimates.
//!
//! Purpose
//! -------
//! Aggregate a [`FittedModel`] for external consumption (plotting,
//! reporting, cross-checking) and compare its estimates against intervals
//! obtained independently, e.g. from another library's fit.
//!
//! Key behaviors
//! -------------
//! - [`FitReport`] collects estimates with classical standard errors and
//!   Wald intervals, likelihood and information criteria, convergence
//!   diagnostics, the variance series, standardized residuals and Ljung–Box
//!   tests on `z` and `z²`. It serializes to JSON.
//! - Standard errors come from the observed information of the exact
//!   Gaussian log-likelihood. When the Hessian cannot be formed (typically an
//!   estimate on a bound of the box) they are `None` and a warning is logged.
//! - [`ReferenceIntervals`] holds per-parameter `[lower, upper]` intervals;
//!   [`FitReport::validate_against`] emits one [`ParameterCheck`] per
//!   parameter.
//!
//! Conventions
//! -----------
//! - This is a diagnostic layer only; nothing here feeds back into
//!   estimation.
use crate::{
    inference::hessian::calc_standard_errors,
    optimization::{
        errors::OptResult,
        loglik_optimizer::{Grad, Theta},
    },
    statistical_tests::ljung_box::LBOutcome,
    volatility::{
        core::{
            data::ReturnSeries,
            likelihood::log_likelihood_score,
            params::GARCHParams,
        },
        errors::{GarchError, GarchResult},
        models::fitted::{Convergence, FittedModel},
    },
};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::warn;

/// Two-sided confidence level used by [`FitReport::new`].
pub const DEFAULT_CONFIDENCE: f64 = 0.95;
/// Ljung–Box lag count used by [`FitReport::new`] (capped at `n − 1`).
pub const DEFAULT_LB_LAGS: usize = 10;

/// One row of the parameter table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterEstimate {
    pub name: String,
    pub estimate: f64,
    pub std_error: Option<f64>,
    pub ci_lower: Option<f64>,
    pub ci_upper: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    pub model: String,
    pub n_obs: usize,
    pub convergence: Convergence,
    pub iterations: usize,
    pub cost_evals: u64,
    pub grad_norm: Option<f64>,
    pub log_likelihood: f64,
    pub aic: f64,
    pub bic: f64,
    pub persistence: f64,
    pub long_run_variance: f64,
    pub confidence_level: f64,
    pub parameters: Vec<ParameterEstimate>,
    pub conditional_variance: Vec<f64>,
    pub standardized_residuals: Vec<f64>,
    /// Ljung–Box on `z_t`; `None` if the test could not be run.
    pub ljung_box: Option<LBOutcome>,
    /// Ljung–Box on `z_t²` (remaining ARCH effects).
    pub ljung_box_squared: Option<LBOutcome>,
}

impl FitReport {
    /// Report with 95% Wald intervals and 10 Ljung–Box lags.
    ///
    /// # Errors
    /// - See [`FitReport::with_settings`].
    pub fn new(fitted: &FittedModel, returns: &ReturnSeries) -> GarchResult<Self> {
        FitReport::with_settings(fitted, returns, DEFAULT_CONFIDENCE, DEFAULT_LB_LAGS)
    }

    /// Report with an explicit confidence level and Ljung–Box lag count.
    ///
    /// `returns` must be the training sample of `fitted`.
    ///
    /// # Errors
    /// - [`GarchError::InvalidConfidenceLevel`] unless `0 < confidence < 1`.
    /// - [`GarchError::InvalidOrder`] if `returns` has the wrong length.
    pub fn with_settings(
        fitted: &FittedModel, returns: &ReturnSeries, confidence: f64, lb_lags: usize,
    ) -> GarchResult<Self> {
        let z_crit = wald_critical_value(confidence)?;
        let residuals = fitted.standardized_residuals(returns.view())?;
        let params = fitted.params();
        let estimates = params.to_theta();
        let std_errors = standard_errors(fitted, returns, &estimates);

        let parameters = params
            .names()
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let estimate = estimates[i];
                let std_error = std_errors.as_ref().map(|se| se[i]);
                ParameterEstimate {
                    name,
                    estimate,
                    std_error,
                    ci_lower: std_error.map(|se| estimate - z_crit * se),
                    ci_upper: std_error.map(|se| estimate + z_crit * se),
                }
            })
            .collect();

        let z = residuals.to_vec();
        let z_sq: Vec<f64> = z.iter().map(|v| v * v).collect();
        let lags = lb_lags.min(z.len().saturating_sub(1));

        Ok(FitReport {
            model: fitted.order().to_string(),
            n_obs: fitted.n_obs(),
            convergence: fitted.convergence().clone(),
            iterations: fitted.iterations(),
            cost_evals: fitted.cost_evals(),
            grad_norm: fitted.grad_norm(),
            log_likelihood: fitted.log_likelihood(),
            aic: fitted.aic(),
            bic: fitted.bic(),
            persistence: params.persistence(),
            long_run_variance: fitted.long_run_variance(),
            confidence_level: confidence,
            parameters,
            conditional_variance: fitted.conditional_variance().to_vec(),
            ljung_box: LBOutcome::ljung_box(&z, lags).ok(),
            ljung_box_squared: LBOutcome::ljung_box(&z_sq, lags).ok(),
            standardized_residuals: z,
        })
    }

    pub fn is_converged(&self) -> bool {
        self.convergence == Convergence::Converged
    }

    /// Serialize the report as pretty-printed JSON.
    ///
    /// # Errors
    /// - [`GarchError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> GarchResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| GarchError::Serialization { reason: err.to_string() })
    }

    /// Compare each estimate with the matching reference interval.
    ///
    /// Parameters are matched by position (`[ω, α…, β…]`). Intervals are
    /// closed: an estimate equal to either end passes.
    ///
    /// # Errors
    /// - [`GarchError::InvalidOrder`] if the reference has a different number
    ///   of parameters.
    pub fn validate_against(
        &self, reference: &ReferenceIntervals,
    ) -> GarchResult<Vec<ParameterCheck>> {
        if reference.len() != self.parameters.len() {
            return Err(GarchError::InvalidOrder {
                expected: self.parameters.len(),
                actual: reference.len(),
                reason: "Reference intervals must cover every model parameter.",
            });
        }
        Ok(self
            .parameters
            .iter()
            .zip(reference.lower.iter().zip(reference.upper.iter()))
            .map(|(row, (&lower, &upper))| ParameterCheck {
                name: row.name.clone(),
                estimate: row.estimate,
                lower,
                upper,
                passed: (lower..=upper).contains(&row.estimate),
            })
            .collect())
    }
}

impl std::fmt::Display for FitReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} on {} observations", self.model, self.n_obs)?;
        writeln!(
            f,
            "log-likelihood {:.4}  AIC {:.4}  BIC {:.4}  persistence {:.4}",
            self.log_likelihood, self.aic, self.bic, self.persistence
        )?;
        for row in &self.parameters {
            match row.std_error {
                Some(se) => writeln!(f, "{:>10} {:>12.6} ({:.6})", row.name, row.estimate, se)?,
                None => writeln!(f, "{:>10} {:>12.6} (n/a)", row.name, row.estimate)?,
            }
        }
        match &self.convergence {
            Convergence::Converged => write!(f, "converged after {} iterations", self.iterations),
            Convergence::NonConvergence { status } => {
                write!(f, "did not converge after {} iterations: {status}", self.iterations)
            }
        }
    }
}

/// Per-parameter reference intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceIntervals {
    pub names: Vec<String>,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl ReferenceIntervals {
    /// Explicit intervals.
    ///
    /// # Errors
    /// - [`GarchError::InvalidOrder`] if the three vectors differ in length.
    /// - [`GarchError::InvalidBounds`] for non-finite ends or `lower > upper`.
    pub fn new(names: Vec<String>, lower: Vec<f64>, upper: Vec<f64>) -> GarchResult<Self> {
        for len in [lower.len(), upper.len()] {
            if len != names.len() {
                return Err(GarchError::InvalidOrder {
                    expected: names.len(),
                    actual: len,
                    reason: "Reference names and interval ends must have equal length.",
                });
            }
        }
        for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() || lo > hi {
                return Err(GarchError::InvalidBounds {
                    index,
                    lower: lo,
                    upper: hi,
                    reason: "Reference interval ends must be finite with lower <= upper.",
                });
            }
        }
        Ok(ReferenceIntervals { names, lower, upper })
    }

    /// Wald intervals `estimate ± z · se` at a two-sided `confidence` level.
    ///
    /// # Errors
    /// - [`GarchError::InvalidConfidenceLevel`] unless `0 < confidence < 1`.
    /// - See [`ReferenceIntervals::new`].
    pub fn from_estimates(
        names: Vec<String>, estimates: &[f64], std_errors: &[f64], confidence: f64,
    ) -> GarchResult<Self> {
        let z_crit = wald_critical_value(confidence)?;
        if estimates.len() != std_errors.len() {
            return Err(GarchError::InvalidOrder {
                expected: estimates.len(),
                actual: std_errors.len(),
                reason: "Each reference estimate needs a standard error.",
            });
        }
        let lower = estimates.iter().zip(std_errors).map(|(e, se)| e - z_crit * se).collect();
        let upper = estimates.iter().zip(std_errors).map(|(e, se)| e + z_crit * se).collect();
        ReferenceIntervals::new(names, lower, upper)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Outcome of comparing one estimate with its reference interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterCheck {
    pub name: String,
    pub estimate: f64,
    pub lower: f64,
    pub upper: f64,
    pub passed: bool,
}

impl ParameterCheck {
    pub fn status(&self) -> &'static str {
        if self.passed { "Ok" } else { "Not ok" }
    }
}

impl std::fmt::Display for ParameterCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {:.6} in [{:.6}, {:.6}]: {}",
            self.name,
            self.estimate,
            self.lower,
            self.upper,
            self.status()
        )
    }
}

// ---- Helper methods ----

/// `Φ⁻¹((1 + confidence) / 2)`.
fn wald_critical_value(confidence: f64) -> GarchResult<f64> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(GarchError::InvalidConfidenceLevel { value: confidence });
    }
    let normal = Normal::new(0.0, 1.0)
        .map_err(|_| GarchError::InvalidConfidenceLevel { value: confidence })?;
    Ok(normal.inverse_cdf(0.5 + 0.5 * confidence))
}

/// Classical SEs on the exact log-likelihood; `None` (with a warning) when
/// the Hessian cannot be formed.
fn standard_errors(
    fitted: &FittedModel, returns: &ReturnSeries, theta_hat: &Theta,
) -> Option<Array1<f64>> {
    let order = fitted.order();
    let guards = *fitted.variance_guards();
    let score = |theta: &Theta| -> OptResult<Grad> {
        let params = GARCHParams::from_theta(theta.view(), &order)?;
        Ok(log_likelihood_score(&params, returns.view(), &guards)?)
    };
    match calc_standard_errors(&score, theta_hat) {
        Ok(se) => Some(se),
        Err(err) => {
            warn!(order = %order, error = %err, "standard errors unavailable");
            None
        }
    }
}
