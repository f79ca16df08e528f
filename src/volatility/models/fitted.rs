//! Immutable result of a GARCH(p, q) fit.
//!
//! A [`FittedModel`] is created only by `GARCHModel::fit`. It owns the
//! estimated parameters, the conditional variance series they imply on the
//! training sample, likelihood values and the optimizer's convergence
//! status. Everything is computed eagerly at fit time; accessors never
//! recompute.
use crate::volatility::{
    core::{
        forecasts::forecast_variance, guards::VarianceGuards, innovations::InnovationSampler,
        likelihood::LikelihoodForm, options::SimOpts, order::GARCHOrder, params::GARCHParams,
    },
    errors::{GarchError, GarchResult},
    models::simulation::{SimulatedPath, simulate},
};
use ndarray::{Array1, ArrayView1, s};
use serde::Serialize;

/// Optimizer outcome recorded on a fitted model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Convergence {
    Converged,
    /// The iteration budget ran out; `status` is the solver's termination text.
    NonConvergence { status: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FittedModel {
    order: GARCHOrder,
    params: GARCHParams,
    conditional_variance: Array1<f64>,
    tail_returns: Array1<f64>,
    long_run_variance: f64,
    log_likelihood: f64,
    objective: f64,
    likelihood: LikelihoodForm,
    variance_guards: VarianceGuards,
    convergence: Convergence,
    iterations: usize,
    cost_evals: u64,
    grad_norm: Option<f64>,
    n_obs: usize,
}

/// Values gathered by the estimator; split out to keep the constructor
/// readable.
#[derive(Debug, Clone)]
pub(crate) struct FitSummary {
    pub objective: f64,
    pub likelihood: LikelihoodForm,
    pub variance_guards: VarianceGuards,
    pub convergence: Convergence,
    pub iterations: usize,
    pub cost_evals: u64,
    pub grad_norm: Option<f64>,
}

impl FittedModel {
    /// Assemble a fitted model from admissible parameters.
    ///
    /// Keeps the last `max(p, q)` returns so forecasts need no access to the
    /// training sample.
    pub(crate) fn new(
        params: GARCHParams, returns: ArrayView1<f64>, conditional_variance: Array1<f64>,
        log_likelihood: f64, summary: FitSummary,
    ) -> GarchResult<Self> {
        let order = params.order();
        let long_run_variance = params.long_run_variance()?;
        let n_obs = returns.len();
        let keep = order.max_lag().min(n_obs);
        let tail_returns = returns.slice(s![n_obs - keep..]).to_owned();
        Ok(FittedModel {
            order,
            params,
            conditional_variance,
            tail_returns,
            long_run_variance,
            log_likelihood,
            objective: summary.objective,
            likelihood: summary.likelihood,
            variance_guards: summary.variance_guards,
            convergence: summary.convergence,
            iterations: summary.iterations,
            cost_evals: summary.cost_evals,
            grad_norm: summary.grad_norm,
            n_obs,
        })
    }

    pub fn order(&self) -> GARCHOrder {
        self.order
    }

    pub fn params(&self) -> &GARCHParams {
        &self.params
    }

    /// σ²_t on the training sample, aligned with the returns.
    pub fn conditional_variance(&self) -> ArrayView1<'_, f64> {
        self.conditional_variance.view()
    }

    /// Conditional volatility `σ_t`.
    pub fn conditional_volatility(&self) -> Array1<f64> {
        self.conditional_variance.mapv(f64::sqrt)
    }

    /// `ω / (1 − Σα − Σβ)` of the fitted parameters.
    pub fn long_run_variance(&self) -> f64 {
        self.long_run_variance
    }

    /// Exact Gaussian log-likelihood at the estimate, regardless of the form
    /// that was optimized.
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Negative log-likelihood in the optimized form.
    pub fn objective(&self) -> f64 {
        self.objective
    }

    pub fn likelihood_form(&self) -> LikelihoodForm {
        self.likelihood
    }

    pub fn variance_guards(&self) -> &VarianceGuards {
        &self.variance_guards
    }

    pub fn convergence(&self) -> &Convergence {
        &self.convergence
    }

    pub fn is_converged(&self) -> bool {
        self.convergence == Convergence::Converged
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn cost_evals(&self) -> u64 {
        self.cost_evals
    }

    /// Euclidean norm of the finite-difference log-likelihood gradient at the
    /// estimate, if it could be evaluated.
    pub fn grad_norm(&self) -> Option<f64> {
        self.grad_norm
    }

    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    /// Akaike information criterion `2k − 2ℓ`.
    pub fn aic(&self) -> f64 {
        2.0 * self.order.n_params() as f64 - 2.0 * self.log_likelihood
    }

    /// Bayesian information criterion `k ln n − 2ℓ`.
    pub fn bic(&self) -> f64 {
        self.order.n_params() as f64 * (self.n_obs as f64).ln() - 2.0 * self.log_likelihood
    }

    /// Turn a recorded non-convergence into an error.
    ///
    /// # Errors
    /// - [`GarchError::NonConvergence`] with the iteration count, solver
    ///   status and the last parameter vector.
    pub fn ensure_converged(&self) -> GarchResult<&Self> {
        match &self.convergence {
            Convergence::Converged => Ok(self),
            Convergence::NonConvergence { status } => Err(GarchError::NonConvergence {
                iterations: self.iterations,
                status: status.clone(),
                theta: self.params.to_theta().to_vec(),
            }),
        }
    }

    /// `r_t / σ_t` for the training returns.
    ///
    /// # Errors
    /// - [`GarchError::InvalidOrder`] if `returns` is not the training sample
    ///   length.
    pub fn standardized_residuals(&self, returns: ArrayView1<f64>) -> GarchResult<Array1<f64>> {
        if returns.len() != self.n_obs {
            return Err(GarchError::InvalidOrder {
                expected: self.n_obs,
                actual: returns.len(),
                reason: "Returns must be the training sample of the fitted model.",
            });
        }
        Ok(returns
            .iter()
            .zip(self.conditional_variance.iter())
            .map(|(&r, &v)| r / self.variance_guards.clamp(v).sqrt())
            .collect())
    }

    /// Variance forecasts for the `horizon` steps after the training sample.
    ///
    /// # Errors
    /// - [`GarchError::InvalidSimulation`] if `horizon == 0`.
    pub fn forecast(&self, horizon: usize) -> GarchResult<Array1<f64>> {
        let keep = self.tail_returns.len();
        let tail_variances = self.conditional_variance.slice(s![self.n_obs - keep..]);
        forecast_variance(&self.params, self.tail_returns.view(), tail_variances, horizon)
    }

    /// Simulate from the fitted parameters.
    ///
    /// # Errors
    /// - See [`simulate`].
    pub fn simulate<S: InnovationSampler>(
        &self, horizon: usize, count: usize, sampler: &S, opts: &SimOpts,
    ) -> GarchResult<Vec<SimulatedPath>> {
        simulate(&self.params, horizon, count, sampler, opts)
    }
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
    // - Construction from known parameters, information criteria and
    //   residuals.
    // - Forecasts from the retained sample tail.
    // - `ensure_converged` on both convergence states.
    //
    // They intentionally DO NOT cover:
    // - Estimation itself (see `models::garch`).
    // -------------------------------------------------------------------------

    fn summary(convergence: Convergence) -> FitSummary {
        FitSummary {
            objective: 10.0,
            likelihood: LikelihoodForm::Exact,
            variance_guards: VarianceGuards::default(),
            convergence,
            iterations: 42,
            cost_evals: 90,
            grad_norm: Some(1e-4),
        }
    }

    fn fitted(convergence: Convergence) -> (FittedModel, Array1<f64>) {
        let params = GARCHParams::new(0.05, array![0.1], array![0.85]).unwrap();
        let returns = array![1.0, -0.5, 0.8, -1.2, 0.3];
        let variances = filter(&params, returns.view()).unwrap();
        let model =
            FittedModel::new(params, returns.view(), variances, -10.0, summary(convergence)).unwrap();
        (model, returns)
    }

    #[test]
    // Purpose
    // -------
    // Derived quantities follow their definitions.
    //
    // Given
    // -----
    // - GARCH(1, 1) with σ̄² = 1, n = 5, ℓ = −10.
    //
    // Expect
    // ------
    // - AIC = 6 + 20, BIC = 3 ln 5 + 20, long-run variance 1.
    fn derived_quantities_match_definitions() {
        let (model, _) = fitted(Convergence::Converged);

        assert_relative_eq!(model.aic(), 26.0);
        assert_relative_eq!(model.bic(), 3.0 * 5f64.ln() + 20.0);
        assert_relative_eq!(model.long_run_variance(), 1.0, epsilon = 1e-12);
        assert_eq!(model.n_obs(), 5);
        assert!(model.is_converged());
    }

    #[test]
    fn standardized_residuals_divide_by_volatility() {
        let (model, returns) = fitted(Convergence::Converged);

        let z = model.standardized_residuals(returns.view()).unwrap();

        assert_relative_eq!(z[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(z[2], 0.8 / model.conditional_variance()[2].sqrt(), epsilon = 1e-12);
        assert!(model.standardized_residuals(returns.slice(s![1..])).is_err());
    }

    #[test]
    // Purpose
    // -------
    // Forecasting from the retained tail matches forecasting from the whole
    // training sample.
    //
    // Given
    // -----
    // - The fitted GARCH(1, 1) and a direct `forecast_variance` call on all
    //   five observations.
    //
    // Expect
    // ------
    // - Identical forecasts.
    fn forecast_uses_retained_tail() {
        let (model, returns) = fitted(Convergence::Converged);
        let direct = forecast_variance(
            model.params(),
            returns.view(),
            model.conditional_variance(),
            6,
        )
        .unwrap();

        let fc = model.forecast(6).unwrap();

        assert_eq!(fc, direct);
    }

    #[test]
    fn ensure_converged_reports_status_and_theta() {
        let (ok, _) = fitted(Convergence::Converged);
        let (bad, _) = fitted(Convergence::NonConvergence { status: "MaxItersReached".into() });

        assert!(ok.ensure_converged().is_ok());
        match bad.ensure_converged() {
            Err(GarchError::NonConvergence { iterations, status, theta }) => {
                assert_eq!(iterations, 42);
                assert_eq!(status, "MaxItersReached");
                assert_eq!(theta, vec![0.05, 0.1, 0.85]);
            }
            other => panic!("expected NonConvergence, got {other:?}"),
        }
    }
}
