//! GARCH(p, q) model: bounded Gaussian quasi-maximum-likelihood estimation.
//!
//! This module wires a GARCH(p, q) specification to the `LogLikelihood`
//! trait and drives the box-constrained Nelder–Mead optimizer over it.
//!
//! Key ideas:
//! - The optimizer works on the flat vector `θ = [ω, α₁…α_p, β₁…β_q]`
//!   directly; the box is [`ParamBounds`] (default `[1e-6, 1]`).
//! - Candidates that are non-stationary or otherwise inadmissible score
//!   `ℓ = −∞`, which the optimizer treats as an infinitely bad vertex.
//! - `fit` is a pure two-step pipeline: optimize, then evaluate everything
//!   the [`FittedModel`] carries at the estimate. The model itself holds no
//!   mutable state and can be shared across threads.
use crate::{
    optimization::{
        errors::OptResult,
        loglik_optimizer::{LogLikelihood, Theta, maximize},
    },
    volatility::{
        core::{
            bounds::ParamBounds,
            data::ReturnSeries,
            init::default_initial_guess,
            likelihood::{LikelihoodForm, negative_log_likelihood, nll_from_variances},
            options::GARCHOptions,
            order::GARCHOrder,
            params::GARCHParams,
            validation::validate_guess_in_box,
            variance,
        },
        errors::{GarchError, GarchResult},
        models::fitted::{Convergence, FitSummary, FittedModel},
    },
};
use ndarray::Array1;
use tracing::{debug, info, warn};

/// GARCH(p, q) estimator.
///
/// Holds the model order and the estimation options. Fitting never mutates
/// the model; each call to [`GARCHModel::fit`] returns a fresh
/// [`FittedModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct GARCHModel {
    /// GARCH(p, q) model order.
    pub order: GARCHOrder,
    /// Optimizer, box, variance floor and likelihood form.
    pub options: GARCHOptions,
}

impl GARCHModel {
    pub fn new(order: GARCHOrder, options: GARCHOptions) -> GARCHModel {
        GARCHModel { order, options }
    }

    /// Model with default options.
    pub fn with_order(order: GARCHOrder) -> GARCHModel {
        GARCHModel::new(order, GARCHOptions::default())
    }

    /// Estimation box: the configured one, or the default for the order.
    ///
    /// # Errors
    /// - [`GarchError::InvalidOrder`] if a configured box does not have
    ///   `1 + p + q` coordinates.
    pub fn bounds(&self) -> GarchResult<ParamBounds> {
        match &self.options.bounds {
            Some(bounds) => {
                self.order.check_dim(bounds.len())?;
                Ok(bounds.clone())
            }
            None => Ok(ParamBounds::for_order(&self.order)),
        }
    }

    /// Fit by maximum likelihood.
    ///
    /// ## Steps
    /// 1. Check the sample length and the box against the order.
    /// 2. Validate `initial_guess` (order, admissibility, inside the box) or
    ///    build the default guess.
    /// 3. Maximize `ℓ(θ)` with Nelder–Mead and restarts.
    /// 4. Validate the final parameters, filter the variance series and
    ///    evaluate the exact log-likelihood at the estimate.
    ///
    /// Non-convergence does not fail the call; it is recorded on the
    /// returned model (see [`FittedModel::ensure_converged`]).
    ///
    /// # Errors
    /// - [`GarchError::InsufficientData`] if `returns.len() < max(p, q) + 1`.
    /// - [`GarchError::InvalidOrder`] for a guess or box of the wrong size.
    /// - [`GarchError::InvalidParameters`] for an inadmissible guess or final
    ///   estimate.
    /// - [`GarchError::InvalidInitialGuess`] if the guess lies outside the box.
    /// - [`GarchError::DegenerateVariance`] on numerical breakdown.
    /// - [`GarchError::OptimizationFailed`] for other optimizer failures.
    pub fn fit(
        &self, returns: &ReturnSeries, initial_guess: Option<GARCHParams>,
    ) -> GarchResult<FittedModel> {
        self.order.check_sample(returns.len())?;
        let bounds = self.bounds()?;
        let guess = match initial_guess {
            Some(guess) => {
                self.order.check_dim(guess.order().n_params())?;
                if guess.order() != self.order {
                    return Err(GarchError::InvalidOrder {
                        expected: self.order.p,
                        actual: guess.alpha.len(),
                        reason: "Initial guess must have p alpha and q beta coefficients.",
                    });
                }
                guess.validate()?;
                guess
            }
            None => default_initial_guess(&self.order, returns, &bounds)?,
        };
        let theta0 = guess.to_theta();
        validate_guess_in_box(theta0.view(), bounds.lower.view(), bounds.upper.view())?;

        debug!(order = %self.order, n = returns.len(), "fitting GARCH model");
        let outcome = maximize(
            self,
            theta0,
            returns,
            &bounds.to_optimizer_bounds(),
            &self.options.mle_opts,
        )?;

        let params = GARCHParams::from_theta(outcome.theta_hat.view(), &self.order)?;
        params.validate()?;
        let conditional_variance = variance::filter(&params, returns.view())?;
        let guards = self.options.variance_guards;
        let exact_nll = nll_from_variances(
            returns.view(),
            conditional_variance.view(),
            LikelihoodForm::Exact,
            &guards,
        )?;
        let objective = match self.options.likelihood {
            LikelihoodForm::Exact => exact_nll,
            LikelihoodForm::Kernel => -outcome.value,
        };

        let convergence = if outcome.converged {
            info!(
                order = %self.order,
                log_likelihood = -exact_nll,
                iterations = outcome.iterations,
                "GARCH fit converged"
            );
            Convergence::Converged
        } else {
            warn!(
                order = %self.order,
                iterations = outcome.iterations,
                status = %outcome.status,
                "GARCH fit did not converge"
            );
            Convergence::NonConvergence { status: outcome.status.clone() }
        };

        let summary = FitSummary {
            objective,
            likelihood: self.options.likelihood,
            variance_guards: guards,
            convergence,
            iterations: outcome.iterations,
            cost_evals: outcome.cost_evals(),
            grad_norm: outcome.grad_norm,
        };
        FittedModel::new(params, returns.view(), conditional_variance, -exact_nll, summary)
    }

    /// Conditional variance series of `returns` under `params`.
    ///
    /// # Errors
    /// - [`GarchError::InvalidOrder`] if `params` does not match the order.
    /// - See [`variance::filter`].
    pub fn filter(&self, params: &GARCHParams, returns: &ReturnSeries) -> GarchResult<Array1<f64>> {
        self.check_params_order(params)?;
        variance::filter(params, returns.view())
    }

    /// Negative log-likelihood in the configured form; `+∞` if inadmissible.
    ///
    /// # Errors
    /// - [`GarchError::InvalidOrder`] if `params` does not match the order.
    /// - [`GarchError::DegenerateVariance`] on numerical breakdown.
    pub fn negative_log_likelihood(
        &self, params: &GARCHParams, returns: &ReturnSeries,
    ) -> GarchResult<f64> {
        self.check_params_order(params)?;
        negative_log_likelihood(
            params,
            returns.view(),
            self.options.likelihood,
            &self.options.variance_guards,
        )
    }

    fn check_params_order(&self, params: &GARCHParams) -> GarchResult<()> {
        self.order.check_dim(params.order().n_params())?;
        if params.order() != self.order {
            return Err(GarchError::InvalidOrder {
                expected: self.order.p,
                actual: params.alpha.len(),
                reason: "Parameters must have p alpha and q beta coefficients.",
            });
        }
        Ok(())
    }
}

impl LogLikelihood for GARCHModel {
    type Data = ReturnSeries;

    /// `ℓ(θ) = −NLL(θ)`; `−∞` for inadmissible `θ`.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<f64> {
        let params = GARCHParams::from_theta(theta.view(), &self.order)?;
        let nll = negative_log_likelihood(
            &params,
            data.view(),
            self.options.likelihood,
            &self.options.variance_guards,
        )?;
        Ok(-nll)
    }

    /// Dimension of `θ` and length of the sample.
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()> {
        self.order.check_dim(theta.len())?;
        self.order.check_sample(data.len())?;
        Ok(())
    }
}

/// Fit a GARCH(p, q) model with default options.
///
/// # Errors
/// - See [`GARCHModel::fit`].
///
/// # Example
/// ```no_run
/// # use rust_volatility::volatility::core::{GARCHOrder, GARCHParams, Innovation, SimOpts};
/// # use rust_volatility::volatility::core::ReturnSeries;
/// # use rust_volatility::volatility::models::{fit, simulate};
/// # use ndarray::array;
/// let truth = GARCHParams::new(0.05, array![0.1], array![0.85])?;
/// let path = simulate(&truth, 3000, 1, &Innovation::Normal, &SimOpts::default())?;
/// let returns = ReturnSeries::new(path[0].returns.clone())?;
///
/// let fitted = fit(&returns, GARCHOrder::new(1, 1), None)?;
/// println!("{:?} converged: {}", fitted.params(), fitted.is_converged());
/// # Ok::<(), rust_volatility::volatility::errors::GarchError>(())
/// ```
pub fn fit(
    returns: &ReturnSeries, order: GARCHOrder, initial_guess: Option<GARCHParams>,
) -> GarchResult<FittedModel> {
    GARCHModel::with_order(order).fit(returns, initial_guess)
}
