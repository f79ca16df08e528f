//! Public API surface for log-likelihood maximization.
//!
//! - [`LogLikelihood`]: trait users implement for their model.
//! - [`MLEOptions`] and [`Tolerances`]: configuration for the optimizer.
//! - [`OptimOutcome`]: normalized result returned by the high-level `maximize` API.
//!
//! Convention: we *maximize* a user log-likelihood `ℓ(θ)` by minimizing the cost
//! `c(θ) = -ℓ(θ)`. A value of `-∞` marks an inadmissible `θ`; the solver treats
//! it as an infinitely bad point rather than an error.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        Cost, FnEvalMap, Theta,
        types::{DEFAULT_MAX_ITER, DEFAULT_SIMPLEX_STEP, DEFAULT_TOL_COST},
        validation::{validate_theta_hat, validate_value, verify_simplex_step, verify_tol_cost},
    },
};
use argmin::core::{TerminationReason, TerminationStatus};

/// User-implemented log-likelihood interface.
///
/// - `type Data`: per-model data carried into `value`/`check`.
///
/// Required:
/// - `value(&Theta, &Data) -> OptResult<Cost>`: evaluate `ℓ(θ)`. Return
///   `f64::NEG_INFINITY` for inadmissible `θ` and an `OptError` for genuine
///   numerical failures. `NaN` is treated as an error by the adapter.
/// - `check(&Theta, &Data) -> OptResult<()>`: validation hook called once on
///   the initial guess before optimization.
pub trait LogLikelihood {
    type Data;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances` — cost-spread tolerance and iteration cap per run.
/// - `simplex_step: f64` — relative edge length of the initial simplex.
/// - `restarts: usize` — extra runs started from the previous best point.
/// - `verbose: bool` — if `true`, attaches an observer (behind the `obs_slog`
///   feature) and prints progress.
///
/// Default:
/// - `tols`: `tol_cost = 1e-8`, `max_iter = 2000`
/// - `simplex_step`: `0.05`
/// - `restarts`: `1`
/// - `verbose`: `false`
#[derive(Debug, Clone, PartialEq)]
pub struct MLEOptions {
    pub tols: Tolerances,
    pub simplex_step: f64,
    pub restarts: usize,
    pub verbose: bool,
}

impl MLEOptions {
    /// Create a new set of optimizer options.
    ///
    /// # Errors
    /// - [`OptError::InvalidSimplexStep`] if `simplex_step` is non-finite or ≤ 0.
    pub fn new(
        tols: Tolerances, simplex_step: f64, restarts: usize, verbose: bool,
    ) -> OptResult<Self> {
        verify_simplex_step(simplex_step)?;
        Ok(Self { tols, simplex_step, restarts, verbose })
    }
}

impl Default for MLEOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances::default(),
            simplex_step: DEFAULT_SIMPLEX_STEP,
            restarts: 1,
            verbose: false,
        }
    }
}

/// Stopping rules for one solver run.
///
/// - `tol_cost`: stop when the standard deviation of the cost over the
///   simplex vertices falls below this threshold.
/// - `max_iter`: hard cap on the number of iterations.
///
/// Either field can be `None` but at least one must be provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] if both are `None`.
    /// - [`OptError::InvalidTolCost`] for a non-finite or non-positive tolerance.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(tol_cost: Option<f64>, max_iter: Option<usize>) -> OptResult<Self> {
        if tol_cost.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_cost(tol_cost)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_cost, max_iter })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { tol_cost: Some(DEFAULT_TOL_COST), max_iter: Some(DEFAULT_MAX_ITER) }
    }
}

/// Canonical result returned by `maximize`.
///
/// - `theta_hat`: best parameter vector found.
/// - `value`: best **log-likelihood** value `ℓ(θ)` (not the cost).
/// - `converged`: `true` only if the solver met its tolerance; hitting the
///   iteration cap is reported as not converged.
/// - `status`: human-readable termination status string.
/// - `iterations`: optimizer iterations summed over all runs.
/// - `fn_evals`: function-evaluation counters summed over all runs.
/// - `grad_norm`: finite-difference gradient norm at `theta_hat`, if finite.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
}

impl OptimOutcome {
    /// Build a validated [`OptimOutcome`] from raw solver state.
    ///
    /// # Errors
    /// - Propagates validation errors for `theta_hat` or `value`.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: &TerminationStatus,
        iterations: u64, fn_evals: FnEvalMap,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let (converged, status) = classify_termination(termination);
        Ok(Self {
            theta_hat,
            value,
            converged,
            status,
            iterations: iterations as usize,
            fn_evals,
            grad_norm: None,
        })
    }

    /// Fold a follow-up run into this outcome.
    ///
    /// The newer run supplies `theta_hat`, `value`, the convergence flag and
    /// status only when it is at least as good as the current best, so the
    /// flag always describes the returned point. Counters are accumulated.
    pub fn absorb(&mut self, next: OptimOutcome) {
        self.iterations += next.iterations;
        for (name, count) in &next.fn_evals {
            *self.fn_evals.entry(name.clone()).or_insert(0) += count;
        }
        if next.value >= self.value {
            self.theta_hat = next.theta_hat;
            self.value = next.value;
            self.converged = next.converged;
            self.status = next.status;
        }
    }

    /// Total number of cost evaluations across all runs.
    pub fn cost_evals(&self) -> u64 {
        self.fn_evals.get("cost_count").copied().unwrap_or(0)
    }
}

fn classify_termination(termination: &TerminationStatus) -> (bool, String) {
    match termination {
        TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
        TerminationStatus::Terminated(reason) => {
            let converged = matches!(
                reason,
                TerminationReason::SolverConverged | TerminationReason::TargetCostReached
            );
            (converged, reason.text().to_string())
        }
    }
}
