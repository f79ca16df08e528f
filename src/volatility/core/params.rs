//! GARCH(p, q) parameter set `(ω, α₁…α_p, β₁…β_q)`.
//!
//! A [`GARCHParams`] value always has consistent dimensions. Admissibility
//! (ω > 0, α, β ≥ 0, Σα + Σβ < 1) is a separate check: candidate vectors
//! explored by the optimizer are built with [`GARCHParams::from_theta`] and
//! only validated when they are filtered, so an inadmissible candidate can be
//! scored as infeasible instead of failing the whole fit.
use crate::volatility::{
    core::{
        order::GARCHOrder,
        validation::{validate_alpha, validate_beta, validate_omega, validate_stationarity},
    },
    errors::{GarchResult, ParamError, ParamResult},
};
use ndarray::{Array1, ArrayView1, s};

#[derive(Debug, Clone, PartialEq)]
pub struct GARCHParams {
    pub omega: f64,
    pub alpha: Array1<f64>,
    pub beta: Array1<f64>,
}

impl GARCHParams {
    /// Build a validated, stationary parameter set.
    ///
    /// # Errors
    /// - [`GarchError::InvalidParameters`](crate::volatility::errors::GarchError::InvalidParameters)
    ///   if any coefficient is inadmissible or Σα + Σβ ≥ 1.
    pub fn new(omega: f64, alpha: Array1<f64>, beta: Array1<f64>) -> GarchResult<Self> {
        let params = GARCHParams { omega, alpha, beta };
        params.validate()?;
        Ok(params)
    }

    /// Unpack a flat vector `[ω, α₁…α_p, β₁…β_q]` without admissibility checks.
    ///
    /// # Errors
    /// - [`GarchError::InvalidOrder`](crate::volatility::errors::GarchError::InvalidOrder)
    ///   if `theta.len() != 1 + p + q`.
    pub fn from_theta(theta: ArrayView1<f64>, order: &GARCHOrder) -> GarchResult<Self> {
        order.check_dim(theta.len())?;
        let p = order.p;
        Ok(GARCHParams {
            omega: theta[0],
            alpha: theta.slice(s![1..1 + p]).to_owned(),
            beta: theta.slice(s![1 + p..]).to_owned(),
        })
    }

    /// Flatten into `[ω, α₁…α_p, β₁…β_q]`.
    pub fn to_theta(&self) -> Array1<f64> {
        let order = self.order();
        let mut theta = Array1::zeros(order.n_params());
        theta[0] = self.omega;
        theta.slice_mut(s![1..1 + order.p]).assign(&self.alpha);
        theta.slice_mut(s![1 + order.p..]).assign(&self.beta);
        theta
    }

    pub fn order(&self) -> GARCHOrder {
        GARCHOrder::new(self.alpha.len(), self.beta.len())
    }

    /// Persistence `Σα + Σβ`.
    pub fn persistence(&self) -> f64 {
        self.alpha.sum() + self.beta.sum()
    }

    /// Check admissibility and stationarity.
    pub fn validate(&self) -> ParamResult<()> {
        validate_omega(self.omega)?;
        validate_alpha(self.alpha.view())?;
        validate_beta(self.beta.view())?;
        validate_stationarity(self.alpha.view(), self.beta.view())?;
        Ok(())
    }

    /// Long-run (unconditional) variance `ω / (1 − Σα − Σβ)`.
    ///
    /// # Errors
    /// - [`ParamError`] if the set is inadmissible or non-stationary.
    pub fn long_run_variance(&self) -> ParamResult<f64> {
        validate_omega(self.omega)?;
        validate_alpha(self.alpha.view())?;
        validate_beta(self.beta.view())?;
        let persistence = validate_stationarity(self.alpha.view(), self.beta.view())?;
        let lr = self.omega / (1.0 - persistence);
        if !lr.is_finite() {
            return Err(ParamError::StationarityViolated { coeff_sum: persistence });
        }
        Ok(lr)
    }

    /// Names in flat order: `omega`, `alpha[1]`…, `beta[1]`….
    pub fn names(&self) -> Vec<String> {
        parameter_names(&self.order())
    }
}

/// Parameter labels for an order, in `[ω, α…, β…]` order.
pub fn parameter_names(order: &GARCHOrder) -> Vec<String> {
    let mut names = Vec::with_capacity(order.n_params());
    names.push("omega".to_string());
    names.extend((1..=order.p).map(|k| format!("alpha[{k}]")));
    names.extend((1..=order.q).map(|j| format!("beta[{j}]")));
    names
}
