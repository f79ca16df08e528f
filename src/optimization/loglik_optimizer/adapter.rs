//! Adapter that exposes a user `LogLikelihood` as an `argmin` problem.
//!
//! We convert a *maximization* of a log-likelihood `ℓ(θ)` into a *minimization*
//! problem by defining the cost as `c(θ) = -ℓ(θ)`. The box constraints are
//! folded into the cost: any `θ` outside the box, and any `θ` the model scores
//! as `ℓ = -∞`, costs `+∞`, which the simplex solver rejects naturally.
use crate::optimization::{
    errors::OptError,
    loglik_optimizer::{
        bounds::Bounds,
        traits::LogLikelihood,
        types::{Cost, Theta},
    },
};
use argmin::core::{CostFunction, Error};

/// Bridges a user `LogLikelihood` to `argmin`'s `CostFunction`.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: LogLikelihood> {
    pub f: &'a F,
    pub data: &'a F::Data,
    pub bounds: &'a Bounds,
}

impl<'a, F: LogLikelihood> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `LogLikelihood`, its data and a box.
    pub fn new(f: &'a F, data: &'a F::Data, bounds: &'a Bounds) -> Self {
        Self { f, data, bounds }
    }

    /// Log-likelihood at `theta`, `-∞` outside the box.
    ///
    /// # Errors
    /// - Propagates any `OptError` from the user's `value`.
    /// - [`OptError::NonFiniteCost`] if the user returns `NaN` or `+∞`.
    pub fn loglik(&self, theta: &Theta) -> Result<f64, OptError> {
        if !self.bounds.contains(theta) {
            return Ok(f64::NEG_INFINITY);
        }
        let value = self.f.value(theta, self.data)?;
        if value.is_nan() || value == f64::INFINITY {
            return Err(OptError::NonFiniteCost { value });
        }
        Ok(value)
    }
}

impl<'a, F: LogLikelihood> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the cost `c(θ) = -ℓ(θ)`.
    ///
    /// # Errors
    /// Propagates any `OptError` from [`ArgMinAdapter::loglik`].
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        Ok(-self.loglik(theta)?)
    }
}
