//! Box constraints for GARCH estimation.
//!
//! Every coordinate of `[ω, α…, β…]` is searched within `[lower_i, upper_i]`
//! with `lower_i > 0`. The default box is `[1e-6, 1]` for all parameters.
use crate::{
    optimization::loglik_optimizer::Bounds,
    volatility::{
        core::{order::GARCHOrder, validation::validate_box},
        errors::GarchResult,
    },
};
use ndarray::Array1;

pub const DEFAULT_LOWER_BOUND: f64 = 1e-6;
pub const DEFAULT_UPPER_BOUND: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ParamBounds {
    pub lower: Array1<f64>,
    pub upper: Array1<f64>,
}

impl ParamBounds {
    /// Explicit per-coordinate bounds.
    ///
    /// # Errors
    /// - [`GarchError::InvalidOrder`](crate::volatility::errors::GarchError::InvalidOrder)
    ///   if the lengths differ.
    /// - [`GarchError::InvalidBounds`](crate::volatility::errors::GarchError::InvalidBounds)
    ///   for non-finite entries, non-positive lower bounds, or `lower >= upper`.
    pub fn new(lower: Array1<f64>, upper: Array1<f64>) -> GarchResult<Self> {
        validate_box(lower.view(), upper.view())?;
        Ok(ParamBounds { lower, upper })
    }

    /// Uniform box `[lower, upper]` for every parameter of `order`.
    pub fn uniform(order: &GARCHOrder, lower: f64, upper: f64) -> GarchResult<Self> {
        let n = order.n_params();
        ParamBounds::new(Array1::from_elem(n, lower), Array1::from_elem(n, upper))
    }

    /// Default box `[1e-6, 1]` for every parameter.
    pub fn for_order(order: &GARCHOrder) -> Self {
        let n = order.n_params();
        ParamBounds {
            lower: Array1::from_elem(n, DEFAULT_LOWER_BOUND),
            upper: Array1::from_elem(n, DEFAULT_UPPER_BOUND),
        }
    }

    pub fn len(&self) -> usize {
        self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Project `value` into `[lower_i, upper_i]`.
    pub fn clamp(&self, index: usize, value: f64) -> f64 {
        value.clamp(self.lower[index], self.upper[index])
    }

    /// Optimizer-facing copy of the box.
    pub fn to_optimizer_bounds(&self) -> Bounds {
        Bounds { lower: self.lower.clone(), upper: self.upper.clone() }
    }
}
