//! Numerical guard for conditional variances.
//!
//! [`VarianceGuards`] holds the floor applied to σ² before it is logged or
//! used as a divisor in the likelihood.
use crate::volatility::{core::validation::validate_variance_floor, errors::GarchResult};

/// Default σ² floor.
pub const DEFAULT_VARIANCE_FLOOR: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarianceGuards {
    pub floor: f64,
}

impl VarianceGuards {
    /// # Errors
    /// - [`GarchError::InvalidVarianceFloor`](crate::volatility::errors::GarchError::InvalidVarianceFloor)
    ///   if `floor` is non-finite or not strictly positive.
    pub fn new(floor: f64) -> GarchResult<Self> {
        validate_variance_floor(floor)?;
        Ok(VarianceGuards { floor })
    }

    /// Clamp `value` from below at the floor. NaN is passed through so the
    /// caller can report it.
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() { value } else { value.max(self.floor) }
    }
}

impl Default for VarianceGuards {
    fn default() -> Self {
        VarianceGuards { floor: DEFAULT_VARIANCE_FLOOR }
    }
}
