//! Box constraints for the parameter vector.
//!
//! The optimizer searches `θ` inside `Π_i [lower_i, upper_i]`. Points outside
//! the box are given cost `+∞`, so the simplex contracts back inside without
//! a change of variables.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::types::Theta,
};
use ndarray::Array1;

#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub lower: Array1<f64>,
    pub upper: Array1<f64>,
}

impl Bounds {
    /// Build a validated box.
    ///
    /// # Errors
    /// - [`OptError::BoundsDimMismatch`] if `lower` and `upper` differ in length.
    /// - [`OptError::InvalidBounds`] if an endpoint is non-finite or
    ///   `lower_i >= upper_i`.
    pub fn new(lower: Array1<f64>, upper: Array1<f64>) -> OptResult<Self> {
        let bounds = Bounds { lower, upper };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn len(&self) -> usize {
        self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    pub fn validate(&self) -> OptResult<()> {
        if self.lower.len() != self.upper.len() {
            return Err(OptError::BoundsDimMismatch {
                expected: self.lower.len(),
                found: self.upper.len(),
            });
        }
        for (index, (&lower, &upper)) in self.lower.iter().zip(self.upper.iter()).enumerate() {
            if !lower.is_finite() || !upper.is_finite() || lower >= upper {
                return Err(OptError::InvalidBounds { index, lower, upper });
            }
        }
        Ok(())
    }

    /// `true` when every coordinate of `theta` lies in its closed interval.
    pub fn contains(&self, theta: &Theta) -> bool {
        theta.len() == self.len()
            && theta
                .iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(&x, (&lo, &hi))| x >= lo && x <= hi)
    }

    /// First coordinate of `theta` outside the box, reported as an error.
    pub fn check_point(&self, theta: &Theta) -> OptResult<()> {
        if theta.len() != self.len() {
            return Err(OptError::BoundsDimMismatch { expected: theta.len(), found: self.len() });
        }
        for (index, &value) in theta.iter().enumerate() {
            let (lower, upper) = (self.lower[index], self.upper[index]);
            if !(value >= lower && value <= upper) {
                return Err(OptError::ThetaOutOfBounds { index, value, lower, upper });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn new_rejects_empty_intervals() {
        let err = Bounds::new(array![0.0, 1.0], array![1.0, 1.0]).unwrap_err();
        assert_eq!(err, OptError::InvalidBounds { index: 1, lower: 1.0, upper: 1.0 });
    }

    #[test]
    fn contains_is_inclusive() {
        let bounds = Bounds::new(array![0.0, 0.0], array![1.0, 1.0]).unwrap();

        assert!(bounds.contains(&array![0.0, 1.0]));
        assert!(!bounds.contains(&array![-1e-12, 0.5]));
        assert!(!bounds.contains(&array![0.5]));
    }

    #[test]
    fn check_point_reports_first_violation() {
        let bounds = Bounds::new(array![0.0, 0.0], array![1.0, 1.0]).unwrap();

        let err = bounds.check_point(&array![0.5, 2.0]).unwrap_err();

        assert!(matches!(err, OptError::ThetaOutOfBounds { index: 1, .. }));
    }
}
