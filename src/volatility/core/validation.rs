//! Validation helpers for GARCH parameters and configuration.
//!
//! Coefficient checks return [`ParamResult`] so they can be reused by the
//! parameter constructors and the variance filter alike; option checks return
//! [`GarchResult`].
use crate::volatility::errors::{GarchError, GarchResult, ParamError, ParamResult};
use ndarray::ArrayView1;

/// ω must be finite and strictly positive.
pub fn validate_omega(omega: f64) -> ParamResult<()> {
    if !omega.is_finite() || omega <= 0.0 {
        return Err(ParamError::InvalidOmega { value: omega });
    }
    Ok(())
}

/// Every α must be finite and non-negative.
pub fn validate_alpha(alpha: ArrayView1<f64>) -> ParamResult<()> {
    for (index, &value) in alpha.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(ParamError::InvalidAlpha { index, value });
        }
    }
    Ok(())
}

/// Every β must be finite and non-negative.
pub fn validate_beta(beta: ArrayView1<f64>) -> ParamResult<()> {
    for (index, &value) in beta.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(ParamError::InvalidBeta { index, value });
        }
    }
    Ok(())
}

/// Covariance stationarity: `Σα + Σβ < 1`.
///
/// Returns the persistence `Σα + Σβ` on success so callers can form the
/// long-run variance without summing twice.
pub fn validate_stationarity(alpha: ArrayView1<f64>, beta: ArrayView1<f64>) -> ParamResult<f64> {
    let coeff_sum = alpha.sum() + beta.sum();
    if !(coeff_sum < 1.0) {
        return Err(ParamError::StationarityViolated { coeff_sum });
    }
    Ok(coeff_sum)
}

/// Validate a variance floor used to clamp σ² before division.
pub fn validate_variance_floor(value: f64) -> GarchResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GarchError::InvalidVarianceFloor { value });
    }
    Ok(())
}

/// Validate a per-coordinate box `[lower_i, upper_i]` with `0 < lower_i < upper_i`.
pub fn validate_box(lower: ArrayView1<f64>, upper: ArrayView1<f64>) -> GarchResult<()> {
    if lower.len() != upper.len() {
        return Err(GarchError::InvalidOrder {
            expected: lower.len(),
            actual: upper.len(),
            reason: "Lower and upper bounds must have the same length.",
        });
    }
    for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(GarchError::InvalidBounds {
                index,
                lower: lo,
                upper: hi,
                reason: "Bounds must be finite.",
            });
        }
        if lo <= 0.0 {
            return Err(GarchError::InvalidBounds {
                index,
                lower: lo,
                upper: hi,
                reason: "Lower bounds must be strictly positive.",
            });
        }
        if lo >= hi {
            return Err(GarchError::InvalidBounds {
                index,
                lower: lo,
                upper: hi,
                reason: "Lower bound must be below the upper bound.",
            });
        }
    }
    Ok(())
}

/// Check that an initial guess lies inside the box.
pub fn validate_guess_in_box(
    theta: ArrayView1<f64>, lower: ArrayView1<f64>, upper: ArrayView1<f64>,
) -> GarchResult<()> {
    for (index, ((&value, &lo), &hi)) in theta.iter().zip(lower.iter()).zip(upper.iter()).enumerate()
    {
        if !(lo..=hi).contains(&value) {
            return Err(GarchError::InvalidInitialGuess {
                index,
                value,
                reason: "Initial guess must lie within the parameter bounds.",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Positivity/finiteness checks for ω, α and β.
    // - The strict stationarity inequality, including the boundary Σ = 1.
    // - Box and initial-guess validation.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // ω = 0 and negative α/β are rejected with their index.
    //
    // Given
    // -----
    // - ω = 0; α = [0.1, -0.01]; β = [0.8, NaN].
    //
    // Expect
    // ------
    // - `InvalidOmega`, `InvalidAlpha { index: 1 }`, `InvalidBeta { index: 1 }`.
    fn coefficient_checks_report_offending_entries() {
        assert_eq!(validate_omega(0.0), Err(ParamError::InvalidOmega { value: 0.0 }));
        assert_eq!(
            validate_alpha(array![0.1, -0.01].view()),
            Err(ParamError::InvalidAlpha { index: 1, value: -0.01 })
        );
        assert!(matches!(
            validate_beta(array![0.8, f64::NAN].view()),
            Err(ParamError::InvalidBeta { index: 1, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Stationarity is strict: a persistence of exactly one is rejected.
    //
    // Given
    // -----
    // - (α, β) = (0.1, 0.9) and (0.1, 0.85).
    //
    // Expect
    // ------
    // - The first fails with `StationarityViolated`; the second returns 0.95.
    fn stationarity_is_strict() {
        assert!(matches!(
            validate_stationarity(array![0.1].view(), array![0.9].view()),
            Err(ParamError::StationarityViolated { .. })
        ));
        let s = validate_stationarity(array![0.1].view(), array![0.85].view()).unwrap();
        assert!((s - 0.95).abs() < 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Empty α/β groups are valid and contribute zero persistence.
    //
    // Given
    // -----
    // - Empty α and β.
    //
    // Expect
    // ------
    // - All checks pass and persistence is 0.
    fn empty_groups_are_admissible() {
        let empty = ndarray::Array1::<f64>::zeros(0);
        assert!(validate_alpha(empty.view()).is_ok());
        assert!(validate_beta(empty.view()).is_ok());
        assert_eq!(validate_stationarity(empty.view(), empty.view()), Ok(0.0));
    }

    #[test]
    // Purpose
    // -------
    // Box validation rejects non-positive lower bounds and inverted intervals;
    // guess validation rejects points outside the box.
    //
    // Given
    // -----
    // - Boxes with lower = 0 and lower > upper; a guess above the upper bound.
    //
    // Expect
    // ------
    // - `InvalidBounds` for both boxes; `InvalidInitialGuess { index: 1 }`.
    fn box_and_guess_validation() {
        assert!(matches!(
            validate_box(array![0.0, 0.1].view(), array![1.0, 1.0].view()),
            Err(GarchError::InvalidBounds { index: 0, .. })
        ));
        assert!(matches!(
            validate_box(array![0.1, 0.5].view(), array![1.0, 0.2].view()),
            Err(GarchError::InvalidBounds { index: 1, .. })
        ));
        assert!(matches!(
            validate_guess_in_box(
                array![0.5, 1.5].view(),
                array![0.1, 0.1].view(),
                array![1.0, 1.0].view()
            ),
            Err(GarchError::InvalidInitialGuess { index: 1, .. })
        ));
    }

    #[test]
    fn variance_floor_must_be_positive() {
        assert!(validate_variance_floor(1e-12).is_ok());
        assert!(validate_variance_floor(0.0).is_err());
        assert!(validate_variance_floor(f64::INFINITY).is_err());
    }
}
