//! Default starting point for GARCH estimation.
//!
//! Total α mass is 0.05 and total β mass 0.90, each split evenly over its
//! lags. ω is chosen so the implied long-run variance equals the sample
//! variance, `ω = s² (1 − Σα − Σβ)`. Every coordinate is then projected into
//! the estimation box.
use crate::volatility::{
    core::{bounds::ParamBounds, data::ReturnSeries, order::GARCHOrder, params::GARCHParams},
    errors::GarchResult,
};
use ndarray::Array1;

pub const DEFAULT_ALPHA_MASS: f64 = 0.05;
pub const DEFAULT_BETA_MASS: f64 = 0.90;

/// Default initial guess for `order` on `returns`, projected into `bounds`.
///
/// # Errors
/// - [`GarchError::InvalidParameters`](crate::volatility::errors::GarchError::InvalidParameters)
///   if the projection into a user-supplied box breaks stationarity.
pub fn default_initial_guess(
    order: &GARCHOrder, returns: &ReturnSeries, bounds: &ParamBounds,
) -> GarchResult<GARCHParams> {
    let p = order.p;
    let q = order.q;
    let alpha: Array1<f64> =
        (0..p).map(|k| bounds.clamp(1 + k, DEFAULT_ALPHA_MASS / p as f64)).collect();
    let beta: Array1<f64> =
        (0..q).map(|j| bounds.clamp(1 + p + j, DEFAULT_BETA_MASS / q as f64)).collect();
    let persistence = alpha.sum() + beta.sum();
    let omega = bounds.clamp(0, returns.sample_variance() * (1.0 - persistence));
    GARCHParams::new(omega, alpha, beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Splitting of the α/β mass across lags and the ω scaling rule.
    // - Degenerate orders and projection into a user box.
    // -------------------------------------------------------------------------

    fn series() -> ReturnSeries {
        ReturnSeries::new(array![0.5, -0.4, 0.3, -0.6, 0.2, 0.1]).unwrap()
    }

    #[test]
    // Purpose
    // -------
    // The guess is stationary and targets the sample variance.
    //
    // Given
    // -----
    // - Order (3, 3) on a small series, default box.
    //
    // Expect
    // ------
    // - α_k = 0.05/3, β_j = 0.3, persistence 0.95, and long-run variance equal
    //   to the sample variance.
    fn guess_splits_mass_and_targets_sample_variance() {
        // Arrange
        let order = GARCHOrder::new(3, 3);
        let returns = series();

        // Act
        let guess =
            default_initial_guess(&order, &returns, &ParamBounds::for_order(&order)).unwrap();

        // Assert
        assert!(guess.alpha.iter().all(|&a| (a - 0.05 / 3.0).abs() < 1e-15));
        assert!(guess.beta.iter().all(|&b| (b - 0.3).abs() < 1e-15));
        assert_relative_eq!(guess.persistence(), 0.95, epsilon = 1e-12);
        assert_relative_eq!(
            guess.long_run_variance().unwrap(),
            returns.sample_variance(),
            epsilon = 1e-10
        );
    }

    #[test]
    // Purpose
    // -------
    // A constant-variance order yields ω equal to the sample variance.
    //
    // Given
    // -----
    // - Order (0, 0).
    //
    // Expect
    // ------
    // - Empty α and β; ω = s² (inside the default box for this series).
    fn constant_order_uses_sample_variance() {
        let order = GARCHOrder::new(0, 0);
        let returns = series();

        let guess =
            default_initial_guess(&order, &returns, &ParamBounds::for_order(&order)).unwrap();

        assert!(guess.alpha.is_empty() && guess.beta.is_empty());
        assert_relative_eq!(guess.omega, returns.sample_variance(), epsilon = 1e-15);
    }

    #[test]
    fn guess_is_projected_into_box() {
        let order = GARCHOrder::new(1, 1);
        let bounds = ParamBounds::uniform(&order, 0.1, 0.5).unwrap();

        let guess = default_initial_guess(&order, &series(), &bounds).unwrap();

        assert_eq!(guess.alpha[0], 0.1);
        assert_eq!(guess.beta[0], 0.5);
        assert!(guess.omega >= 0.1 && guess.omega <= 0.5);
    }
}
