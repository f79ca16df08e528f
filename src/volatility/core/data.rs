//! Validated return series for GARCH estimation.
//!
//! [`ReturnSeries`] wraps an `Array1<f64>` of (typically percentage-scaled)
//! returns, guaranteeing the series is non-empty and finite. The buffer is
//! never exposed mutably, so every consumer sees the same read-only input.
use crate::volatility::errors::{GarchError, GarchResult};
use ndarray::{Array1, ArrayView1};

/// Ordered, finite, non-empty series of returns.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnSeries {
    data: Array1<f64>,
}

impl ReturnSeries {
    /// Validate and wrap a return series.
    ///
    /// # Errors
    /// - [`GarchError::EmptySeries`] if `data` is empty.
    /// - [`GarchError::NonFiniteData`] for the first NaN/±∞ entry.
    pub fn new(data: Array1<f64>) -> GarchResult<Self> {
        if data.is_empty() {
            return Err(GarchError::EmptySeries);
        }
        for (index, &value) in data.iter().enumerate() {
            if !value.is_finite() {
                return Err(GarchError::NonFiniteData { index, value });
            }
        }
        Ok(ReturnSeries { data })
    }

    /// Build scaled simple returns `scale · (P_t / P_{t-1} − 1)` from a price
    /// path. `scale = 100.0` gives percentage returns.
    ///
    /// # Errors
    /// - [`GarchError::InsufficientData`] if fewer than two prices are given.
    /// - [`GarchError::NonPositivePrice`] for a non-finite or non-positive price.
    /// - [`GarchError::NonFiniteData`] if `scale` is not finite.
    pub fn from_prices(prices: &[f64], scale: f64) -> GarchResult<Self> {
        if prices.len() < 2 {
            return Err(GarchError::InsufficientData { n: prices.len(), required: 2 });
        }
        if !scale.is_finite() {
            return Err(GarchError::NonFiniteData { index: 0, value: scale });
        }
        for (index, &value) in prices.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(GarchError::NonPositivePrice { index, value });
            }
        }
        let returns: Array1<f64> =
            prices.windows(2).map(|w| scale * (w[1] / w[0] - 1.0)).collect();
        ReturnSeries::new(returns)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.data.view()
    }

    pub fn as_slice(&self) -> Option<&[f64]> {
        self.data.as_slice()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    /// Sample variance with an `n − 1` denominator (`mean(r²)` when `n = 1`).
    pub fn sample_variance(&self) -> f64 {
        let n = self.data.len();
        if n < 2 {
            return self.data.mapv(|r| r * r).sum() / n as f64;
        }
        let mean = self.data.sum() / n as f64;
        self.data.iter().map(|&r| (r - mean) * (r - mean)).sum::<f64>() / (n - 1) as f64
    }
}

impl From<ReturnSeries> for Array1<f64> {
    fn from(series: ReturnSeries) -> Self {
        series.data
    }
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
    // - Validation of empty and non-finite inputs.
    // - Price-to-return conversion and its input checks.
    // - The sample-variance helper used to seed default initial guesses.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Valid data is stored unchanged.
    //
    // Given
    // -----
    // - A short finite series.
    //
    // Expect
    // ------
    // - `new` succeeds and `view()` returns the same values.
    fn new_accepts_finite_series() {
        // Arrange
        let data = array![1.0, -0.5, 0.8];

        // Act
        let series = ReturnSeries::new(data.clone()).unwrap();

        // Assert
        assert_eq!(series.len(), 3);
        assert_eq!(series.view(), data.view());
    }

    #[test]
    // Purpose
    // -------
    // Empty and non-finite inputs are rejected with precise errors.
    //
    // Given
    // -----
    // - An empty array and an array with a NaN at index 1.
    //
    // Expect
    // ------
    // - `EmptySeries` and `NonFiniteData { index: 1, .. }` respectively.
    fn new_rejects_empty_and_non_finite() {
        assert_eq!(ReturnSeries::new(Array1::zeros(0)), Err(GarchError::EmptySeries));
        assert!(matches!(
            ReturnSeries::new(array![0.1, f64::NAN, 0.2]),
            Err(GarchError::NonFiniteData { index: 1, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Percentage returns are `100 · (P_t / P_{t-1} − 1)`.
    //
    // Given
    // -----
    // - Prices [100, 110, 99].
    //
    // Expect
    // ------
    // - Returns [10, -10] (up to rounding).
    fn from_prices_builds_scaled_simple_returns() {
        // Act
        let series = ReturnSeries::from_prices(&[100.0, 110.0, 99.0], 100.0).unwrap();

        // Assert
        assert_eq!(series.len(), 2);
        assert_relative_eq!(series.view()[0], 10.0, epsilon = 1e-12);
        assert_relative_eq!(series.view()[1], -10.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Price validation catches short inputs and non-positive prices.
    //
    // Given
    // -----
    // - A single price; a path containing zero at index 2.
    //
    // Expect
    // ------
    // - `InsufficientData` and `NonPositivePrice { index: 2, .. }`.
    fn from_prices_validates_input() {
        assert!(matches!(
            ReturnSeries::from_prices(&[1.0], 100.0),
            Err(GarchError::InsufficientData { n: 1, required: 2 })
        ));
        assert!(matches!(
            ReturnSeries::from_prices(&[1.0, 2.0, 0.0], 100.0),
            Err(GarchError::NonPositivePrice { index: 2, .. })
        ));
    }

    #[test]
    fn sample_variance_uses_unbiased_denominator() {
        let series = ReturnSeries::new(array![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(series.sample_variance(), 5.0 / 3.0, epsilon = 1e-12);
    }
}
