//! statistical_tests::validation — shared input guards for test statistics.
//!
//! Centralizes the basic preconditions of the portmanteau tests in this
//! subtree: series length, finiteness and the lag bound `1 ≤ h < n`.

use crate::statistical_tests::errors::{LBError, LBResult};

/// Validate a series and lag count for autocorrelation-based tests.
///
/// # Errors
/// - `LBError::InsufficientData` if `data.len() < 2`.
/// - `LBError::InvalidData(value)` for the first non-finite entry.
/// - `LBError::InvalidLags(lags)` if `lags == 0` or `lags >= data.len()`.
///
/// # Examples
/// ```rust
/// # use rust_volatility::statistical_tests::validation::validate_input;
/// # use rust_volatility::statistical_tests::errors::LBError;
/// let data = vec![0.1_f64, -0.2, 0.3];
///
/// assert!(validate_input(&data, 2).is_ok());
/// assert_eq!(validate_input(&data, 3), Err(LBError::InvalidLags(3)));
/// ```
pub fn validate_input(data: &[f64], lags: usize) -> LBResult<()> {
    if data.len() < 2 {
        return Err(LBError::InsufficientData);
    }

    for &value in data {
        if !value.is_finite() {
            return Err(LBError::InvalidData(value));
        }
    }

    if lags == 0 || lags >= data.len() {
        return Err(LBError::InvalidLags(lags));
    }

    Ok(())
}
