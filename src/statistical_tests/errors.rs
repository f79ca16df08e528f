//! statistical_tests::errors — error type for residual diagnostics.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the Ljung–Box portmanteau
//! test and its input validation, together with a conversion to Python
//! exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - [`LBResult`] and [`LBError`] are the canonical result and error types
//!   for the Ljung–Box test.
//! - Each variant carries the offending value so `Display` messages are
//!   meaningful without further context.
//! - With the `python-bindings` feature, `From<LBError> for PyErr` maps every
//!   variant to `PyValueError`, preserving the `Display` message.
//!
//! Conventions
//! -----------
//! - Model errors (GARCH, optimizer) live in their own `errors` modules;
//!   this enum only covers test inputs and degenerate series.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type LBResult<T> = Result<T, LBError>;

/// Error conditions for the Ljung–Box test.
///
/// - `InsufficientData`: fewer than two observations.
/// - `InvalidData(value)`: a non-finite observation.
/// - `InvalidLags(h)`: the lag count violates `1 ≤ h < n`.
/// - `InvalidDof { lags, model_df }`: the model degrees-of-freedom
///   correction leaves no χ² degrees of freedom (`model_df ≥ lags`).
/// - `ZeroVariance`: the series is constant, so autocorrelations are
///   undefined.
#[derive(Debug, Clone, PartialEq)]
pub enum LBError {
    //------ Input validation errors ------
    InsufficientData,
    InvalidData(f64),
    InvalidLags(usize),
    InvalidDof { lags: usize, model_df: usize },

    //------ Degenerate series ------
    ZeroVariance,
}

impl std::error::Error for LBError {}

impl std::fmt::Display for LBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LBError::InsufficientData => {
                write!(f, "Need at least 2 observations to compute autocorrelations.")
            }
            LBError::InvalidData(value) => {
                write!(f, "Invalid data value: {value}. Must be a finite number.")
            }
            LBError::InvalidLags(h) => {
                write!(f, "Invalid lag count: {h}. Must satisfy 1 ≤ lags < n (data length).")
            }
            LBError::InvalidDof { lags, model_df } => {
                write!(
                    f,
                    "Degrees-of-freedom correction {model_df} leaves no degrees of freedom for {lags} lags."
                )
            }
            LBError::ZeroVariance => write!(f, "Series has zero variance; autocorrelations are undefined."),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<LBError> for PyErr {
    fn from(err: LBError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Embedding of payload values (lags, offending data) into messages.
    //
    // They intentionally DO NOT cover:
    // - The `From<LBError> for PyErr` conversion, which requires linking
    //   against the Python C API.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `LBError::InvalidLags` includes the offending lag count.
    //
    // Given
    // -----
    // - `LBError::InvalidLags(12)`.
    //
    // Expect
    // ------
    // - The message contains "12".
    fn invalid_lags_includes_payload_in_display() {
        // Arrange
        let err = LBError::InvalidLags(12);

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("12"), "Display message should include the lag count.\nGot: {msg}");
    }

    #[test]
    fn invalid_dof_mentions_both_counts() {
        let msg = LBError::InvalidDof { lags: 3, model_df: 5 }.to_string();

        assert!(msg.contains('3') && msg.contains('5'));
    }
}
