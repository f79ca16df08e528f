//! Error types for GARCH(p, q) volatility models.
//!
//! Two enums live here:
//! - [`GarchError`]: input, order, option, recursion, estimation and reporting failures
//!   raised by the model layer (`volatility::core` and `volatility::models`).
//! - [`ParamError`]: coefficient-level admissibility failures for
//!   `(ω, α, β)` raised while validating a parameter set.
//!
//! Both implement `Display`/`Error`; with the `python-bindings` feature they
//! also convert to `PyErr` for PyO3.
use crate::optimization::errors::OptError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type GarchResult<T> = Result<T, GarchError>;

pub type ParamResult<T> = Result<T, ParamError>;

#[derive(Debug, Clone, PartialEq)]
pub enum GarchError {
    // ---- Input/data validation ----
    EmptySeries,

    NonFiniteData { index: usize, value: f64 },

    NonPositivePrice { index: usize, value: f64 },

    InsufficientData { n: usize, required: usize },

    // ---- Order and parameters ----
    InvalidOrder { expected: usize, actual: usize, reason: &'static str },

    InvalidParameters(ParamError),

    // ---- Meta / options validation ----
    InvalidVarianceFloor { value: f64 },

    InvalidBounds { index: usize, lower: f64, upper: f64, reason: &'static str },

    InvalidInitialGuess { index: usize, value: f64, reason: &'static str },

    InvalidInnovationParam { param: f64, reason: &'static str },

    InvalidSimulation { value: usize, reason: &'static str },

    InvalidConfidenceLevel { value: f64 },

    // ---- Recursion invariants ----
    DegenerateVariance { index: usize, value: f64 },

    // ---- Estimation / optimizer ----
    NonConvergence { iterations: usize, status: String, theta: Vec<f64> },

    OptimizationFailed { reason: String },

    ModelNotFitted,

    // ---- Reporting ----
    Serialization { reason: String },
}

impl std::error::Error for GarchError {}

impl std::fmt::Display for GarchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            GarchError::EmptySeries => {
                write!(f, "Input series is empty.")
            }
            GarchError::NonFiniteData { index, value } => {
                write!(f, "Data point at index {index} is non-finite: {value}")
            }
            GarchError::NonPositivePrice { index, value } => {
                write!(f, "Price at index {index} must be finite and > 0: {value}")
            }
            GarchError::InsufficientData { n, required } => {
                write!(f, "Series of length {n} is too short; at least {required} observations required")
            }

            // ---- Order and parameters ----
            GarchError::InvalidOrder { expected, actual, reason } => {
                write!(f, "Invalid model order: expected {expected}, found {actual}: {reason}")
            }
            GarchError::InvalidParameters(err) => {
                write!(f, "Invalid parameters: {err}")
            }

            // ---- Meta / options validation ----
            GarchError::InvalidVarianceFloor { value } => {
                write!(f, "Variance floor must be finite and > 0: {value}")
            }
            GarchError::InvalidBounds { index, lower, upper, reason } => {
                write!(f, "Invalid bounds at index {index}: [{lower}, {upper}]: {reason}")
            }
            GarchError::InvalidInitialGuess { index, value, reason } => {
                write!(f, "Invalid initial guess at index {index}: {value}: {reason}")
            }
            GarchError::InvalidInnovationParam { param, reason } => {
                write!(f, "Invalid innovation parameter {param}: {reason}")
            }
            GarchError::InvalidSimulation { value, reason } => {
                write!(f, "Invalid simulation setting {value}: {reason}")
            }
            GarchError::InvalidConfidenceLevel { value } => {
                write!(f, "Confidence level must lie strictly between 0 and 1: {value}")
            }

            // ---- Recursion invariants ----
            GarchError::DegenerateVariance { index, value } => {
                write!(f, "Degenerate conditional variance at index {index}: {value}")
            }

            // ---- Estimation / optimizer ----
            GarchError::NonConvergence { iterations, status, theta } => {
                write!(
                    f,
                    "Optimizer did not converge after {iterations} iterations ({status}); last parameters {theta:?}"
                )
            }
            GarchError::OptimizationFailed { reason } => {
                write!(f, "Optimization failed: {reason}")
            }
            GarchError::ModelNotFitted => {
                write!(f, "Model has not been fitted; call fit first.")
            }

            // ---- Reporting ----
            GarchError::Serialization { reason } => {
                write!(f, "Report serialization failed: {reason}")
            }
        }
    }
}

impl From<ParamError> for GarchError {
    fn from(err: ParamError) -> Self {
        match err {
            ParamError::ThetaLengthMismatch { expected, actual } => GarchError::InvalidOrder {
                expected,
                actual,
                reason: "Parameter vector length must equal 1 + p + q.",
            },
            other => GarchError::InvalidParameters(other),
        }
    }
}

impl From<OptError> for GarchError {
    fn from(err: OptError) -> Self {
        match err {
            OptError::DegenerateVariance { index, value } => {
                GarchError::DegenerateVariance { index, value }
            }
            OptError::ThetaLengthMismatch { expected, actual } => GarchError::InvalidOrder {
                expected,
                actual,
                reason: "Parameter vector length must equal 1 + p + q.",
            },
            other => GarchError::OptimizationFailed { reason: other.to_string() },
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<GarchError> for PyErr {
    fn from(err: GarchError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// ω must be finite and strictly positive.
    InvalidOmega { value: f64 },

    /// α coordinates must be finite and non-negative.
    InvalidAlpha { index: usize, value: f64 },

    /// β coordinates must be finite and non-negative.
    InvalidBeta { index: usize, value: f64 },

    /// Σα + Σβ must be strictly below one.
    StationarityViolated { coeff_sum: f64 },

    /// Flat parameter vector does not have `1 + p + q` entries.
    ThetaLengthMismatch { expected: usize, actual: usize },
}

impl std::error::Error for ParamError {}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::InvalidOmega { value } => {
                write!(f, "Invalid omega parameter: {value}, must be finite and > 0")
            }
            ParamError::InvalidAlpha { index, value } => {
                write!(f, "Invalid alpha at index {index}: {value}, must be finite and non-negative")
            }
            ParamError::InvalidBeta { index, value } => {
                write!(f, "Invalid beta at index {index}: {value}, must be finite and non-negative")
            }
            ParamError::StationarityViolated { coeff_sum } => {
                write!(
                    f,
                    "Model not stationary: sum of alpha and beta is {coeff_sum}, which is >= 1"
                )
            }
            ParamError::ThetaLengthMismatch { expected, actual } => {
                write!(f, "Theta length mismatch: expected {expected}, actual {actual}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ParamError> for PyErr {
    fn from(err: ParamError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
