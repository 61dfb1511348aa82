//! Error types for the forecast_engine crate

use forecast_math::MathError;
use thiserror::Error;

/// Custom error types for the forecast_engine crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The series has no observations
    #[error("Data error: empty series")]
    EmptySeries,

    /// The series is too short for the requested operation
    #[error("Data error: need at least {required} observations, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A forecast or sample option is outside its valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Method selector did not match any known forecasting method
    #[error("Unknown forecasting method: {0}")]
    UnknownMethod(String),

    /// Frequency selector did not match any supported timestamp step
    #[error("Unsupported frequency: {0}")]
    UnknownFrequency(String),

    /// Error from JSON serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Primitive errors map onto the engine variant naming the same precondition
impl From<MathError> for ForecastError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::EmptySeries => ForecastError::EmptySeries,
            MathError::InsufficientData { required, actual } => {
                ForecastError::InsufficientData { required, actual }
            }
            MathError::InvalidWindow(_) | MathError::InvalidAlpha(_) => {
                ForecastError::InvalidParameter(err.to_string())
            }
        }
    }
}
