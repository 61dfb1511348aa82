//! # Forecast Math
//!
//! Numeric primitives used by the forecasting engine.
//! This crate provides the smoothing transforms and the least-squares trend
//! estimator. Every function is a pure, single-pass computation over a
//! complete historical series.

use thiserror::Error;

pub mod regression;
pub mod smoothing;

pub use regression::{linear_regression, RegressionResult};
pub use smoothing::{exponential_smoothing, moving_average};

/// Errors that can occur in smoothing and regression calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Empty series: at least one observation is required")]
    EmptySeries,

    #[error("Insufficient data for calculation: need at least {required} observations, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid window size {0}: window must be greater than zero")]
    InvalidWindow(usize),

    #[error("Invalid smoothing factor {0}: alpha must be in (0, 1]")]
    InvalidAlpha(f64),
}

/// Result type for forecasting math operations
pub type Result<T> = std::result::Result<T, MathError>;

/// Fails with [`MathError::EmptySeries`] when `series` has no observations.
pub(crate) fn ensure_non_empty(series: &[f64]) -> Result<()> {
    if series.is_empty() {
        return Err(MathError::EmptySeries);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_precondition() {
        let err = MathError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert!(err.to_string().contains("at least 2"));
        assert!(MathError::InvalidAlpha(1.5).to_string().contains("1.5"));
        assert!(MathError::InvalidWindow(0).to_string().contains("window"));
    }

    #[test]
    fn test_ensure_non_empty() {
        assert_eq!(ensure_non_empty(&[]), Err(MathError::EmptySeries));
        assert!(ensure_non_empty(&[1.0]).is_ok());
    }
}
