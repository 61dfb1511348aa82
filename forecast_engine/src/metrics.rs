//! Metrics for evaluating forecast accuracy against actual values

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean Absolute Percentage Error.
///
/// Positions whose actual value is zero are excluded from the average. When
/// every position is excluded the percentage cannot be computed and the value
/// is `Undefined` rather than NaN or zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "value")]
pub enum Mape {
    Defined(f64),
    Undefined,
}

impl Mape {
    /// Percentage value, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            Mape::Defined(v) => Some(*v),
            Mape::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Mape::Defined(_))
    }
}

impl fmt::Display for Mape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mape::Defined(v) => write!(f, "{:.4}%", v),
            Mape::Undefined => f.write_str("n/a"),
        }
    }
}

/// Forecast accuracy metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error
    pub mape: Mape,
}

impl Metrics {
    /// Accuracy percentage reported alongside the metrics, `100 - MAPE`
    pub fn accuracy(&self) -> Option<f64> {
        self.mape.value().map(|mape| 100.0 - mape)
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Forecast Accuracy Metrics:")?;
        writeln!(f, "  MAE:   {:.4}", self.mae)?;
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        writeln!(f, "  MAPE:  {}", self.mape)?;
        Ok(())
    }
}

/// Calculate accuracy metrics of `predicted` against `actual`.
///
/// The two sequences are aligned position-wise over the shorter length; any
/// extra values in the longer sequence are ignored. This tolerance is
/// intentional so callers can score a fit against a history that has grown.
///
/// # Errors
/// * [`ForecastError::EmptySeries`] if either sequence is empty
pub fn calculate_metrics(actual: &[f64], predicted: &[f64]) -> Result<Metrics> {
    let n = actual.len().min(predicted.len());
    if n == 0 {
        return Err(ForecastError::EmptySeries);
    }

    let mut sum_abs_error = 0.0;
    let mut sum_squared_error = 0.0;
    let mut sum_percent_error = 0.0;
    let mut percent_count = 0usize;

    for (&a, &p) in actual.iter().zip(predicted) {
        let error = a - p;
        sum_abs_error += error.abs();
        sum_squared_error += error * error;

        if a != 0.0 {
            sum_percent_error += (error.abs() / a.abs()) * 100.0;
            percent_count += 1;
        }
    }

    let mape = if percent_count > 0 {
        Mape::Defined(sum_percent_error / percent_count as f64)
    } else {
        Mape::Undefined
    };

    Ok(Metrics {
        mae: sum_abs_error / n as f64,
        rmse: (sum_squared_error / n as f64).sqrt(),
        mape,
    })
}

/// Root mean square of the residuals `actual - fitted` over all positions.
///
/// Used as the dispersion estimate behind forecast confidence bands.
pub fn residual_std_dev(actual: &[f64], fitted: &[f64]) -> f64 {
    let n = actual.len().min(fitted.len());
    if n == 0 {
        return 0.0;
    }

    let sum_squares: f64 = actual
        .iter()
        .zip(fitted)
        .map(|(a, f)| (a - f).powi(2))
        .sum();

    (sum_squares / n as f64).sqrt()
}
