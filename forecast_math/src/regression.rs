//! Ordinary least-squares trend estimation
//!
//! Treats series positions `0..n` as the independent variable and the
//! observations as the dependent variable.

use crate::{ensure_non_empty, MathError, Result};
use serde::{Deserialize, Serialize};

/// Fitted straight line through a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Change in value per time step
    pub slope: f64,
    /// Value of the line at position zero
    pub intercept: f64,
    /// Line evaluated at every input position
    pub fitted: Vec<f64>,
}

impl RegressionResult {
    /// Evaluate the fitted line at an arbitrary position
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Coefficient of determination of the fit against `series`.
    ///
    /// Returns `None` when the series has (numerically) zero variance, or when
    /// `series` is not the one the line was fitted on.
    pub fn r_squared(&self, series: &[f64]) -> Option<f64> {
        if series.len() != self.fitted.len() || series.is_empty() {
            return None;
        }

        let y_mean = series.iter().sum::<f64>() / series.len() as f64;
        let mut ss_total = 0.0;
        let mut ss_residual = 0.0;

        for (&y, &y_pred) in series.iter().zip(&self.fitted) {
            ss_total += (y - y_mean).powi(2);
            ss_residual += (y - y_pred).powi(2);
        }

        if ss_total.abs() < 1e-10 {
            return None;
        }

        Some(1.0 - ss_residual / ss_total)
    }
}

/// Fit `y = slope * x + intercept` by least squares over positions `0..n`.
///
/// # Errors
/// * [`MathError::EmptySeries`] if `series` is empty
/// * [`MathError::InsufficientData`] if `series` has a single observation,
///   since the positional variance is then zero
pub fn linear_regression(series: &[f64]) -> Result<RegressionResult> {
    ensure_non_empty(series)?;
    if series.len() < 2 {
        return Err(MathError::InsufficientData {
            required: 2,
            actual: series.len(),
        });
    }

    let n = series.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = series.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (i, &y) in series.iter().enumerate() {
        let dx = i as f64 - x_mean;
        numerator += dx * (y - y_mean);
        denominator += dx * dx;
    }

    let slope = numerator / denominator;
    let intercept = y_mean - slope * x_mean;

    let fitted = (0..series.len())
        .map(|i| slope * i as f64 + intercept)
        .collect();

    Ok(RegressionResult {
        slope,
        intercept,
        fitted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_regression_recovers_exact_line() {
        let series: Vec<f64> = (0..8).map(|i| -1.5 * i as f64 + 40.0).collect();
        let result = linear_regression(&series).unwrap();

        assert_relative_eq!(result.slope, -1.5, epsilon = 1e-12);
        assert_relative_eq!(result.intercept, 40.0, epsilon = 1e-12);
        for (fit, actual) in result.fitted.iter().zip(&series) {
            assert_relative_eq!(*fit, *actual, epsilon = 1e-9);
        }
        assert_relative_eq!(result.r_squared(&series).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_regression_shipment_example() {
        let result = linear_regression(&[10.0, 12.0, 14.0, 16.0]).unwrap();

        assert_relative_eq!(result.slope, 2.0);
        assert_relative_eq!(result.intercept, 10.0);
        assert_relative_eq!(result.predict(4.0), 18.0);
    }

    #[test]
    fn test_regression_noisy_series() {
        // Least squares through (0,1) (1,3) (2,2): slope 0.5, intercept 1.5
        let result = linear_regression(&[1.0, 3.0, 2.0]).unwrap();

        assert_relative_eq!(result.slope, 0.5);
        assert_relative_eq!(result.intercept, 1.5);
        let r2 = result.r_squared(&[1.0, 3.0, 2.0]).unwrap();
        assert!(r2 > 0.0 && r2 < 1.0);
    }

    #[test]
    fn test_regression_requires_two_points() {
        assert_eq!(
            linear_regression(&[5.0]),
            Err(MathError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
        assert_eq!(linear_regression(&[]), Err(MathError::EmptySeries));
    }

    #[test]
    fn test_r_squared_flat_series() {
        let result = linear_regression(&[4.0, 4.0, 4.0]).unwrap();
        assert_relative_eq!(result.slope, 0.0);
        assert!(result.r_squared(&[4.0, 4.0, 4.0]).is_none());
    }
}
