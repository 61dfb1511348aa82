//! Smoothing transforms over a complete historical series
//!
//! Contains implementations of:
//! - Trailing Simple Moving Average
//! - Simple Exponential Smoothing
//!
//! Both transforms return a fitted sequence aligned position-for-position
//! with the input.

use crate::{ensure_non_empty, MathError, Result};

/// Trailing simple moving average.
///
/// The first `window - 1` positions do not have enough history and are
/// copied through unchanged. Every later position `i` holds the mean of
/// `series[i + 1 - window..=i]`.
///
/// # Errors
/// * [`MathError::EmptySeries`] if `series` is empty
/// * [`MathError::InvalidWindow`] if `window` is zero
pub fn moving_average(series: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(MathError::InvalidWindow(window));
    }
    ensure_non_empty(series)?;

    let warmup = (window - 1).min(series.len());
    let mut fitted = Vec::with_capacity(series.len());
    fitted.extend_from_slice(&series[..warmup]);
    fitted.extend(
        series
            .windows(window)
            .map(|w| w.iter().sum::<f64>() / window as f64),
    );

    Ok(fitted)
}

/// Simple exponential smoothing.
///
/// Seeded with the first observation, then
/// `level = alpha * value + (1 - alpha) * level` for each later value.
///
/// # Errors
/// * [`MathError::EmptySeries`] if `series` is empty
/// * [`MathError::InvalidAlpha`] if `alpha` is not in `(0, 1]`
pub fn exponential_smoothing(series: &[f64], alpha: f64) -> Result<Vec<f64>> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
        return Err(MathError::InvalidAlpha(alpha));
    }
    ensure_non_empty(series)?;

    let mut fitted = Vec::with_capacity(series.len());
    let mut level = series[0];
    fitted.push(level);

    for &value in &series[1..] {
        level = alpha * value + (1.0 - alpha) * level;
        fitted.push(level);
    }

    Ok(fitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sma_trailing_window() {
        let data = [2.0, 4.0, 6.0, 8.0, 10.0];
        let fitted = moving_average(&data, 3).unwrap();

        // Warm-up positions pass through
        assert_eq!(fitted[0], 2.0);
        assert_eq!(fitted[1], 4.0);

        assert_relative_eq!(fitted[2], 4.0); // (2 + 4 + 6) / 3
        assert_relative_eq!(fitted[3], 6.0); // (4 + 6 + 8) / 3
        assert_relative_eq!(fitted[4], 8.0);
        assert_eq!(fitted.len(), data.len());
    }

    #[test]
    fn test_sma_window_one_is_identity() {
        let data = [3.5, -1.0, 7.25, 0.0];
        assert_eq!(moving_average(&data, 1).unwrap(), data.to_vec());
    }

    #[test]
    fn test_sma_window_longer_than_series() {
        let data = [1.0, 2.0];
        assert_eq!(moving_average(&data, 5).unwrap(), data.to_vec());
    }

    #[test]
    fn test_sma_invalid_input() {
        assert_eq!(moving_average(&[1.0], 0), Err(MathError::InvalidWindow(0)));
        assert_eq!(moving_average(&[], 3), Err(MathError::EmptySeries));
    }

    #[test]
    fn test_ses_recursion() {
        let data = [10.0, 20.0, 30.0];
        let fitted = exponential_smoothing(&data, 0.5).unwrap();

        assert_eq!(fitted[0], 10.0);
        assert_relative_eq!(fitted[1], 15.0);
        assert_relative_eq!(fitted[2], 22.5);
    }

    #[test]
    fn test_ses_alpha_one_is_identity() {
        let data = [5.0, 1.0, 9.0, 4.0];
        assert_eq!(exponential_smoothing(&data, 1.0).unwrap(), data.to_vec());
    }

    #[test]
    fn test_ses_single_observation() {
        assert_eq!(exponential_smoothing(&[42.0], 0.3).unwrap(), vec![42.0]);
    }

    #[test]
    fn test_ses_invalid_alpha() {
        for alpha in [0.0, -0.1, 1.01, f64::NAN] {
            assert!(matches!(
                exponential_smoothing(&[1.0, 2.0], alpha),
                Err(MathError::InvalidAlpha(_))
            ));
        }
        assert_eq!(exponential_smoothing(&[], 0.3), Err(MathError::EmptySeries));
    }
}
