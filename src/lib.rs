//! # Shipment Forecast
//!
//! `shipment_forecast` bundles the forecasting engine and its numeric
//! primitives behind a single import.
//!
//! ## Example
//!
//! ```
//! use shipment_forecast::{calculate_metrics, forecast_with_confidence, ForecastOptions};
//!
//! let history = [120.0, 135.0, 128.0, 142.0, 150.0];
//! let forecast = forecast_with_confidence(&history, &ForecastOptions::default())?;
//! assert_eq!(forecast.len(), 6);
//!
//! let metrics = calculate_metrics(&[100.0, 200.0, 300.0], &[110.0, 190.0, 300.0])?;
//! assert!((metrics.mae - 20.0 / 3.0).abs() < 1e-9);
//! # Ok::<(), shipment_forecast::ForecastError>(())
//! ```

pub use forecast_engine::*;

/// Smoothing and regression primitives
pub mod math {
    pub use forecast_math::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_exposes_engine() {
        let points = forecast_with_confidence(
            &[10.0, 12.0, 14.0, 16.0],
            &ForecastOptions::new(ForecastMethod::LinearRegression).with_periods(2),
        )
        .unwrap();
        assert!((points[1].predicted - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_facade_exposes_math() {
        let fitted = math::exponential_smoothing(&[4.0, 8.0], 0.5).unwrap();
        assert_eq!(fitted, vec![4.0, 6.0]);
    }
}
