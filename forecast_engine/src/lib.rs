//! # Forecast Engine
//!
//! A Rust library for forecasting a scalar series such as monthly shipment
//! volume.
//!
//! ## Features
//!
//! - Fitting models (Moving Average, Exponential Smoothing, Linear Regression)
//! - Future point forecasts with 95% confidence bands
//! - Accuracy metrics (MAE, RMSE, MAPE)
//! - Reports combining the historical fit, the forecast and its metrics
//! - Synthetic shipment data for demonstrations
//!
//! Every function is a pure computation over a complete historical series:
//! nothing is cached or shared between calls, so independent forecasts can run
//! concurrently.
//!
//! ## Quick Start
//!
//! ```rust
//! use forecast_engine::{forecast_with_confidence, ForecastMethod, ForecastOptions};
//!
//! let history = [10.0, 12.0, 14.0, 16.0];
//! let options = ForecastOptions::new(ForecastMethod::LinearRegression).with_periods(2);
//!
//! let forecast = forecast_with_confidence(&history, &options)?;
//! assert_eq!(forecast.len(), 2);
//! assert!((forecast[0].predicted - 18.0).abs() < 1e-9);
//! # Ok::<(), forecast_engine::ForecastError>(())
//! ```

pub mod config;
pub mod error;
pub mod forecaster;
pub mod metrics;
pub mod models;
pub mod report;
pub mod sample;
pub mod utils;

// Re-export commonly used types
pub use crate::config::{ForecastMethod, ForecastOptions};
pub use crate::error::{ForecastError, Result};
pub use crate::forecaster::{
    fit, forecast_with_confidence, ConfidenceInterval, ForecastPoint, Forecaster,
};
pub use crate::metrics::{calculate_metrics, Mape, Metrics};
pub use crate::models::FittingModel;
pub use crate::report::{build_report, compare_models, ForecastReport, HistoricalPoint, ModelSummary};
pub use crate::sample::{generate_sample_shipment_data, SampleConfig};
pub use forecast_math::{
    exponential_smoothing, linear_regression, moving_average, MathError, RegressionResult,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
