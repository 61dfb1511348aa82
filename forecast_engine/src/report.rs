//! Forecast reports: historical fit, future points and accuracy in one value

use crate::config::{ForecastMethod, ForecastOptions};
use crate::error::Result;
use crate::forecaster::{ForecastPoint, Forecaster};
use crate::metrics::{calculate_metrics, Metrics};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A historical observation next to its fitted value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Display label, `Month n` counting from 1
    pub label: String,
    pub actual: f64,
    pub predicted: f64,
}

/// Everything a caller needs to chart and score one forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub method: ForecastMethod,
    pub historical: Vec<HistoricalPoint>,
    pub forecasts: Vec<ForecastPoint>,
    pub metrics: Metrics,
}

impl ForecastReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Accuracy of one method on a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub method: ForecastMethod,
    pub name: String,
    pub metrics: Metrics,
    /// `100 - MAPE`, absent when MAPE is undefined
    pub accuracy: Option<f64>,
}

/// Fit `series`, forecast `options.periods` ahead and score the fit
pub fn build_report(series: &[f64], options: &ForecastOptions) -> Result<ForecastReport> {
    let forecaster = Forecaster::new(*options)?;
    let (fitted, forecasts) = forecaster.fit_and_forecast(series)?;
    let metrics = calculate_metrics(series, &fitted)?;

    let historical = series
        .iter()
        .zip(&fitted)
        .enumerate()
        .map(|(i, (&actual, &predicted))| HistoricalPoint {
            label: format!("Month {}", i + 1),
            actual,
            predicted,
        })
        .collect();

    info!(
        method = options.method.code(),
        observations = series.len(),
        periods = options.periods,
        "built forecast report"
    );

    Ok(ForecastReport {
        method: options.method,
        historical,
        forecasts,
        metrics,
    })
}

/// Score every method on `series`.
///
/// `options.window` and `options.alpha` parameterise the moving average and
/// exponential smoothing; `options.method` and `options.periods` are ignored.
pub fn compare_models(series: &[f64], options: &ForecastOptions) -> Result<Vec<ModelSummary>> {
    ForecastMethod::ALL
        .iter()
        .map(|&method| {
            let metrics = Forecaster::new(options.with_method(method))?.evaluate(series)?;
            debug!(method = method.code(), mae = metrics.mae, rmse = metrics.rmse, "scored model");
            Ok(ModelSummary {
                method,
                name: method.name().to_string(),
                accuracy: metrics.accuracy(),
                metrics,
            })
        })
        .collect()
}
