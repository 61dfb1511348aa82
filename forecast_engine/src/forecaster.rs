//! Out-of-sample forecasting with confidence bands
//!
//! The forecaster fits the selected model to the history, measures the
//! dispersion of the residuals, and extrapolates the trend of the last two
//! fitted values. Every future point carries a 95% normal-approximation band
//! of constant width: the band does not widen with the horizon.

use crate::config::ForecastOptions;
use crate::error::{ForecastError, Result};
use crate::metrics::{calculate_metrics, residual_std_dev, Metrics};
use crate::models::{model_for, FittingModel};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Multiplier of the residual dispersion for a 95% normal-approximation band
pub const Z_SCORE_95: f64 = 1.96;

/// Lower and upper bound around a predicted value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Symmetric interval of `half_width` around `center`
    pub fn around(center: f64, half_width: f64) -> Self {
        Self {
            lower: center - half_width,
            upper: center + half_width,
        }
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// A single future period of a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Periods after the last observation, starting at 1
    pub offset: usize,
    /// Display label, `Future +offset`
    pub label: String,
    /// Point forecast
    pub predicted: f64,
    /// 95% band around the point forecast
    pub confidence: ConfidenceInterval,
}

/// Forecaster bound to a validated set of options
#[derive(Debug)]
pub struct Forecaster {
    options: ForecastOptions,
    model: Box<dyn FittingModel>,
}

impl Forecaster {
    /// Create a forecaster, validating `options` once up front
    pub fn new(options: ForecastOptions) -> Result<Self> {
        options.validate()?;
        let model = model_for(&options)?;
        Ok(Self { options, model })
    }

    pub fn options(&self) -> &ForecastOptions {
        &self.options
    }

    /// Name of the underlying fitting model
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Fitted sequence aligned with `series`
    pub fn fit(&self, series: &[f64]) -> Result<Vec<f64>> {
        debug!(
            model = self.model.name(),
            observations = series.len(),
            "fitting series"
        );
        self.model.fit(series)
    }

    /// Accuracy of the historical fit against the series itself
    pub fn evaluate(&self, series: &[f64]) -> Result<Metrics> {
        let fitted = self.fit(series)?;
        calculate_metrics(series, &fitted)
    }

    /// Forecast `options.periods` future points with confidence bands
    pub fn forecast(&self, series: &[f64]) -> Result<Vec<ForecastPoint>> {
        let (_, forecasts) = self.fit_and_forecast(series)?;
        Ok(forecasts)
    }

    /// Fit the series and also return the forecast built from the same fit
    pub(crate) fn fit_and_forecast(
        &self,
        series: &[f64],
    ) -> Result<(Vec<f64>, Vec<ForecastPoint>)> {
        let fitted = self.fit_for_extrapolation(series)?;
        let forecasts = extrapolate(series, &fitted, self.options.periods);
        Ok((fitted, forecasts))
    }

    fn fit_for_extrapolation(&self, series: &[f64]) -> Result<Vec<f64>> {
        if series.is_empty() {
            return Err(ForecastError::EmptySeries);
        }
        if series.len() < 2 {
            return Err(ForecastError::InsufficientData {
                required: 2,
                actual: series.len(),
            });
        }
        self.fit(series)
    }
}

/// Extrapolate the trend of the last two fitted values over `periods` steps.
///
/// `fitted` must hold at least two values.
fn extrapolate(series: &[f64], fitted: &[f64], periods: usize) -> Vec<ForecastPoint> {
    let std_dev = residual_std_dev(series, fitted);
    let base = fitted[fitted.len() - 1];
    let trend = base - fitted[fitted.len() - 2];
    let half_width = Z_SCORE_95 * std_dev;

    debug!(base, trend, std_dev, periods, "extrapolating forecast");

    (1..=periods)
        .map(|offset| {
            let predicted = base + trend * offset as f64;
            ForecastPoint {
                offset,
                label: format!("Future +{}", offset),
                predicted,
                confidence: ConfidenceInterval::around(predicted, half_width),
            }
        })
        .collect()
}

/// Fitted sequence for `series` using the method selected in `options`
pub fn fit(series: &[f64], options: &ForecastOptions) -> Result<Vec<f64>> {
    Forecaster::new(*options)?.fit(series)
}

/// Forecast `options.periods` future points with 95% confidence bands.
///
/// # Errors
/// * [`ForecastError::InvalidParameter`] if the options are out of range
/// * [`ForecastError::EmptySeries`] if `series` is empty
/// * [`ForecastError::InsufficientData`] if `series` has fewer than two values
pub fn forecast_with_confidence(
    series: &[f64],
    options: &ForecastOptions,
) -> Result<Vec<ForecastPoint>> {
    Forecaster::new(*options)?.forecast(series)
}
