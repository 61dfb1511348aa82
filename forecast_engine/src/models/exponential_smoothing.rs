//! Simple exponential smoothing model

use crate::config::ForecastMethod;
use crate::error::{ForecastError, Result};
use crate::models::FittingModel;
use forecast_math::smoothing;

/// Simple exponential smoothing model
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Smoothing parameter
    alpha: f64,
}

impl ExponentialSmoothing {
    /// Create a new exponential smoothing model.
    ///
    /// `alpha = 1` is accepted and reproduces the input series.
    pub fn new(alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "Alpha must be in (0, 1], got {}",
                alpha
            )));
        }

        Ok(Self {
            name: format!("Exponential Smoothing (alpha={})", alpha),
            alpha,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl FittingModel for ExponentialSmoothing {
    fn fit(&self, series: &[f64]) -> Result<Vec<f64>> {
        Ok(smoothing::exponential_smoothing(series, self.alpha)?)
    }

    fn method(&self) -> ForecastMethod {
        ForecastMethod::ExponentialSmoothing
    }

    fn name(&self) -> &str {
        &self.name
    }
}
