//! Trailing simple moving average model

use crate::config::ForecastMethod;
use crate::error::{ForecastError, Result};
use crate::models::FittingModel;
use forecast_math::smoothing;

/// Simple Moving Average model
#[derive(Debug, Clone)]
pub struct MovingAverage {
    /// Name of the model
    name: String,
    /// Window size
    window: usize,
}

impl MovingAverage {
    /// Create a new Simple Moving Average model
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window size must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Simple Moving Average (window={})", window),
            window,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl FittingModel for MovingAverage {
    fn fit(&self, series: &[f64]) -> Result<Vec<f64>> {
        Ok(smoothing::moving_average(series, self.window)?)
    }

    fn method(&self) -> ForecastMethod {
        ForecastMethod::MovingAverage
    }

    fn name(&self) -> &str {
        &self.name
    }
}
