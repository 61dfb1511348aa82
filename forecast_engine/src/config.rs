//! Forecast configuration: method selection and fixed model parameters

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default trailing window for the moving average
pub const DEFAULT_WINDOW: usize = 3;
/// Default smoothing factor for exponential smoothing
pub const DEFAULT_ALPHA: f64 = 0.3;
/// Default number of future periods to forecast
pub const DEFAULT_PERIODS: usize = 6;

/// Fitting strategy used to produce the historical fit and the forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ForecastMethod {
    #[serde(rename = "ma", alias = "moving-average")]
    MovingAverage,
    #[default]
    #[serde(rename = "es", alias = "exponential-smoothing")]
    ExponentialSmoothing,
    #[serde(rename = "lr", alias = "linear-regression")]
    LinearRegression,
}

impl ForecastMethod {
    /// All supported methods, in the order they are reported
    pub const ALL: [ForecastMethod; 3] = [
        ForecastMethod::ExponentialSmoothing,
        ForecastMethod::MovingAverage,
        ForecastMethod::LinearRegression,
    ];

    /// Short code used on the wire
    pub fn code(&self) -> &'static str {
        match self {
            ForecastMethod::MovingAverage => "ma",
            ForecastMethod::ExponentialSmoothing => "es",
            ForecastMethod::LinearRegression => "lr",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ForecastMethod::MovingAverage => "Moving Average",
            ForecastMethod::ExponentialSmoothing => "Exponential Smoothing",
            ForecastMethod::LinearRegression => "Linear Regression",
        }
    }
}

impl fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ForecastMethod {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ma" | "moving-average" | "moving_average" => Ok(ForecastMethod::MovingAverage),
            "es" | "exponential-smoothing" | "exponential_smoothing" => {
                Ok(ForecastMethod::ExponentialSmoothing)
            }
            "lr" | "linear-regression" | "linear_regression" => {
                Ok(ForecastMethod::LinearRegression)
            }
            other => Err(ForecastError::UnknownMethod(other.to_string())),
        }
    }
}

/// Options for a single forecast call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastOptions {
    /// Fitting strategy
    pub method: ForecastMethod,
    /// Trailing window for the moving average
    pub window: usize,
    /// Smoothing factor for exponential smoothing
    pub alpha: f64,
    /// Number of future periods to forecast
    pub periods: usize,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            method: ForecastMethod::default(),
            window: DEFAULT_WINDOW,
            alpha: DEFAULT_ALPHA,
            periods: DEFAULT_PERIODS,
        }
    }
}

impl ForecastOptions {
    /// Default options for the given method
    pub fn new(method: ForecastMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: ForecastMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_periods(mut self, periods: usize) -> Self {
        self.periods = periods;
        self
    }

    /// Check every parameter, whichever method is selected
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(ForecastError::InvalidParameter(
                "window must be greater than zero".to_string(),
            ));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "alpha must be in (0, 1], got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}
