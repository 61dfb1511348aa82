//! Least-squares linear trend model

use crate::config::ForecastMethod;
use crate::error::Result;
use crate::models::FittingModel;
use forecast_math::regression::{self, RegressionResult};

/// Linear trend fitted over the series positions
#[derive(Debug, Clone, Default)]
pub struct LinearRegression;

impl LinearRegression {
    pub fn new() -> Self {
        Self
    }

    /// Fit and return slope, intercept and fitted values
    pub fn regress(&self, series: &[f64]) -> Result<RegressionResult> {
        Ok(regression::linear_regression(series)?)
    }
}

impl FittingModel for LinearRegression {
    fn fit(&self, series: &[f64]) -> Result<Vec<f64>> {
        Ok(self.regress(series)?.fitted)
    }

    fn method(&self) -> ForecastMethod {
        ForecastMethod::LinearRegression
    }

    fn name(&self) -> &str {
        "Linear Regression"
    }
}
