//! Fitting models for historical series
//!
//! Each model turns a complete historical series into a fitted sequence of the
//! same length. The forecaster extrapolates from that fitted sequence.

use crate::config::{ForecastMethod, ForecastOptions};
use crate::error::Result;
use std::fmt::Debug;

pub mod exponential_smoothing;
pub mod linear_regression;
pub mod moving_average;

pub use exponential_smoothing::ExponentialSmoothing;
pub use linear_regression::LinearRegression;
pub use moving_average::MovingAverage;

/// Model that produces one fitted value per historical observation
pub trait FittingModel: Debug + Send + Sync {
    /// Fit the model, returning a sequence aligned with `series`
    fn fit(&self, series: &[f64]) -> Result<Vec<f64>>;

    /// Method this model implements
    fn method(&self) -> ForecastMethod;

    /// Name of the model, including its parameters
    fn name(&self) -> &str;
}

/// Build the model selected by `options`, validating its parameters
pub fn model_for(options: &ForecastOptions) -> Result<Box<dyn FittingModel>> {
    let model: Box<dyn FittingModel> = match options.method {
        ForecastMethod::MovingAverage => Box::new(MovingAverage::new(options.window)?),
        ForecastMethod::ExponentialSmoothing => {
            Box::new(ExponentialSmoothing::new(options.alpha)?)
        }
        ForecastMethod::LinearRegression => Box::new(LinearRegression::new()),
    };
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_for_each_method() {
        for method in ForecastMethod::ALL {
            let model = model_for(&ForecastOptions::new(method)).unwrap();
            assert_eq!(model.method(), method);
            assert_eq!(model.fit(&[1.0, 2.0, 3.0]).unwrap().len(), 3);
        }
    }

    #[test]
    fn test_model_for_rejects_bad_parameters() {
        let options = ForecastOptions::new(ForecastMethod::MovingAverage).with_window(0);
        assert!(model_for(&options).is_err());

        let options = ForecastOptions::new(ForecastMethod::ExponentialSmoothing).with_alpha(2.0);
        assert!(model_for(&options).is_err());
    }
}
