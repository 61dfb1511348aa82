use approx::assert_relative_eq;
use forecast_engine::models::{
    model_for, ExponentialSmoothing, FittingModel, LinearRegression, MovingAverage,
};
use forecast_engine::{ForecastError, ForecastMethod, ForecastOptions};
use rstest::rstest;

fn create_test_data() -> Vec<f64> {
    vec![100.0, 102.0, 104.0, 103.0, 105.0]
}

#[test]
fn test_exponential_smoothing() {
    let data = create_test_data();
    let model = ExponentialSmoothing::new(0.3).unwrap();

    let fitted = model.fit(&data).unwrap();

    assert_eq!(fitted.len(), data.len());
    assert_eq!(fitted[0], data[0]);
    assert_relative_eq!(fitted[1], 0.3 * 102.0 + 0.7 * 100.0, epsilon = 1e-12);
    assert_eq!(model.method(), ForecastMethod::ExponentialSmoothing);
}

#[test]
fn test_moving_average() {
    let data = create_test_data();
    let model = MovingAverage::new(3).unwrap();

    let fitted = model.fit(&data).unwrap();

    assert_eq!(fitted.len(), data.len());
    assert_eq!(&fitted[..2], &data[..2]);
    assert_relative_eq!(fitted[2], 102.0, epsilon = 1e-12);
    assert_relative_eq!(fitted[3], 103.0, epsilon = 1e-12);
    assert_relative_eq!(fitted[4], 104.0, epsilon = 1e-12);
}

#[test]
fn test_linear_regression() {
    let model = LinearRegression::new();
    let result = model.regress(&[10.0, 12.0, 14.0, 16.0]).unwrap();

    assert_relative_eq!(result.slope, 2.0, epsilon = 1e-12);
    assert_relative_eq!(result.intercept, 10.0, epsilon = 1e-12);
    assert_eq!(model.fit(&[10.0, 12.0, 14.0, 16.0]).unwrap(), result.fitted);
}

#[rstest]
#[case(0.0, 3.5)]
#[case(4.0, -2.0)]
#[case(-7.25, 0.5)]
fn test_linear_regression_recovers_line(#[case] intercept: f64, #[case] slope: f64) {
    let series: Vec<f64> = (0..12).map(|i| slope * i as f64 + intercept).collect();
    let result = LinearRegression::new().regress(&series).unwrap();

    assert_relative_eq!(result.slope, slope, epsilon = 1e-9);
    assert_relative_eq!(result.intercept, intercept, epsilon = 1e-9);
}

#[test]
fn test_identity_parameters() {
    let data = create_test_data();

    // alpha = 1 keeps no memory, window = 1 averages a single value
    assert_eq!(ExponentialSmoothing::new(1.0).unwrap().fit(&data).unwrap(), data);
    assert_eq!(MovingAverage::new(1).unwrap().fit(&data).unwrap(), data);
}

#[test]
fn test_methods_are_distinct() {
    let data = vec![3.0, 9.0, 4.0, 12.0, 6.0, 15.0];
    let fits: Vec<Vec<f64>> = ForecastMethod::ALL
        .iter()
        .map(|&m| model_for(&ForecastOptions::new(m)).unwrap().fit(&data).unwrap())
        .collect();

    assert_ne!(fits[0], fits[1]);
    assert_ne!(fits[0], fits[2]);
    assert_ne!(fits[1], fits[2]);
}

#[test]
fn test_model_parameter_validation() {
    assert!(matches!(
        ExponentialSmoothing::new(1.5),
        Err(ForecastError::InvalidParameter(_))
    ));
    assert!(ExponentialSmoothing::new(0.0).is_err());
    assert!(matches!(
        MovingAverage::new(0),
        Err(ForecastError::InvalidParameter(_))
    ));
}

#[test]
fn test_degenerate_series() {
    assert!(matches!(
        LinearRegression::new().fit(&[42.0]),
        Err(ForecastError::InsufficientData {
            required: 2,
            actual: 1
        })
    ));
    assert!(matches!(
        MovingAverage::new(3).unwrap().fit(&[]),
        Err(ForecastError::EmptySeries)
    ));
    assert!(matches!(
        ExponentialSmoothing::new(0.3).unwrap().fit(&[]),
        Err(ForecastError::EmptySeries)
    ));
}
