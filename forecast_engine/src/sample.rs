//! Synthetic shipment volume series for demonstrations
//!
//! Values follow `base + trend * i + seasonality * sin(2πi / 12) + noise`, with
//! noise drawn uniformly around zero. Output is random unless the caller
//! supplies a seeded generator.

use crate::error::{ForecastError, Result};
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default number of historical months
pub const DEFAULT_MONTHS: usize = 24;

/// Shape of the generated series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Volume at month zero
    pub base_volume: f64,
    /// Growth per month
    pub trend: f64,
    /// Amplitude of the yearly cycle
    pub seasonality: f64,
    /// Half-width of the uniform noise
    pub noise_half_width: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            base_volume: 10_000.0,
            trend: 50.0,
            seasonality: 2_000.0,
            noise_half_width: 250.0,
        }
    }
}

impl SampleConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.noise_half_width.is_finite() || self.noise_half_width < 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "noise half-width must be a non-negative number, got {}",
                self.noise_half_width
            )));
        }
        Ok(())
    }

    /// Noise-free value for month `i`
    pub fn expected(&self, i: usize) -> f64 {
        let i = i as f64;
        self.base_volume + self.trend * i + self.seasonality * (2.0 * PI * i / 12.0).sin()
    }

    /// Generate `months` values using the thread-local generator
    pub fn generate(&self, months: usize) -> Result<Vec<f64>> {
        self.generate_with(months, &mut rand::thread_rng())
    }

    /// Generate `months` values drawing noise from `rng`
    pub fn generate_with<R: Rng + ?Sized>(&self, months: usize, rng: &mut R) -> Result<Vec<f64>> {
        self.validate()?;
        Ok(self.sample(months, rng))
    }

    fn sample<R: Rng + ?Sized>(&self, months: usize, rng: &mut R) -> Vec<f64> {
        if self.noise_half_width == 0.0 {
            return (0..months).map(|i| self.expected(i)).collect();
        }

        let noise = Uniform::new(-self.noise_half_width, self.noise_half_width);
        (0..months)
            .map(|i| self.expected(i) + noise.sample(rng))
            .collect()
    }
}

/// Generate a sample shipment series with the default shape
pub fn generate_sample_shipment_data(months: usize) -> Vec<f64> {
    SampleConfig::default().sample(months, &mut rand::thread_rng())
}
