//! Utility functions for the forecast_engine crate

use crate::error::{ForecastError, Result};
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Spacing between consecutive observations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl FromStr for Frequency {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "daily" | "d" | "1d" => Ok(Frequency::Daily),
            "weekly" | "w" | "1w" => Ok(Frequency::Weekly),
            "monthly" | "m" | "1m" => Ok(Frequency::Monthly),
            _ => Err(ForecastError::UnknownFrequency(s.to_string())),
        }
    }
}

impl Frequency {
    fn step(&self, date: NaiveDate, steps: u32) -> Option<NaiveDate> {
        match self {
            Frequency::Daily => date.checked_add_days(Days::new(u64::from(steps))),
            Frequency::Weekly => date.checked_add_days(Days::new(7 * u64::from(steps))),
            Frequency::Monthly => date.checked_add_months(Months::new(steps)),
        }
    }
}

/// Dates of the `horizon` periods following `last`.
///
/// Monthly steps follow the calendar and clamp to the end of shorter months,
/// always counting from `last` so a January 31st start yields Feb 28/29,
/// Mar 31, Apr 30.
pub fn future_timestamps(
    last: NaiveDate,
    horizon: usize,
    frequency: Frequency,
) -> Result<Vec<NaiveDate>> {
    (1..=horizon)
        .map(|k| {
            u32::try_from(k)
                .ok()
                .and_then(|k| frequency.step(last, k))
                .ok_or_else(|| {
                    ForecastError::InvalidParameter(format!(
                        "date {} + {} periods is out of range",
                        last, k
                    ))
                })
        })
        .collect()
}
