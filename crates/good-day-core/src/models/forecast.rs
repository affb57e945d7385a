// ABOUTME: Daily weather observation model supplied by forecast providers
// ABOUTME: Keeps the raw date text so the ranker can report malformed entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use serde::{Deserialize, Serialize};

/// One day of forecast data
///
/// `date` is kept as the provider sent it (ISO `YYYY-MM-DD`, or an ISO
/// date-time). Parsing happens in the ranker so that a malformed value is
/// reported as an `InvalidObservationError` with its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeatherObservation {
    /// Calendar date as text
    pub date: String,
    /// Daily maximum temperature in °F
    pub temperature: f64,
    /// Precipitation probability in `[0, 1]`
    pub precipitation_probability: f64,
    /// Maximum wind speed in mph
    #[serde(default)]
    pub wind_speed: f64,
}

impl DailyWeatherObservation {
    /// Create an observation with no wind
    #[must_use]
    pub fn new(date: impl Into<String>, temperature: f64, precipitation_probability: f64) -> Self {
        Self {
            date: date.into(),
            temperature,
            precipitation_probability,
            wind_speed: 0.0,
        }
    }

    /// Set the wind speed
    #[must_use]
    pub const fn with_wind_speed(mut self, wind_speed: f64) -> Self {
        self.wind_speed = wind_speed;
        self
    }
}
