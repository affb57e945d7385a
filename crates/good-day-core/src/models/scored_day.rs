// ABOUTME: Ranked day record produced by the day ranker
// ABOUTME: Holds score, explanation, weather summary and preferred time window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A forecast day annotated with its score
///
/// `score` lies in `[1, 10]` on weekdays and may reach `10.5` on weekends,
/// since the weekend bonus is added after clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDay {
    /// Calendar date
    pub date: NaiveDate,
    /// Final score including the weekend bonus
    pub score: f64,
    /// Human readable explanation
    pub explanation: String,
    /// Short condition summary, e.g. `"Clear, 72.0°F"`
    pub weather_summary: String,
    /// Temperature in °F
    pub temperature: f64,
    /// Precipitation probability in `[0, 1]`
    pub precipitation_probability: f64,
    /// Wind speed in mph
    pub wind_speed: f64,
    /// Default window start hour (24h clock)
    pub preferred_time_start: u32,
    /// Default window end hour (24h clock)
    pub preferred_time_end: u32,
}
