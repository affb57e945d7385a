// ABOUTME: Day-scoring engine turning daily forecasts into ranked activity days
// ABOUTME: Pure synchronous library with read-only default tables and no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

#![deny(unsafe_code)]

//! # Good Day Intelligence
//!
//! The decision logic of the service. Given an ordered forecast window, the
//! user's age range and an activity category, the engine:
//!
//! 1. resolves effective preferences ([`preferences`])
//! 2. scores every day's weather ([`scorer`])
//! 3. derives a default time window per day ([`availability`])
//! 4. sorts the annotated days and truncates them ([`ranking`])
//!
//! All tables are `const` data. Every function is pure and safe to call from
//! any number of threads at once.

/// Default time windows per age group
pub mod availability;
/// Scoring weights and thresholds
pub mod constants;
/// Demographic filtering of the activity catalog
pub mod demographics;
/// Category defaults and override merging
pub mod preferences;
/// Day ranking and top-N selection
pub mod ranking;
/// Single-day weather scoring
pub mod scorer;

pub use availability::{default_window, is_weekend, AgeGroup, TimeWindow};
pub use demographics::{filter_by_demographics, AgeBounds};
pub use preferences::{resolve_preferences, ActivityCategory};
pub use ranking::{rank_days, top_n, top_recommendations, weather_summary};
pub use scorer::{score_weather, QualityLabel, WeatherScore};
