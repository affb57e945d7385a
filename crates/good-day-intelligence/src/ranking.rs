// ABOUTME: Day ranker scoring a forecast window and sorting it best-first
// ABOUTME: Adds the weekend bonus, weather summaries and default time windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use good_day_core::errors::InvalidObservationError;
use good_day_core::models::{DailyWeatherObservation, PreferenceOverrides, ScoredDay};
use tracing::debug;

use crate::availability::{default_window, is_weekend};
use crate::constants::{availability, summary};
use crate::preferences::resolve_preferences;
use crate::scorer::score_weather;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Short condition summary derived from precipitation probability alone
#[must_use]
pub fn weather_summary(temperature: f64, precipitation_probability: f64) -> String {
    let condition = if precipitation_probability > summary::RAINY {
        "Rainy"
    } else if precipitation_probability > summary::CHANCE_OF_RAIN {
        "Chance of rain"
    } else if precipitation_probability > summary::PARTLY_CLOUDY {
        "Partly cloudy"
    } else {
        "Clear"
    };
    format!("{condition}, {temperature:.1}°F")
}

/// Parse an observation date: an ISO date, an ISO date-time, or RFC 3339
fn parse_observation_date(index: usize, raw: &str) -> Result<NaiveDate, InvalidObservationError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Some(datetime) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
    {
        return Ok(datetime.date());
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|datetime| datetime.date_naive())
        .map_err(|e| InvalidObservationError::new(index, raw, e.to_string()))
}

/// Score and sort a forecast window
///
/// Preferences are resolved once and shared by every day. The result is
/// stable-sorted by score, highest first; equal scores keep forecast order.
///
/// # Errors
///
/// Returns [`InvalidObservationError`] for the first observation whose date
/// cannot be parsed. No partial result is produced.
pub fn rank_days(
    forecast: &[DailyWeatherObservation],
    age_range: &str,
    activity_category: &str,
    overrides: Option<&PreferenceOverrides>,
) -> Result<Vec<ScoredDay>, InvalidObservationError> {
    let prefs = resolve_preferences(activity_category, overrides);

    let mut ranked = forecast
        .iter()
        .enumerate()
        .map(|(index, observation)| {
            let date = parse_observation_date(index, &observation.date)?;
            let window = default_window(age_range, date);
            let weather = score_weather(
                observation.temperature,
                observation.precipitation_probability,
                observation.wind_speed,
                &prefs,
            );

            let (score, note) = if is_weekend(date) {
                (
                    weather.score + availability::WEEKEND_BONUS,
                    availability::WEEKEND_NOTE,
                )
            } else {
                (weather.score, availability::WEEKDAY_NOTE)
            };

            Ok(ScoredDay {
                date,
                score,
                explanation: format!("{}. {note}.", weather.explanation),
                weather_summary: weather_summary(
                    observation.temperature,
                    observation.precipitation_probability,
                ),
                temperature: observation.temperature,
                precipitation_probability: observation.precipitation_probability,
                wind_speed: observation.wind_speed,
                preferred_time_start: window.start_hour,
                preferred_time_end: window.end_hour,
            })
        })
        .collect::<Result<Vec<_>, InvalidObservationError>>()?;

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        days = ranked.len(),
        category = activity_category,
        age_range,
        best = ranked.first().map(|d| d.score),
        "Ranked forecast window"
    );

    Ok(ranked)
}

/// Keep the first `n` entries of an already ranked list
#[must_use]
pub fn top_n(mut ranked: Vec<ScoredDay>, n: usize) -> Vec<ScoredDay> {
    ranked.truncate(n);
    ranked
}

/// Rank a forecast window and keep the best `n` days
///
/// # Errors
///
/// Propagates [`InvalidObservationError`] from [`rank_days`].
pub fn top_recommendations(
    forecast: &[DailyWeatherObservation],
    age_range: &str,
    activity_category: &str,
    overrides: Option<&PreferenceOverrides>,
    n: usize,
) -> Result<Vec<ScoredDay>, InvalidObservationError> {
    rank_days(forecast, age_range, activity_category, overrides).map(|ranked| top_n(ranked, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_summary_bands() {
        assert_eq!(weather_summary(72.0, 0.8), "Rainy, 72.0°F");
        assert_eq!(weather_summary(72.0, 0.7), "Chance of rain, 72.0°F");
        assert_eq!(weather_summary(72.0, 0.5), "Chance of rain, 72.0°F");
        assert_eq!(weather_summary(72.0, 0.3), "Partly cloudy, 72.0°F");
        assert_eq!(weather_summary(72.04, 0.2), "Clear, 72.0°F");
    }

    #[test]
    fn test_parse_observation_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        assert_eq!(parse_observation_date(0, "2025-06-10").unwrap(), expected);
        assert_eq!(
            parse_observation_date(0, "2025-06-10T08:30:00").unwrap(),
            expected
        );
        assert_eq!(parse_observation_date(0, "2025-06-10 08:30").unwrap(), expected);
        assert_eq!(
            parse_observation_date(0, "2025-06-10T08:30:00+02:00").unwrap(),
            expected
        );
    }

    #[test]
    fn test_parse_observation_date_reports_position() {
        let err = parse_observation_date(4, "June 10th").unwrap_err();
        assert_eq!(err.index, 4);
        assert_eq!(err.value, "June 10th");
    }

    #[test]
    fn test_empty_forecast() {
        let ranked = rank_days(&[], "25-34", "outdoor", None).unwrap();
        assert!(ranked.is_empty());
        assert!(top_n(ranked, 3).is_empty());
    }
}
