// ABOUTME: Open-Meteo response payloads and their mapping to domain values
// ABOUTME: Converts percent probabilities to fractions and tolerates null entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use good_day_core::constants::display::UNKNOWN_LOCATION;
use good_day_core::constants::providers::OPEN_METEO;
use good_day_core::errors::{ProviderError, ProviderResult};
use good_day_core::models::DailyWeatherObservation;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: Option<DailyBlock>,
}

/// Parallel arrays, one entry per day
#[derive(Debug, Default, Deserialize)]
struct DailyBlock {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_probability_max: Vec<Option<f64>>,
    #[serde(default)]
    windspeed_10m_max: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: Option<String>,
    country: Option<String>,
}

fn invalid(reason: impl Into<String>) -> ProviderError {
    ProviderError::InvalidResponse {
        provider: OPEN_METEO.to_owned(),
        reason: reason.into(),
    }
}

/// Map a forecast payload to observations
///
/// Arrays of unequal length are cut to the shortest of `time` and
/// `temperature_2m_max`. Days without a temperature are dropped; missing
/// precipitation or wind counts as zero.
///
/// # Errors
///
/// Returns `InvalidResponse` when the body is not JSON or has no `daily` block.
pub fn parse_forecast_response(body: &str) -> ProviderResult<Vec<DailyWeatherObservation>> {
    let response: ForecastResponse =
        serde_json::from_str(body).map_err(|e| invalid(format!("forecast JSON: {e}")))?;
    let daily = response
        .daily
        .ok_or_else(|| invalid("forecast response has no daily block"))?;

    let days = daily.time.len().min(daily.temperature_2m_max.len());
    let observations: Vec<DailyWeatherObservation> = daily
        .time
        .into_iter()
        .take(days)
        .enumerate()
        .filter_map(|(i, date)| {
            let temperature = daily.temperature_2m_max.get(i).copied().flatten()?;
            let percent = daily
                .precipitation_probability_max
                .get(i)
                .copied()
                .flatten()
                .unwrap_or(0.0);
            let wind = daily
                .windspeed_10m_max
                .get(i)
                .copied()
                .flatten()
                .unwrap_or(0.0);
            Some(DailyWeatherObservation::new(date, temperature, percent / 100.0).with_wind_speed(wind))
        })
        .collect();

    if observations.len() < days {
        debug!(
            dropped = days - observations.len(),
            "Dropped forecast days without temperature"
        );
    }
    Ok(observations)
}

/// Render the first geocoding hit as `"{name}, {country}"`
///
/// # Errors
///
/// Returns `InvalidResponse` when the body is not JSON.
pub fn parse_geocoding_response(body: &str) -> ProviderResult<String> {
    let response: GeocodingResponse =
        serde_json::from_str(body).map_err(|e| invalid(format!("geocoding JSON: {e}")))?;

    let Some(first) = response.results.and_then(|r| r.into_iter().next()) else {
        return Ok(UNKNOWN_LOCATION.to_owned());
    };

    let name = first.name.unwrap_or_else(|| UNKNOWN_LOCATION.to_owned());
    Ok(match first.country.filter(|c| !c.is_empty()) {
        Some(country) => format!("{name}, {country}"),
        None => name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forecast_converts_percentages() {
        let body = r#"{
            "latitude": 38.7,
            "daily": {
                "time": ["2025-06-09", "2025-06-10"],
                "temperature_2m_max": [72.5, 88.1],
                "precipitation_probability_max": [5, 60],
                "windspeed_10m_max": [8.2, 17.0]
            }
        }"#;

        let observations = parse_forecast_response(body).unwrap();
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].date, "2025-06-09");
        assert!((observations[0].precipitation_probability - 0.05).abs() < 1e-9);
        assert!((observations[1].precipitation_probability - 0.6).abs() < 1e-9);
        assert!((observations[1].wind_speed - 17.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_forecast_tolerates_nulls() {
        let body = r#"{"daily": {
            "time": ["2025-06-09", "2025-06-10", "2025-06-11"],
            "temperature_2m_max": [70.0, null, 75.0],
            "precipitation_probability_max": [null, 20, 30],
            "windspeed_10m_max": [null]
        }}"#;

        let observations = parse_forecast_response(body).unwrap();
        let dates: Vec<&str> = observations.iter().map(|o| o.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-06-09", "2025-06-11"]);
        assert!(observations[0].precipitation_probability.abs() < f64::EPSILON);
        assert!(observations[1].wind_speed.abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_forecast_without_daily_block() {
        let err = parse_forecast_response(r#"{"error": true, "reason": "bad"}"#).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidResponse { .. }));
        assert!(parse_forecast_response("not json").is_err());
    }

    #[test]
    fn test_parse_geocoding() {
        let body = r#"{"results": [{"name": "Lisbon", "country": "Portugal"}]}"#;
        assert_eq!(parse_geocoding_response(body).unwrap(), "Lisbon, Portugal");

        let no_country = r#"{"results": [{"name": "Atlantis"}]}"#;
        assert_eq!(parse_geocoding_response(no_country).unwrap(), "Atlantis");

        assert_eq!(
            parse_geocoding_response(r#"{"generationtime_ms": 0.1}"#).unwrap(),
            "Unknown Location"
        );
        assert_eq!(
            parse_geocoding_response(r#"{"results": []}"#).unwrap(),
            "Unknown Location"
        );
    }
}
