// ABOUTME: Weather scorer converting one day's observation into a 1-10 score
// ABOUTME: Applies temperature, precipitation and wind terms then labels the quality
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use std::fmt::{self, Display, Formatter};

use good_day_core::models::ActivityPreferences;
use serde::{Deserialize, Serialize};

use crate::constants::{precipitation, quality, score_bounds, temperature, wind};

/// Coarse banding of a clamped score, used only in explanation text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLabel {
    /// Score of 8 or more
    Perfect,
    /// Score of 6 or more
    Great,
    /// Score of 4 or more
    Good,
    /// Anything lower
    Fair,
}

impl QualityLabel {
    /// Band a clamped score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= quality::PERFECT {
            Self::Perfect
        } else if score >= quality::GREAT {
            Self::Great
        } else if score >= quality::GOOD {
            Self::Good
        } else {
            Self::Fair
        }
    }

    /// Display text
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect",
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Fair => "Fair",
        }
    }
}

impl Display for QualityLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherScore {
    /// Score clamped to `[1, 10]`
    pub score: f64,
    /// Quality band of `score`
    pub quality: QualityLabel,
    /// `"{quality} conditions: "` followed by the notes joined with `"; "`
    pub explanation: String,
}

/// Score one day's weather against the effective preferences
///
/// Inputs are not checked for physical plausibility.
#[must_use]
pub fn score_weather(
    temperature: f64,
    precipitation_probability: f64,
    wind_speed: f64,
    prefs: &ActivityPreferences,
) -> WeatherScore {
    let mut notes: Vec<String> = Vec::with_capacity(3);

    let mut score = score_bounds::BASE_SCORE + temperature_term(temperature, prefs, &mut notes);
    score += precipitation_term(precipitation_probability, prefs.avoid_rain, &mut notes);
    score -= wind_penalty(wind_speed, &mut notes);

    let score = score.clamp(score_bounds::MIN_SCORE, score_bounds::MAX_SCORE);
    let quality = QualityLabel::from_score(score);

    WeatherScore {
        score,
        quality,
        explanation: format!("{quality} conditions: {}", notes.join("; ")),
    }
}

fn temperature_term(temp: f64, prefs: &ActivityPreferences, notes: &mut Vec<String>) -> f64 {
    if prefs.min_temperature <= temp && temp <= prefs.max_temperature {
        notes.push(format!("Ideal temperature of {temp:.1}°F"));
        temperature::IDEAL_BONUS
    } else if temp < prefs.min_temperature {
        notes.push(format!("A bit cool at {temp:.1}°F"));
        let diff = prefs.min_temperature - temp;
        (temperature::IDEAL_BONUS - diff / temperature::DEGREES_PER_POINT).max(0.0)
    } else {
        // Also reached with an inverted band or a NaN temperature
        notes.push(format!("A bit warm at {temp:.1}°F"));
        let diff = temp - prefs.max_temperature;
        (temperature::IDEAL_BONUS - diff / temperature::DEGREES_PER_POINT).max(0.0)
    }
}

fn precipitation_term(probability: f64, avoid_rain: bool, notes: &mut Vec<String>) -> f64 {
    let percent = probability * 100.0;
    if avoid_rain && probability > precipitation::HIGH_CHANCE_THRESHOLD {
        notes.push(format!("High chance of rain ({percent:.0}%)"));
        -(precipitation::HIGH_CHANCE_WEIGHT * (probability - precipitation::HIGH_CHANCE_THRESHOLD))
    } else if avoid_rain && probability > precipitation::SOME_CHANCE_THRESHOLD {
        notes.push(format!("Some chance of rain ({percent:.0}%)"));
        -(precipitation::SOME_CHANCE_WEIGHT * (probability - precipitation::SOME_CHANCE_THRESHOLD))
    } else if probability < precipitation::CLEAR_SKIES_THRESHOLD {
        notes.push("Clear skies expected".to_owned());
        precipitation::CLEAR_SKIES_BONUS
    } else {
        0.0
    }
}

fn wind_penalty(wind_speed: f64, notes: &mut Vec<String>) -> f64 {
    if wind_speed > wind::CALM_LIMIT_MPH {
        notes.push(format!("Windy conditions ({wind_speed:.1} mph)"));
        ((wind_speed - wind::CALM_LIMIT_MPH) / wind::MPH_PER_POINT).min(wind::MAX_PENALTY)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTDOOR: ActivityPreferences = ActivityPreferences {
        min_temperature: 60.0,
        max_temperature: 85.0,
        avoid_rain: true,
        avoid_snow: true,
    };

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_ideal_clear_calm_day() {
        let result = score_weather(70.0, 0.05, 5.0, &OUTDOOR);
        assert!(approx(result.score, 9.0));
        assert_eq!(result.quality, QualityLabel::Perfect);
        assert_eq!(
            result.explanation,
            "Perfect conditions: Ideal temperature of 70.0°F; Clear skies expected"
        );
    }

    #[test]
    fn test_hot_rainy_windy_day() {
        let result = score_weather(95.0, 0.6, 20.0, &OUTDOOR);
        assert!(approx(result.score, 6.1));
        assert_eq!(result.quality, QualityLabel::Great);
        assert_eq!(
            result.explanation,
            "Great conditions: A bit warm at 95.0°F; High chance of rain (60%); Windy conditions (20.0 mph)"
        );
    }

    #[test]
    fn test_some_chance_of_rain() {
        let result = score_weather(50.0, 0.3, 0.0, &OUTDOOR);
        // 5 + (3 - 1) - 2 * 0.1
        assert!(approx(result.score, 6.8));
        assert_eq!(
            result.explanation,
            "Great conditions: A bit cool at 50.0°F; Some chance of rain (30%)"
        );
    }

    #[test]
    fn test_rain_ignored_when_not_avoided() {
        let prefs = ActivityPreferences {
            avoid_rain: false,
            ..OUTDOOR
        };
        let rainy = score_weather(70.0, 0.9, 0.0, &prefs);
        assert!(approx(rainy.score, 8.0));
        assert!(!rainy.explanation.contains("rain"));

        let clear = score_weather(70.0, 0.05, 0.0, &prefs);
        assert!(approx(clear.score, 9.0));
        assert!(clear.explanation.contains("Clear skies expected"));
    }

    #[test]
    fn test_no_precipitation_note_between_thresholds() {
        let result = score_weather(70.0, 0.15, 0.0, &OUTDOOR);
        assert!(approx(result.score, 8.0));
        assert_eq!(
            result.explanation,
            "Perfect conditions: Ideal temperature of 70.0°F"
        );
    }

    #[test]
    fn test_wind_penalty_is_capped() {
        let result = score_weather(70.0, 0.15, 60.0, &OUTDOOR);
        assert!(approx(result.score, 6.0));
        assert!(result.explanation.ends_with("Windy conditions (60.0 mph)"));
    }

    #[test]
    fn test_score_clamped_to_minimum() {
        let result = score_weather(-40.0, 1.0, 80.0, &OUTDOOR);
        // 5 + 0 - 2 - 2 = 1
        assert!(approx(result.score, 1.0));
        assert_eq!(result.quality, QualityLabel::Fair);
    }

    #[test]
    fn test_temperature_term_never_negative() {
        let far = score_weather(200.0, 0.15, 0.0, &OUTDOOR);
        assert!(approx(far.score, 5.0));
        assert_eq!(far.quality, QualityLabel::Good);
    }

    #[test]
    fn test_band_edges_are_ideal() {
        assert!(score_weather(60.0, 0.15, 0.0, &OUTDOOR)
            .explanation
            .contains("Ideal temperature of 60.0°F"));
        assert!(score_weather(85.0, 0.15, 0.0, &OUTDOOR)
            .explanation
            .contains("Ideal temperature of 85.0°F"));
    }

    #[test]
    fn test_inverted_band_is_never_ideal() {
        let prefs = ActivityPreferences {
            min_temperature: 80.0,
            max_temperature: 60.0,
            ..OUTDOOR
        };
        let result = score_weather(70.0, 0.15, 0.0, &prefs);
        assert!(result.explanation.contains("A bit cool at 70.0°F"));
        assert!(approx(result.score, 7.0));
    }

    #[test]
    fn test_quality_bands() {
        assert_eq!(QualityLabel::from_score(10.0), QualityLabel::Perfect);
        assert_eq!(QualityLabel::from_score(8.0), QualityLabel::Perfect);
        assert_eq!(QualityLabel::from_score(7.99), QualityLabel::Great);
        assert_eq!(QualityLabel::from_score(6.0), QualityLabel::Great);
        assert_eq!(QualityLabel::from_score(4.0), QualityLabel::Good);
        assert_eq!(QualityLabel::from_score(3.9), QualityLabel::Fair);
    }

    #[test]
    fn test_monotonic_outside_band() {
        let mut previous = f64::INFINITY;
        for temp in [85.0, 90.0, 95.0, 100.0, 110.0, 130.0] {
            let score = score_weather(temp, 0.15, 0.0, &OUTDOOR).score;
            assert!(score <= previous);
            previous = score;
        }
    }
}
