// ABOUTME: Activity weather preference sets and caller-supplied partial overrides
// ABOUTME: Overrides merge field by field into a copy of the category defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use serde::{Deserialize, Serialize};

/// Effective weather preferences for an activity
///
/// `min_temperature <= max_temperature` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityPreferences {
    /// Lower bound of the ideal temperature band in °F
    pub min_temperature: f64,
    /// Upper bound of the ideal temperature band in °F
    pub max_temperature: f64,
    /// Penalize days with a chance of rain
    pub avoid_rain: bool,
    /// Carried with the preference set; the scorer does not read it
    pub avoid_snow: bool,
}

impl ActivityPreferences {
    /// Apply every non-empty override field, returning a new set
    #[must_use]
    pub fn merged_with(self, overrides: &PreferenceOverrides) -> Self {
        Self {
            min_temperature: overrides.min_temperature.unwrap_or(self.min_temperature),
            max_temperature: overrides.max_temperature.unwrap_or(self.max_temperature),
            avoid_rain: overrides.avoid_rain.unwrap_or(self.avoid_rain),
            avoid_snow: overrides.avoid_snow.unwrap_or(self.avoid_snow),
        }
    }
}

/// Partial preference set; `None` fields keep the category default
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceOverrides {
    /// Override for the lower temperature bound
    #[serde(default)]
    pub min_temperature: Option<f64>,
    /// Override for the upper temperature bound
    #[serde(default)]
    pub max_temperature: Option<f64>,
    /// Override for rain avoidance
    #[serde(default)]
    pub avoid_rain: Option<bool>,
    /// Override for snow avoidance
    #[serde(default)]
    pub avoid_snow: Option<bool>,
}

impl PreferenceOverrides {
    /// True when no field is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min_temperature.is_none()
            && self.max_temperature.is_none()
            && self.avoid_rain.is_none()
            && self.avoid_snow.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_defaults_for_missing_fields() {
        let defaults = ActivityPreferences {
            min_temperature: 60.0,
            max_temperature: 85.0,
            avoid_rain: true,
            avoid_snow: true,
        };
        let overrides = PreferenceOverrides {
            max_temperature: Some(75.0),
            avoid_rain: Some(false),
            ..PreferenceOverrides::default()
        };

        let merged = defaults.merged_with(&overrides);

        assert!((merged.min_temperature - 60.0).abs() < f64::EPSILON);
        assert!((merged.max_temperature - 75.0).abs() < f64::EPSILON);
        assert!(!merged.avoid_rain);
        assert!(merged.avoid_snow);
        assert!((defaults.max_temperature - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_overrides() {
        assert!(PreferenceOverrides::default().is_empty());
        let overrides = PreferenceOverrides {
            avoid_snow: Some(false),
            ..PreferenceOverrides::default()
        };
        assert!(!overrides.is_empty());
    }
}
