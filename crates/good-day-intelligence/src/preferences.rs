// ABOUTME: Preference resolver merging activity-category defaults with user overrides
// ABOUTME: Defaults are const tables; merging always produces a fresh copy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use good_day_core::models::{ActivityPreferences, PreferenceOverrides};
use serde::{Deserialize, Serialize};

const OUTDOOR_DEFAULTS: ActivityPreferences = ActivityPreferences {
    min_temperature: 60.0,
    max_temperature: 85.0,
    avoid_rain: true,
    avoid_snow: true,
};

const CREATIVE_DEFAULTS: ActivityPreferences = ActivityPreferences {
    min_temperature: 50.0,
    max_temperature: 90.0,
    avoid_rain: false,
    avoid_snow: false,
};

const SOCIAL_DEFAULTS: ActivityPreferences = ActivityPreferences {
    min_temperature: 55.0,
    max_temperature: 90.0,
    avoid_rain: true,
    avoid_snow: true,
};

/// Activity category with its own default weather preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    /// Outdoor activities; also the fallback for unknown labels
    #[default]
    Outdoor,
    /// Mostly indoor creative activities
    Creative,
    /// Social gatherings, possibly outdoors
    Social,
}

impl ActivityCategory {
    /// Convert to the stored label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Outdoor => "outdoor",
            Self::Creative => "creative",
            Self::Social => "social",
        }
    }

    /// Parse a stored label; unknown labels map to `Outdoor`
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "creative" => Self::Creative,
            "social" => Self::Social,
            _ => Self::Outdoor,
        }
    }

    /// Default preferences for this category
    #[must_use]
    pub const fn defaults(self) -> ActivityPreferences {
        match self {
            Self::Outdoor => OUTDOOR_DEFAULTS,
            Self::Creative => CREATIVE_DEFAULTS,
            Self::Social => SOCIAL_DEFAULTS,
        }
    }
}

/// Resolve the effective preferences for a category label
///
/// Every field present in `overrides` replaces the category default. The
/// result is an independent value, so repeated calls never observe each
/// other's overrides.
#[must_use]
pub fn resolve_preferences(
    category: &str,
    overrides: Option<&PreferenceOverrides>,
) -> ActivityPreferences {
    let defaults = ActivityCategory::parse(category).defaults();
    overrides.map_or(defaults, |o| defaults.merged_with(o))
}
