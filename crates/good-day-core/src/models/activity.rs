// ABOUTME: Activity catalog entries and per-user activity selections
// ABOUTME: A user activity carries the preference overrides used for ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ActivityPreferences;

/// Catalog activity a user can pick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Catalog ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Short description
    pub description: Option<String>,
    /// Category label (`outdoor`, `creative`, `social`)
    pub category: String,
    /// Ideal weather for this specific activity
    pub weather_preferences: Option<ActivityPreferences>,
    /// Youngest age the activity targets
    pub min_age: Option<u32>,
    /// Oldest age the activity targets
    pub max_age: Option<u32>,
    /// Targeted gender, `None` for everyone
    pub gender_preference: Option<String>,
}

/// An activity selected by a user, with personal overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivity {
    /// Row ID
    pub id: i64,
    /// Owning user
    pub user_id: Uuid,
    /// Catalog activity
    pub activity_id: i64,
    /// Explicit window start hour
    pub preferred_time_start: Option<u32>,
    /// Explicit window end hour
    pub preferred_time_end: Option<u32>,
    /// Comma-separated weekday numbers, stored verbatim
    pub preferred_days: Option<String>,
    /// Temperature lower bound override
    pub min_temperature: Option<f64>,
    /// Temperature upper bound override
    pub max_temperature: Option<f64>,
    /// Rain avoidance
    pub avoid_rain: bool,
    /// Snow avoidance
    pub avoid_snow: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl UserActivity {
    /// Explicit window, falling back to the given hours for missing ends
    ///
    /// Only an absent hour falls back; a stored `0` is midnight.
    #[must_use]
    pub fn time_window_or(&self, default_start: u32, default_end: u32) -> (u32, u32) {
        (
            self.preferred_time_start.unwrap_or(default_start),
            self.preferred_time_end.unwrap_or(default_end),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(start: Option<u32>, end: Option<u32>) -> UserActivity {
        UserActivity {
            id: 1,
            user_id: Uuid::new_v4(),
            activity_id: 1,
            preferred_time_start: start,
            preferred_time_end: end,
            preferred_days: None,
            min_temperature: None,
            max_temperature: None,
            avoid_rain: true,
            avoid_snow: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_missing_hours_fall_back() {
        assert_eq!(selection(None, None).time_window_or(12, 18), (12, 18));
        assert_eq!(selection(Some(9), None).time_window_or(12, 18), (9, 18));
    }

    #[test]
    fn test_midnight_start_is_kept() {
        assert_eq!(selection(Some(0), Some(6)).time_window_or(12, 18), (0, 6));
    }
}
