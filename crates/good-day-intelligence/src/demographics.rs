// ABOUTME: Demographic filter narrowing the activity catalog to a user's age and gender
// ABOUTME: Parses age labels such as 25-34 and 55+ into inclusive bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use good_day_core::models::Activity;
use serde::{Deserialize, Serialize};

use crate::constants::demographics::{FALLBACK_MAX_AGE, FALLBACK_MIN_AGE, OPEN_ENDED_MAX_AGE};

/// Inclusive age bounds parsed from an age label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBounds {
    /// Youngest age in the bracket
    pub min: u32,
    /// Oldest age in the bracket
    pub max: u32,
}

impl AgeBounds {
    /// Parse a label; unparseable labels yield `18..=65`
    #[must_use]
    pub fn parse(label: &str) -> Self {
        Self::try_parse(label).unwrap_or(Self {
            min: FALLBACK_MIN_AGE,
            max: FALLBACK_MAX_AGE,
        })
    }

    fn try_parse(label: &str) -> Option<Self> {
        let normalized = label.replace('+', &format!("-{OPEN_ENDED_MAX_AGE}"));
        let mut parts = normalized.split('-');
        let min = parts.next()?.trim().parse().ok()?;
        let max = match parts.next() {
            Some(upper) => upper.trim().parse().ok()?,
            None => OPEN_ENDED_MAX_AGE,
        };
        Some(Self { min, max })
    }

    /// Whether an activity's age targeting admits this bracket
    #[must_use]
    pub fn admits(&self, activity: &Activity) -> bool {
        activity.min_age.is_none_or(|min_age| self.min >= min_age)
            && activity.max_age.is_none_or(|max_age| self.max <= max_age)
    }
}

/// Keep the activities whose targeting matches the user's demographics
///
/// An activity is dropped when its `min_age` exceeds the bracket's lower
/// bound, when its `max_age` is below the bracket's upper bound, or when both
/// the user and the activity name a gender and they differ.
#[must_use]
pub fn filter_by_demographics(
    activities: Vec<Activity>,
    age_range: &str,
    gender: Option<&str>,
) -> Vec<Activity> {
    let bounds = AgeBounds::parse(age_range);
    let gender = gender.filter(|g| !g.is_empty());

    activities
        .into_iter()
        .filter(|activity| bounds.admits(activity))
        .filter(|activity| {
            match (gender, activity.gender_preference.as_deref()) {
                (Some(user), Some(target)) if !target.is_empty() => user == target,
                _ => true,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(
        id: i64,
        min_age: Option<u32>,
        max_age: Option<u32>,
        gender: Option<&str>,
    ) -> Activity {
        Activity {
            id,
            name: format!("Activity {id}"),
            description: None,
            category: "outdoor".to_owned(),
            weather_preferences: None,
            min_age,
            max_age,
            gender_preference: gender.map(str::to_owned),
        }
    }

    #[test]
    fn test_age_bounds_parsing() {
        assert_eq!(AgeBounds::parse("25-34"), AgeBounds { min: 25, max: 34 });
        assert_eq!(AgeBounds::parse("55+"), AgeBounds { min: 55, max: 100 });
        assert_eq!(AgeBounds::parse("40"), AgeBounds { min: 40, max: 100 });
        assert_eq!(AgeBounds::parse("abc"), AgeBounds { min: 18, max: 65 });
        assert_eq!(AgeBounds::parse(""), AgeBounds { min: 18, max: 65 });
        assert_eq!(AgeBounds::parse("25-x"), AgeBounds { min: 18, max: 65 });
    }

    #[test]
    fn test_filter_by_age() {
        let catalog = vec![
            activity(1, None, None, None),
            activity(2, Some(30), None, None),
            activity(3, None, Some(50), None),
        ];

        let young: Vec<i64> = filter_by_demographics(catalog.clone(), "18-24", None)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(young, vec![1, 3]);

        let senior: Vec<i64> = filter_by_demographics(catalog, "55+", None)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(senior, vec![1, 2]);
    }

    #[test]
    fn test_filter_by_gender() {
        let catalog = vec![
            activity(1, None, None, Some("female")),
            activity(2, None, None, None),
        ];

        let ids: Vec<i64> = filter_by_demographics(catalog.clone(), "25-34", Some("male"))
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![2]);

        // Without a user gender nothing is excluded on gender
        assert_eq!(filter_by_demographics(catalog, "25-34", None).len(), 2);
    }
}
