// ABOUTME: Scoring weights, thresholds and bonuses for the day-scoring engine
// ABOUTME: Grouped by scoring term so each rule reads against its own numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

/// Overall score bounds
pub mod score_bounds {
    /// Neutral starting score
    pub const BASE_SCORE: f64 = 5.0;
    /// Lowest score after clamping
    pub const MIN_SCORE: f64 = 1.0;
    /// Highest score after clamping
    pub const MAX_SCORE: f64 = 10.0;
}

/// Temperature term
pub mod temperature {
    /// Bonus for a temperature inside the ideal band
    pub const IDEAL_BONUS: f64 = 3.0;
    /// Degrees outside the band that cost one point
    pub const DEGREES_PER_POINT: f64 = 10.0;
}

/// Precipitation term
pub mod precipitation {
    /// Probability above which rain is likely
    pub const HIGH_CHANCE_THRESHOLD: f64 = 0.5;
    /// Penalty per unit of probability above the high threshold
    pub const HIGH_CHANCE_WEIGHT: f64 = 4.0;
    /// Probability above which rain is possible
    pub const SOME_CHANCE_THRESHOLD: f64 = 0.2;
    /// Penalty per unit of probability above the some-chance threshold
    pub const SOME_CHANCE_WEIGHT: f64 = 2.0;
    /// Probability below which skies count as clear
    pub const CLEAR_SKIES_THRESHOLD: f64 = 0.1;
    /// Bonus for clear skies
    pub const CLEAR_SKIES_BONUS: f64 = 1.0;
}

/// Wind term
pub mod wind {
    /// Wind speed in mph above which a penalty applies
    pub const CALM_LIMIT_MPH: f64 = 15.0;
    /// Mph above the limit that cost one point
    pub const MPH_PER_POINT: f64 = 10.0;
    /// Largest wind penalty
    pub const MAX_PENALTY: f64 = 2.0;
}

/// Quality label thresholds, applied to the clamped score
pub mod quality {
    /// Lowest score labelled "Perfect"
    pub const PERFECT: f64 = 8.0;
    /// Lowest score labelled "Great"
    pub const GREAT: f64 = 6.0;
    /// Lowest score labelled "Good"
    pub const GOOD: f64 = 4.0;
}

/// Availability adjustments
pub mod availability {
    /// Added to the clamped score on Saturdays and Sundays
    pub const WEEKEND_BONUS: f64 = 0.5;
    /// Note appended for weekend days
    pub const WEEKEND_NOTE: &str = "Weekend availability";
    /// Note appended for weekdays
    pub const WEEKDAY_NOTE: &str = "Evening availability";
}

/// Weather summary thresholds on precipitation probability
pub mod summary {
    /// Above this the day is "Rainy"
    pub const RAINY: f64 = 0.7;
    /// Above this the day has a "Chance of rain"
    pub const CHANCE_OF_RAIN: f64 = 0.4;
    /// Above this the day is "Partly cloudy"
    pub const PARTLY_CLOUDY: f64 = 0.2;
}

/// Demographic parsing fallbacks
pub mod demographics {
    /// Upper age used for open-ended labels such as `55+`
    pub const OPEN_ENDED_MAX_AGE: u32 = 100;
    /// Lower bound used when an age label cannot be parsed
    pub const FALLBACK_MIN_AGE: u32 = 18;
    /// Upper bound used when an age label cannot be parsed
    pub const FALLBACK_MAX_AGE: u32 = 65;
}
