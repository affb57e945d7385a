// ABOUTME: Availability estimator deriving default time windows from age group and weekday
// ABOUTME: Unknown age labels use the 25-34 row of the table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// An `[start_hour, end_hour]` window on the 24-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// First hour of the window
    pub start_hour: u32,
    /// Last hour of the window
    pub end_hour: u32,
}

impl TimeWindow {
    /// Create a window
    #[must_use]
    pub const fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }
}

/// Age bracket used to pick default availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AgeGroup {
    /// 18 to 24
    #[serde(rename = "18-24")]
    From18To24,
    /// 25 to 34; fallback for unrecognized labels
    #[default]
    #[serde(rename = "25-34")]
    From25To34,
    /// 35 to 44
    #[serde(rename = "35-44")]
    From35To44,
    /// 45 to 54
    #[serde(rename = "45-54")]
    From45To54,
    /// 55 and over
    #[serde(rename = "55+")]
    From55,
}

impl AgeGroup {
    /// Convert to the stored label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::From18To24 => "18-24",
            Self::From25To34 => "25-34",
            Self::From35To44 => "35-44",
            Self::From45To54 => "45-54",
            Self::From55 => "55+",
        }
    }

    /// Parse a label; anything unrecognized maps to `25-34`
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "18-24" => Self::From18To24,
            "35-44" => Self::From35To44,
            "45-54" => Self::From45To54,
            "55+" => Self::From55,
            _ => Self::From25To34,
        }
    }

    /// Default window on Monday through Friday
    #[must_use]
    pub const fn weekday_hours(self) -> TimeWindow {
        match self {
            Self::From18To24 => TimeWindow::new(17, 22),
            Self::From25To34 => TimeWindow::new(18, 21),
            Self::From35To44 | Self::From45To54 => TimeWindow::new(17, 20),
            Self::From55 => TimeWindow::new(10, 18),
        }
    }

    /// Default window on Saturday and Sunday
    #[must_use]
    pub const fn weekend_hours(self) -> TimeWindow {
        match self {
            Self::From18To24 => TimeWindow::new(10, 22),
            Self::From25To34 => TimeWindow::new(9, 21),
            Self::From35To44 => TimeWindow::new(8, 20),
            Self::From45To54 => TimeWindow::new(8, 19),
            Self::From55 => TimeWindow::new(9, 18),
        }
    }
}

/// True on Saturday and Sunday
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Default availability window for an age label on a given date
#[must_use]
pub fn default_window(age_range: &str, date: NaiveDate) -> TimeWindow {
    let group = AgeGroup::parse(age_range);
    if is_weekend(date) {
        group.weekend_hours()
    } else {
        group.weekday_hours()
    }
}
