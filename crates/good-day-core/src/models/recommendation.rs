// ABOUTME: Persisted recommendation and invitation message records
// ABOUTME: Recommendations store the chosen top-N days verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored recommended day for a user activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Row ID
    pub id: i64,
    /// User activity this day was ranked for
    pub user_activity_id: i64,
    /// Recommended date
    pub date: NaiveDate,
    /// Score at ranking time
    pub score: f64,
    /// Explanation text
    pub explanation: String,
    /// Weather summary text
    pub weather_summary: String,
    /// Temperature in °F
    pub temperature: f64,
    /// Precipitation probability in `[0, 1]`
    pub precipitation_probability: Option<f64>,
    /// Wind speed in mph
    pub wind_speed: Option<f64>,
    /// Window start hour at ranking time
    pub preferred_time_start: u32,
    /// Window end hour at ranking time
    pub preferred_time_end: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A generated invitation, stored but never sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Row ID
    pub id: i64,
    /// Sender
    pub user_id: Uuid,
    /// Invitee address
    pub recipient_email: Option<String>,
    /// Subject line
    pub subject: String,
    /// Body text
    pub body: String,
    /// Recommendation the invitation refers to
    pub recommendation_id: Option<i64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}
