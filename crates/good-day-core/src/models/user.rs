// ABOUTME: User profile model with demographic and location fields
// ABOUTME: Users are identified by a UUID and unique email address
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Email address, unique across users
    pub email: String,
    /// Age range label such as `"25-34"` or `"55+"`
    pub age_range: String,
    /// Optional gender
    pub gender: Option<String>,
    /// Home latitude
    pub location_lat: f64,
    /// Home longitude
    pub location_lon: f64,
    /// Resolved display name of the location
    pub location_name: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh ID
    #[must_use]
    pub fn new(
        email: String,
        age_range: String,
        gender: Option<String>,
        location_lat: f64,
        location_lon: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            age_range,
            gender,
            location_lat,
            location_lon,
            location_name: None,
            created_at: now,
            updated_at: now,
        }
    }
}
