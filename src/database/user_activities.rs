// ABOUTME: Per-user activity selections with their preference overrides
// ABOUTME: Creation stores the selection and its ranked days in one transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::recommendations::insert_recommendation;
use super::{hour_from_db, parse_timestamp, parse_uuid};
use crate::errors::{AppError, AppResult};
use crate::models::{PreferenceOverrides, Recommendation, ScoredDay, UserActivity};

/// Fields a client supplies when selecting an activity
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserActivity {
    /// Catalog entry being selected
    pub activity_id: i64,
    /// Preferred start hour
    pub preferred_time_start: Option<u32>,
    /// Preferred end hour
    pub preferred_time_end: Option<u32>,
    /// Free-form preferred days
    pub preferred_days: Option<String>,
    /// Lower comfortable temperature (°F)
    pub min_temperature: Option<f64>,
    /// Upper comfortable temperature (°F)
    pub max_temperature: Option<f64>,
    /// Penalize rainy days
    pub avoid_rain: bool,
    /// Penalize snowy days
    pub avoid_snow: bool,
}

impl CreateUserActivity {
    /// Preference overrides applied on top of the category defaults
    #[must_use]
    pub const fn overrides(&self) -> PreferenceOverrides {
        PreferenceOverrides {
            min_temperature: self.min_temperature,
            max_temperature: self.max_temperature,
            avoid_rain: Some(self.avoid_rain),
            avoid_snow: Some(self.avoid_snow),
        }
    }
}

/// User activity database operations
pub struct UserActivitiesManager {
    pool: SqlitePool,
}

impl UserActivitiesManager {
    /// Create a new user activities manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a selection together with its ranked days
    ///
    /// Either everything is written or nothing is.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; the transaction is rolled back
    pub async fn create_with_recommendations(
        &self,
        user_id: Uuid,
        request: &CreateUserActivity,
        days: &[ScoredDay],
    ) -> AppResult<(UserActivity, Vec<Recommendation>)> {
        let now = Utc::now();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let result = sqlx::query(
            r"
            INSERT INTO user_activities (
                user_id, activity_id, preferred_time_start, preferred_time_end, preferred_days,
                min_temperature, max_temperature, avoid_rain, avoid_snow, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(user_id.to_string())
        .bind(request.activity_id)
        .bind(request.preferred_time_start.map(i64::from))
        .bind(request.preferred_time_end.map(i64::from))
        .bind(&request.preferred_days)
        .bind(request.min_temperature)
        .bind(request.max_temperature)
        .bind(request.avoid_rain)
        .bind(request.avoid_snow)
        .bind(now.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to create user activity: {e}")))?;

        let user_activity = UserActivity {
            id: result.last_insert_rowid(),
            user_id,
            activity_id: request.activity_id,
            preferred_time_start: request.preferred_time_start,
            preferred_time_end: request.preferred_time_end,
            preferred_days: request.preferred_days.clone(),
            min_temperature: request.min_temperature,
            max_temperature: request.max_temperature,
            avoid_rain: request.avoid_rain,
            avoid_snow: request.avoid_snow,
            created_at: now,
        };

        let mut recommendations = Vec::with_capacity(days.len());
        for day in days {
            recommendations.push(insert_recommendation(&mut tx, user_activity.id, day, now).await?);
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit user activity: {e}")))?;

        Ok((user_activity, recommendations))
    }

    /// Get a selection by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed
    pub async fn get(&self, id: i64) -> AppResult<Option<UserActivity>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, activity_id, preferred_time_start, preferred_time_end, preferred_days,
                   min_temperature, max_temperature, avoid_rain, avoid_snow, created_at
            FROM user_activities
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user activity: {e}")))?;

        row.as_ref().map(row_to_user_activity).transpose()
    }

    /// All selections of a user, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed
    pub async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<UserActivity>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, activity_id, preferred_time_start, preferred_time_end, preferred_days,
                   min_temperature, max_temperature, avoid_rain, avoid_snow, created_at
            FROM user_activities
            WHERE user_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list user activities: {e}")))?;

        rows.iter().map(row_to_user_activity).collect()
    }
}

fn row_to_user_activity(row: &SqliteRow) -> AppResult<UserActivity> {
    let user_id: String = row.get("user_id");
    let created_at: String = row.get("created_at");
    let start: Option<i64> = row.get("preferred_time_start");
    let end: Option<i64> = row.get("preferred_time_end");

    Ok(UserActivity {
        id: row.get("id"),
        user_id: parse_uuid(&user_id)?,
        activity_id: row.get("activity_id"),
        preferred_time_start: start.map(hour_from_db).transpose()?,
        preferred_time_end: end.map(hour_from_db).transpose()?,
        preferred_days: row.get("preferred_days"),
        min_temperature: row.get("min_temperature"),
        max_temperature: row.get("max_temperature"),
        avoid_rain: row.get("avoid_rain"),
        avoid_snow: row.get("avoid_snow"),
        created_at: parse_timestamp(&created_at)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_carry_request_bounds_and_flags() {
        let request = CreateUserActivity {
            activity_id: 1,
            preferred_time_start: None,
            preferred_time_end: None,
            preferred_days: None,
            min_temperature: Some(90.0),
            max_temperature: None,
            avoid_rain: false,
            avoid_snow: true,
        };

        let overrides = request.overrides();

        assert_eq!(overrides.min_temperature, Some(90.0));
        assert_eq!(overrides.max_temperature, None);
        assert_eq!(overrides.avoid_rain, Some(false));
        assert_eq!(overrides.avoid_snow, Some(true));
        assert!(!overrides.is_empty());
    }
}
