// ABOUTME: Stored recommendation rows and the per-user listing joined with activity names
// ABOUTME: Rows are written only inside the user activity creation transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

use super::{hour_from_db, parse_date, parse_timestamp};
use crate::constants::display::UNKNOWN_ACTIVITY;
use crate::errors::{AppError, AppResult};
use crate::models::{Recommendation, ScoredDay};

/// A stored recommendation with the name of the activity it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationWithActivity {
    /// Stored row
    pub recommendation: Recommendation,
    /// Catalog id of the activity
    pub activity_id: i64,
    /// Catalog name, or a placeholder when the entry is gone
    pub activity_name: String,
}

/// Recommendation database operations
pub struct RecommendationsManager {
    pool: SqlitePool,
}

impl RecommendationsManager {
    /// Create a new recommendations manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a recommendation by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed
    pub async fn get(&self, id: i64) -> AppResult<Option<Recommendation>> {
        let row = sqlx::query(
            r"
            SELECT id, user_activity_id, date, score, explanation, weather_summary, temperature,
                   precipitation_probability, wind_speed, preferred_time_start, preferred_time_end, created_at
            FROM recommendations
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get recommendation: {e}")))?;

        row.as_ref().map(row_to_recommendation).transpose()
    }

    /// Every recommendation across a user's selections, best score first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        activity_id: Option<i64>,
    ) -> AppResult<Vec<RecommendationWithActivity>> {
        let rows = sqlx::query(
            r"
            SELECT r.id, r.user_activity_id, r.date, r.score, r.explanation, r.weather_summary, r.temperature,
                   r.precipitation_probability, r.wind_speed, r.preferred_time_start, r.preferred_time_end,
                   r.created_at, ua.activity_id, a.name AS activity_name
            FROM recommendations r
            JOIN user_activities ua ON ua.id = r.user_activity_id
            LEFT JOIN activities a ON a.id = ua.activity_id
            WHERE ua.user_id = $1 AND ($2 IS NULL OR ua.activity_id = $2)
            ORDER BY r.score DESC, r.id ASC
            ",
        )
        .bind(user_id.to_string())
        .bind(activity_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list recommendations: {e}")))?;

        rows.iter()
            .map(|row| {
                let name: Option<String> = row.get("activity_name");
                Ok(RecommendationWithActivity {
                    recommendation: row_to_recommendation(row)?,
                    activity_id: row.get("activity_id"),
                    activity_name: name.unwrap_or_else(|| UNKNOWN_ACTIVITY.to_owned()),
                })
            })
            .collect()
    }
}

pub(super) async fn insert_recommendation(
    tx: &mut Transaction<'_, Sqlite>,
    user_activity_id: i64,
    day: &ScoredDay,
    now: DateTime<Utc>,
) -> AppResult<Recommendation> {
    let result = sqlx::query(
        r"
        INSERT INTO recommendations (
            user_activity_id, date, score, explanation, weather_summary, temperature,
            precipitation_probability, wind_speed, preferred_time_start, preferred_time_end, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        ",
    )
    .bind(user_activity_id)
    .bind(day.date.format("%Y-%m-%d").to_string())
    .bind(day.score)
    .bind(&day.explanation)
    .bind(&day.weather_summary)
    .bind(day.temperature)
    .bind(day.precipitation_probability)
    .bind(day.wind_speed)
    .bind(i64::from(day.preferred_time_start))
    .bind(i64::from(day.preferred_time_end))
    .bind(now.to_rfc3339())
    .execute(&mut **tx)
    .await
    .map_err(|e| AppError::database(format!("Failed to create recommendation: {e}")))?;

    Ok(Recommendation {
        id: result.last_insert_rowid(),
        user_activity_id,
        date: day.date,
        score: day.score,
        explanation: day.explanation.clone(),
        weather_summary: day.weather_summary.clone(),
        temperature: day.temperature,
        precipitation_probability: Some(day.precipitation_probability),
        wind_speed: Some(day.wind_speed),
        preferred_time_start: day.preferred_time_start,
        preferred_time_end: day.preferred_time_end,
        created_at: now,
    })
}

fn row_to_recommendation(row: &SqliteRow) -> AppResult<Recommendation> {
    let date: String = row.get("date");
    let created_at: String = row.get("created_at");
    let start: i64 = row.get("preferred_time_start");
    let end: i64 = row.get("preferred_time_end");

    Ok(Recommendation {
        id: row.get("id"),
        user_activity_id: row.get("user_activity_id"),
        date: parse_date(&date)?,
        score: row.get("score"),
        explanation: row.get("explanation"),
        weather_summary: row.get("weather_summary"),
        temperature: row.get("temperature"),
        precipitation_probability: row.get("precipitation_probability"),
        wind_speed: row.get("wind_speed"),
        preferred_time_start: hour_from_db(start)?,
        preferred_time_end: hour_from_db(end)?,
        created_at: parse_timestamp(&created_at)?,
    })
}
