// ABOUTME: SQLite persistence for users, activities, user activities, recommendations and messages
// ABOUTME: Owns the connection pool, idempotent migrations and the activity catalog seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

//! # Database Management
//!
//! One [`Database`] owns the pool. Per-table managers borrow a clone of the
//! pool and expose typed operations returning [`AppResult`].

mod activities;
mod messages;
mod recommendations;
mod user_activities;
mod users;

pub use activities::{default_catalog, ActivitiesManager, NewActivity};
pub use messages::{MessagesManager, NewMessage};
pub use recommendations::{RecommendationWithActivity, RecommendationsManager};
pub use user_activities::{CreateUserActivity, UserActivitiesManager};
pub use users::UsersManager;

use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::DatabaseUrl;
use crate::errors::{AppError, AppResult};

/// Database handle shared by all request handlers
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the configured database, creating the parent directory of a file database
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the connection fails
    /// or migrations fail
    pub async fn open(url: &DatabaseUrl) -> Result<Self> {
        if let DatabaseUrl::SQLite { path } = url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
            }
        }
        Self::new(&url.to_connection_string()).await
    }

    /// Connect, migrate and seed the activity catalog
    ///
    /// In-memory databases are pinned to a single connection so every query
    /// sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails or migrations fail
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL {database_url}"))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .context("Failed to connect to database")?;

        let db = Self { pool };
        db.migrate().await?;

        let seeded = db.activities().seed_defaults().await?;
        if seeded > 0 {
            info!(count = seeded, "Seeded activity catalog");
        }
        Ok(db)
    }

    /// Underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Users table operations
    #[must_use]
    pub fn users(&self) -> UsersManager {
        UsersManager::new(self.pool.clone())
    }

    /// Activity catalog operations
    #[must_use]
    pub fn activities(&self) -> ActivitiesManager {
        ActivitiesManager::new(self.pool.clone())
    }

    /// User activity operations
    #[must_use]
    pub fn user_activities(&self) -> UserActivitiesManager {
        UserActivitiesManager::new(self.pool.clone())
    }

    /// Stored recommendation operations
    #[must_use]
    pub fn recommendations(&self) -> RecommendationsManager {
        RecommendationsManager::new(self.pool.clone())
    }

    /// Stored invitation operations
    #[must_use]
    pub fn messages(&self) -> MessagesManager {
        MessagesManager::new(self.pool.clone())
    }

    /// Create all tables and indexes
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_users().await?;
        self.migrate_activities().await?;
        self.migrate_user_activities().await?;
        self.migrate_recommendations().await?;
        self.migrate_messages().await?;
        debug!("Database migrations complete");
        Ok(())
    }

    async fn migrate_users(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                age_range TEXT NOT NULL,
                gender TEXT,
                location_lat REAL NOT NULL,
                location_lon REAL NOT NULL,
                location_name TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn migrate_activities(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS activities (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT,
                category TEXT NOT NULL,
                weather_preferences TEXT,
                min_age INTEGER,
                max_age INTEGER,
                gender_preference TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn migrate_user_activities(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS user_activities (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                activity_id INTEGER NOT NULL REFERENCES activities(id),
                preferred_time_start INTEGER,
                preferred_time_end INTEGER,
                preferred_days TEXT,
                min_temperature REAL,
                max_temperature REAL,
                avoid_rain BOOLEAN NOT NULL DEFAULT 1,
                avoid_snow BOOLEAN NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_user_activities_user ON user_activities(user_id)",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn migrate_recommendations(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recommendations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_activity_id INTEGER NOT NULL REFERENCES user_activities(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                score REAL NOT NULL,
                explanation TEXT NOT NULL,
                weather_summary TEXT NOT NULL,
                temperature REAL NOT NULL,
                precipitation_probability REAL,
                wind_speed REAL,
                preferred_time_start INTEGER NOT NULL,
                preferred_time_end INTEGER NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_recommendations_user_activity ON recommendations(user_activity_id)",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn migrate_messages(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                recipient_email TEXT,
                subject TEXT NOT NULL,
                body TEXT NOT NULL,
                recommendation_id INTEGER REFERENCES recommendations(id) ON DELETE SET NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

pub(crate) fn parse_uuid(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| AppError::internal(format!("Invalid UUID: {e}")))
}

pub(crate) fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid datetime: {e}")))
}

pub(crate) fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::internal(format!("Invalid date: {e}")))
}

pub(crate) fn hour_from_db(value: i64) -> AppResult<u32> {
    u32::try_from(value).map_err(|e| AppError::internal(format!("Invalid hour {value}: {e}")))
}
