// ABOUTME: Activity catalog persistence and the built-in catalog seed
// ABOUTME: Weather preferences are stored as a JSON document per activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::errors::{AppError, AppResult};
use crate::models::{Activity, ActivityPreferences};

/// Catalog entry before it has an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    /// Display name
    pub name: String,
    /// Short description
    pub description: Option<String>,
    /// Category label (outdoor, creative, social)
    pub category: String,
    /// Preferences stored alongside the entry
    pub weather_preferences: Option<ActivityPreferences>,
    /// Minimum suitable age
    pub min_age: Option<u32>,
    /// Maximum suitable age
    pub max_age: Option<u32>,
    /// Gender the activity targets, if any
    pub gender_preference: Option<String>,
}

impl NewActivity {
    fn seed(
        name: &str,
        description: &str,
        category: &str,
        temperatures: (f64, f64),
        avoid_rain: bool,
        avoid_snow: bool,
    ) -> Self {
        Self {
            name: name.to_owned(),
            description: Some(description.to_owned()),
            category: category.to_owned(),
            weather_preferences: Some(ActivityPreferences {
                min_temperature: temperatures.0,
                max_temperature: temperatures.1,
                avoid_rain,
                avoid_snow,
            }),
            min_age: None,
            max_age: None,
            gender_preference: None,
        }
    }
}

/// Catalog loaded into an empty database on first start
#[must_use]
pub fn default_catalog() -> Vec<NewActivity> {
    vec![
        NewActivity::seed("Hiking", "Explore nature trails and enjoy the outdoors", "outdoor", (50.0, 85.0), true, true),
        NewActivity::seed("Photography", "Capture beautiful moments and scenes", "creative", (45.0, 90.0), false, false),
        NewActivity::seed("Cycling", "Go for a bike ride", "outdoor", (55.0, 85.0), true, true),
        NewActivity::seed("Picnic", "Enjoy a meal outdoors", "social", (65.0, 85.0), true, true),
        NewActivity::seed("Painting", "Express yourself through art", "creative", (50.0, 90.0), false, false),
        NewActivity::seed("Reading", "Enjoy a good book", "creative", (50.0, 90.0), false, false),
        NewActivity::seed("Running", "Go for a jog or run", "outdoor", (45.0, 80.0), true, true),
        NewActivity::seed("Beach Day", "Relax by the water", "outdoor", (75.0, 95.0), true, true),
        NewActivity::seed("Coffee Shop Work", "Productive time at a local coffee shop", "creative", (40.0, 100.0), false, true),
        NewActivity::seed("Gardening", "Tend to plants and garden", "outdoor", (55.0, 85.0), true, true),
        NewActivity::seed("Yoga", "Practice yoga outdoors", "outdoor", (60.0, 85.0), true, true),
    ]
}

/// Activity catalog database operations
pub struct ActivitiesManager {
    pool: SqlitePool,
}

impl ActivitiesManager {
    /// Create a new activities manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a catalog entry and return it with its assigned id
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails
    pub async fn create(&self, activity: &NewActivity) -> AppResult<Activity> {
        let preferences = activity
            .weather_preferences
            .map(|p| serde_json::to_string(&p))
            .transpose()?;

        let result = sqlx::query(
            r"
            INSERT INTO activities (name, description, category, weather_preferences, min_age, max_age, gender_preference)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(&activity.name)
        .bind(&activity.description)
        .bind(&activity.category)
        .bind(preferences)
        .bind(activity.min_age.map(i64::from))
        .bind(activity.max_age.map(i64::from))
        .bind(&activity.gender_preference)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create activity: {e}")))?;

        Ok(Activity {
            id: result.last_insert_rowid(),
            name: activity.name.clone(),
            description: activity.description.clone(),
            category: activity.category.clone(),
            weather_preferences: activity.weather_preferences,
            min_age: activity.min_age,
            max_age: activity.max_age,
            gender_preference: activity.gender_preference.clone(),
        })
    }

    /// Load [`default_catalog`] when the table is empty, returning how many rows were added
    ///
    /// # Errors
    ///
    /// Returns an error if the count or any insert fails
    pub async fn seed_defaults(&self) -> AppResult<usize> {
        if self.count().await? > 0 {
            return Ok(0);
        }
        let catalog = default_catalog();
        for activity in &catalog {
            self.create(activity).await?;
        }
        Ok(catalog.len())
    }

    /// Number of catalog entries
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM activities")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count activities: {e}")))
    }

    /// Every catalog entry in id order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed
    pub async fn list(&self) -> AppResult<Vec<Activity>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, description, category, weather_preferences, min_age, max_age, gender_preference
            FROM activities
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list activities: {e}")))?;

        rows.iter().map(row_to_activity).collect()
    }

    /// Get a catalog entry by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed
    pub async fn get(&self, id: i64) -> AppResult<Option<Activity>> {
        let row = sqlx::query(
            r"
            SELECT id, name, description, category, weather_preferences, min_age, max_age, gender_preference
            FROM activities
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get activity: {e}")))?;

        row.as_ref().map(row_to_activity).transpose()
    }
}

fn row_to_activity(row: &SqliteRow) -> AppResult<Activity> {
    let preferences: Option<String> = row.get("weather_preferences");
    let weather_preferences = preferences
        .as_deref()
        .map(serde_json::from_str::<ActivityPreferences>)
        .transpose()?;
    let min_age: Option<i64> = row.get("min_age");
    let max_age: Option<i64> = row.get("max_age");

    Ok(Activity {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        category: row.get("category"),
        weather_preferences,
        min_age: min_age.map(age_from_db).transpose()?,
        max_age: max_age.map(age_from_db).transpose()?,
        gender_preference: row.get("gender_preference"),
    })
}

fn age_from_db(value: i64) -> AppResult<u32> {
    u32::try_from(value).map_err(|e| AppError::internal(format!("Invalid age {value}: {e}")))
}
