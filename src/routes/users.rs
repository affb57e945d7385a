// ABOUTME: User routes: registration, profile lookup, activity selection and stored recommendations
// ABOUTME: Thin handlers that parse requests and delegate to the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::{CreateUserActivity, RecommendationWithActivity};
use crate::errors::{AppError, AppResult};
use crate::models::{Recommendation, User};
use crate::resources::ServerResources;
use crate::services::recommendations as recommendation_service;
use crate::services::users::{self as user_service, NewUser};

/// Registration body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Email address
    pub email: String,
    /// Age range label such as `25-34`
    pub age_range: String,
    /// Optional gender
    #[serde(default)]
    pub gender: Option<String>,
    /// Home latitude
    pub location_lat: f64,
    /// Home longitude
    pub location_lon: f64,
}

/// User profile as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id
    pub id: Uuid,
    /// Email address
    pub email: String,
    /// Age range label
    pub age_range: String,
    /// Gender, if given
    pub gender: Option<String>,
    /// Resolved home location name
    pub location_name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            age_range: user.age_range,
            gender: user.gender,
            location_name: user.location_name,
        }
    }
}

/// Activity selection body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserActivityRequest {
    /// Catalog entry to select
    pub activity_id: i64,
    /// Preferred start hour (0-24)
    #[serde(default)]
    pub preferred_time_start: Option<u32>,
    /// Preferred end hour (0-24)
    #[serde(default)]
    pub preferred_time_end: Option<u32>,
    /// Free-form preferred days
    #[serde(default)]
    pub preferred_days: Option<String>,
    /// Lower comfortable temperature (°F)
    #[serde(default)]
    pub min_temperature: Option<f64>,
    /// Upper comfortable temperature (°F)
    #[serde(default)]
    pub max_temperature: Option<f64>,
    /// Penalize rain, defaults to true
    #[serde(default)]
    pub avoid_rain: Option<bool>,
    /// Penalize snow, defaults to true
    #[serde(default)]
    pub avoid_snow: Option<bool>,
}

impl CreateUserActivityRequest {
    fn into_command(self) -> AppResult<CreateUserActivity> {
        for hour in [self.preferred_time_start, self.preferred_time_end]
            .into_iter()
            .flatten()
        {
            if hour > 24 {
                return Err(AppError::invalid_input(format!(
                    "Preferred hour must be between 0 and 24, got {hour}"
                )));
            }
        }

        Ok(CreateUserActivity {
            activity_id: self.activity_id,
            preferred_time_start: self.preferred_time_start,
            preferred_time_end: self.preferred_time_end,
            preferred_days: self.preferred_days,
            min_temperature: self.min_temperature,
            max_temperature: self.max_temperature,
            avoid_rain: self.avoid_rain.unwrap_or(true),
            avoid_snow: self.avoid_snow.unwrap_or(true),
        })
    }
}

/// One stored recommendation as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Recommendation id
    pub id: i64,
    /// Recommended day
    pub date: NaiveDate,
    /// Final score
    pub score: f64,
    /// Scoring notes
    pub explanation: String,
    /// Short weather summary
    pub weather_summary: String,
    /// Daily high temperature (°F)
    pub temperature: f64,
    /// Start of the suggested window
    pub preferred_time_start: u32,
    /// End of the suggested window
    pub preferred_time_end: u32,
    /// Activity name, present in per-user listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_name: Option<String>,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(rec: Recommendation) -> Self {
        Self {
            id: rec.id,
            date: rec.date,
            score: rec.score,
            explanation: rec.explanation,
            weather_summary: rec.weather_summary,
            temperature: rec.temperature,
            preferred_time_start: rec.preferred_time_start,
            preferred_time_end: rec.preferred_time_end,
            activity_name: None,
        }
    }
}

impl From<RecommendationWithActivity> for RecommendationResponse {
    fn from(entry: RecommendationWithActivity) -> Self {
        Self {
            activity_name: Some(entry.activity_name),
            ..Self::from(entry.recommendation)
        }
    }
}

/// Result of selecting an activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserActivityResponse {
    /// Stored selection id
    pub user_activity_id: i64,
    /// Best days, best first; empty when no forecast was available
    pub recommendations: Vec<RecommendationResponse>,
}

/// Query parameters for the per-user recommendation listing
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationsQuery {
    /// Only recommendations for this catalog entry
    pub activity_id: Option<i64>,
}

/// User routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users", post(Self::handle_create))
            .route("/api/users/:id", get(Self::handle_get))
            .route("/api/users/:id/activities", post(Self::handle_add_activity))
            .route(
                "/api/users/:id/recommendations",
                get(Self::handle_list_recommendations),
            )
            .with_state(resources)
    }

    /// Handle POST /api/users
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateUserRequest>,
    ) -> Result<Response, AppError> {
        let user = user_service::register_user(
            &resources,
            NewUser {
                email: body.email,
                age_range: body.age_range,
                gender: body.gender,
                location_lat: body.location_lat,
                location_lon: body.location_lon,
            },
        )
        .await?;

        Ok((StatusCode::OK, Json(UserResponse::from(user))).into_response())
    }

    /// Handle GET /api/users/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&id)?;
        let user = user_service::require_user(&resources, user_id).await?;
        Ok((StatusCode::OK, Json(UserResponse::from(user))).into_response())
    }

    /// Handle POST /api/users/:id/activities
    async fn handle_add_activity(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Json(body): Json<CreateUserActivityRequest>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&id)?;
        let command = body.into_command()?;
        let created =
            recommendation_service::create_user_activity(&resources, user_id, &command).await?;

        let response = UserActivityResponse {
            user_activity_id: created.user_activity.id,
            recommendations: created
                .recommendations
                .into_iter()
                .map(Into::into)
                .collect(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/users/:id/recommendations
    async fn handle_list_recommendations(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Query(query): Query<RecommendationsQuery>,
    ) -> Result<Response, AppError> {
        let user_id = parse_user_id(&id)?;
        let entries =
            recommendation_service::list_user_recommendations(&resources, user_id, query.activity_id)
                .await?;

        let response: Vec<RecommendationResponse> = entries.into_iter().map(Into::into).collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}

// An id that is not a UUID cannot name a stored user.
fn parse_user_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found("User"))
}
