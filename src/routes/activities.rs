// ABOUTME: Activity catalog routes with optional demographic filtering
// ABOUTME: GET /api/activities returns id, name, description and category per entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use good_day_intelligence::filter_by_demographics;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Activity;
use crate::resources::ServerResources;

/// Query parameters for the catalog listing
#[derive(Debug, Default, Deserialize)]
pub struct ActivitiesQuery {
    /// Filter by this age range label
    pub age_range: Option<String>,
    /// Filter by gender (only applied together with `age_range`)
    pub gender: Option<String>,
}

/// Catalog entry as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityResponse {
    /// Catalog id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Short description
    pub description: Option<String>,
    /// Category label
    pub category: String,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name,
            description: activity.description,
            category: activity.category,
        }
    }
}

/// Activity catalog routes
pub struct ActivityRoutes;

impl ActivityRoutes {
    /// Create the catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/activities", get(Self::handle_list))
            .with_state(resources)
    }

    /// Handle GET /api/activities
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ActivitiesQuery>,
    ) -> Result<Response, AppError> {
        let mut activities = resources.database.activities().list().await?;

        if let Some(age_range) = query.age_range.as_deref() {
            activities = filter_by_demographics(activities, age_range, query.gender.as_deref());
        }

        let response: Vec<ActivityResponse> = activities.into_iter().map(Into::into).collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
