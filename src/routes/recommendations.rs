// ABOUTME: Routes deriving artifacts from a stored recommendation
// ABOUTME: Invitation text is stored as a message; calendar files are generated on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::recommendations as recommendation_service;
use crate::services::users::validate_email;

/// Invitation body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteRequest {
    /// Must match the path id when present
    #[serde(default)]
    pub recommendation_id: Option<i64>,
    /// Who the invitation is addressed to
    pub recipient_email: String,
}

/// Stored invitation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteResponse {
    /// Message id
    pub id: i64,
    /// Subject line
    pub subject: String,
    /// Body text
    pub body: String,
}

/// Calendar download
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// iCalendar text
    pub ics_content: String,
    /// Suggested filename
    pub filename: String,
}

/// Recommendation artifact routes
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create the artifact routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recommendations/:id/invite", post(Self::handle_invite))
            .route("/api/recommendations/:id/calendar", get(Self::handle_calendar))
            .with_state(resources)
    }

    /// Handle POST /api/recommendations/:id/invite
    async fn handle_invite(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Json(body): Json<InviteRequest>,
    ) -> Result<Response, AppError> {
        if body.recommendation_id.is_some_and(|body_id| body_id != id) {
            return Err(AppError::invalid_input(
                "recommendation_id does not match the path",
            ));
        }
        validate_email(&body.recipient_email)?;

        let message =
            recommendation_service::create_invitation(&resources, id, Some(body.recipient_email))
                .await?;

        let response = InviteResponse {
            id: message.id,
            subject: message.subject,
            body: message.body,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/recommendations/:id/calendar
    async fn handle_calendar(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let file = recommendation_service::calendar_file(&resources, id).await?;
        let response = CalendarResponse {
            ics_content: file.ics_content,
            filename: file.filename,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
