// ABOUTME: Health check route for load balancers and uptime probes
// ABOUTME: Reports service identity and whether the activity catalog is reachable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::endpoints::HEALTH_CHECK;
use crate::constants::service_names::NEXT_GOOD_DAY;
use crate::resources::ServerResources;

/// Health probe body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy`, or `degraded` when the database cannot be queried
    pub status: String,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Entries in the activity catalog, absent when the database failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<i64>,
    /// RFC 3339 time of the probe
    pub timestamp: String,
}

/// Health routes
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(HEALTH_CHECK, get(Self::handle_health))
            .with_state(resources)
    }

    /// Handle GET /health
    ///
    /// Always 200 so probes can read the body; a failing catalog count only
    /// downgrades the status.
    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Json<HealthResponse> {
        let activities = match resources.database.activities().count().await {
            Ok(count) => Some(count),
            Err(e) => {
                warn!(error = %e, "Health check could not query the database");
                None
            }
        };

        Json(HealthResponse {
            status: if activities.is_some() { "healthy" } else { "degraded" }.to_owned(),
            service: NEXT_GOOD_DAY.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            activities,
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }
}
