// ABOUTME: Recommendation generation for a user's activity selection and derived artifacts
// ABOUTME: Fetches the forecast, ranks it and persists the best days with the selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

//! # Recommendation Service
//!
//! Glue between the scoring engine, the forecast provider and the database.
//! A provider failure degrades to an empty forecast so the selection is still
//! stored and the client receives an empty recommendation list.

use chrono::Utc;
use good_day_intelligence::top_recommendations;
use tracing::{error, info};
use uuid::Uuid;

use super::users::require_user;
use crate::artifacts::{generate_ics, generate_invitation, ics_filename, PlannedOuting};
use crate::constants::recommendations::{DEFAULT_WINDOW_END_HOUR, DEFAULT_WINDOW_START_HOUR};
use crate::database::{CreateUserActivity, NewMessage, RecommendationWithActivity};
use crate::errors::{AppError, AppResult};
use crate::models::{
    Activity, DailyWeatherObservation, Message, Recommendation, User, UserActivity,
};
use crate::resources::ServerResources;

/// A stored selection and the days chosen for it
#[derive(Debug, Clone)]
pub struct UserActivityRecommendations {
    /// Stored selection
    pub user_activity: UserActivity,
    /// Persisted top days, best first
    pub recommendations: Vec<Recommendation>,
}

/// Calendar download for a recommendation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFile {
    /// iCalendar text
    pub ics_content: String,
    /// Suggested filename
    pub filename: String,
}

/// Everything the artifact generators need about one recommendation
struct RecommendationContext {
    recommendation: Recommendation,
    user: User,
    activity: Activity,
    window: (u32, u32),
}

impl RecommendationContext {
    fn outing(&self) -> PlannedOuting<'_> {
        PlannedOuting {
            activity_name: &self.activity.name,
            date: self.recommendation.date,
            start_hour: self.window.0,
            end_hour: self.window.1,
            location: self.user.location_name.as_deref(),
            weather_summary: &self.recommendation.weather_summary,
            explanation: &self.recommendation.explanation,
            score: self.recommendation.score,
        }
    }
}

/// Store a selection, rank the user's forecast and persist the top days
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown user or activity,
/// `InvalidFormat` when the forecast carries an unparseable date,
/// or a database error
pub async fn create_user_activity(
    resources: &ServerResources,
    user_id: Uuid,
    request: &CreateUserActivity,
) -> AppResult<UserActivityRecommendations> {
    let user = require_user(resources, user_id).await?;
    let activity = resources
        .database
        .activities()
        .get(request.activity_id)
        .await?
        .ok_or_else(|| AppError::not_found("Activity"))?;

    let forecast = fetch_forecast(resources, &user).await;
    let overrides = request.overrides();
    let days = top_recommendations(
        &forecast,
        &user.age_range,
        &activity.category,
        Some(&overrides),
        resources.config.recommendations.top_n,
    )?;

    let (user_activity, recommendations) = resources
        .database
        .user_activities()
        .create_with_recommendations(user.id, request, &days)
        .await?;

    info!(
        user_id = %user.id,
        activity = %activity.name,
        user_activity_id = user_activity.id,
        recommendations = recommendations.len(),
        "Stored activity selection"
    );

    Ok(UserActivityRecommendations {
        user_activity,
        recommendations,
    })
}

/// Stored recommendations of a user, best first
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown user, or a database error
pub async fn list_user_recommendations(
    resources: &ServerResources,
    user_id: Uuid,
    activity_id: Option<i64>,
) -> AppResult<Vec<RecommendationWithActivity>> {
    require_user(resources, user_id).await?;
    resources
        .database
        .recommendations()
        .list_for_user(user_id, activity_id)
        .await
}

/// Generate and store an invitation for a recommendation
///
/// # Errors
///
/// Returns `ResourceNotFound` when the recommendation or anything it refers
/// to is missing, or a database error
pub async fn create_invitation(
    resources: &ServerResources,
    recommendation_id: i64,
    recipient_email: Option<String>,
) -> AppResult<Message> {
    let context = load_context(resources, recommendation_id).await?;
    let invitation = generate_invitation(&context.outing());

    resources
        .database
        .messages()
        .create(NewMessage {
            user_id: context.user.id,
            recipient_email,
            subject: invitation.subject,
            body: invitation.body,
            recommendation_id: Some(recommendation_id),
        })
        .await
}

/// Build the calendar file for a recommendation
///
/// # Errors
///
/// Returns `ResourceNotFound` when the recommendation or anything it refers
/// to is missing, or a database error
pub async fn calendar_file(
    resources: &ServerResources,
    recommendation_id: i64,
) -> AppResult<CalendarFile> {
    let context = load_context(resources, recommendation_id).await?;
    let outing = context.outing();

    Ok(CalendarFile {
        ics_content: generate_ics(&outing, Uuid::new_v4(), Utc::now()),
        filename: ics_filename(outing.activity_name, outing.date),
    })
}

async fn fetch_forecast(resources: &ServerResources, user: &User) -> Vec<DailyWeatherObservation> {
    match resources
        .forecast
        .daily_forecast(
            user.location_lat,
            user.location_lon,
            resources.config.providers.forecast_days,
        )
        .await
    {
        Ok(days) => days,
        Err(e) => {
            error!(
                provider = resources.forecast.name(),
                error = %e,
                "Forecast fetch failed, continuing without recommendations"
            );
            Vec::new()
        }
    }
}

async fn load_context(
    resources: &ServerResources,
    recommendation_id: i64,
) -> AppResult<RecommendationContext> {
    let db = &resources.database;
    let recommendation = db
        .recommendations()
        .get(recommendation_id)
        .await?
        .ok_or_else(|| AppError::not_found("Recommendation"))?;
    let user_activity = db
        .user_activities()
        .get(recommendation.user_activity_id)
        .await?
        .ok_or_else(|| AppError::not_found("User activity"))?;
    let user = db
        .users()
        .get(user_activity.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;
    let activity = db
        .activities()
        .get(user_activity.activity_id)
        .await?
        .ok_or_else(|| AppError::not_found("Activity"))?;

    let window = user_activity.time_window_or(DEFAULT_WINDOW_START_HOUR, DEFAULT_WINDOW_END_HOUR);

    Ok(RecommendationContext {
        recommendation,
        user,
        activity,
        window,
    })
}
