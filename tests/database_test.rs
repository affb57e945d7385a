// ABOUTME: Integration tests for SQLite persistence
// ABOUTME: Covers migrations, catalog seeding, users, transactional selections and messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::{create_test_database, init_test_logging, sample_forecast};
use good_day_intelligence::top_recommendations;
use next_good_day::config::DatabaseUrl;
use next_good_day::database::{CreateUserActivity, Database, NewMessage};
use next_good_day::errors::ErrorCode;
use next_good_day::models::User;
use uuid::Uuid;

fn test_user(email: &str) -> User {
    User::new(
        email.to_owned(),
        "25-34".to_owned(),
        None,
        45.52,
        -122.68,
    )
}

fn selection(activity_id: i64) -> CreateUserActivity {
    CreateUserActivity {
        activity_id,
        preferred_time_start: None,
        preferred_time_end: None,
        preferred_days: Some("weekends".to_owned()),
        min_temperature: Some(55.0),
        max_temperature: None,
        avoid_rain: true,
        avoid_snow: true,
    }
}

#[tokio::test]
async fn test_catalog_is_seeded_once() {
    let db = create_test_database().await.unwrap();
    let activities = db.activities().list().await.unwrap();

    assert_eq!(activities.len(), 11);
    assert_eq!(activities[0].name, "Hiking");
    assert_eq!(activities[0].category, "outdoor");
    let hiking_prefs = activities[0].weather_preferences.unwrap();
    assert!((hiking_prefs.min_temperature - 50.0).abs() < f64::EPSILON);
    assert!((hiking_prefs.max_temperature - 85.0).abs() < f64::EPSILON);

    let coffee = activities
        .iter()
        .find(|a| a.name == "Coffee Shop Work")
        .unwrap();
    let prefs = coffee.weather_preferences.unwrap();
    assert!(!prefs.avoid_rain);
    assert!(prefs.avoid_snow);

    assert_eq!(db.activities().seed_defaults().await.unwrap(), 0);
    db.migrate().await.unwrap();
    assert_eq!(db.activities().count().await.unwrap(), 11);
}

#[tokio::test]
async fn test_user_round_trip_and_unique_email() {
    let db = create_test_database().await.unwrap();
    let mut user = test_user("river@example.com");
    user.location_name = Some("Portland, United States".to_owned());
    db.users().create(&user).await.unwrap();

    let by_id = db.users().get(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "river@example.com");
    assert_eq!(by_id.location_name.as_deref(), Some("Portland, United States"));
    assert_eq!(by_id.created_at.timestamp(), user.created_at.timestamp());

    let by_email = db.users().get_by_email("river@example.com").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    let duplicate = test_user("river@example.com");
    let error = db.users().create(&duplicate).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);

    assert!(db.users().get(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_selection_and_recommendations_are_stored_together() {
    let db = create_test_database().await.unwrap();
    let user = test_user("sam@example.com");
    db.users().create(&user).await.unwrap();

    let days = top_recommendations(&sample_forecast(), "25-34", "outdoor", None, 3).unwrap();
    let (user_activity, recommendations) = db
        .user_activities()
        .create_with_recommendations(user.id, &selection(1), &days)
        .await
        .unwrap();

    assert_eq!(recommendations.len(), 3);
    assert!(recommendations.iter().all(|r| r.user_activity_id == user_activity.id));

    let stored = db.user_activities().get(user_activity.id).await.unwrap().unwrap();
    assert_eq!(stored.preferred_days.as_deref(), Some("weekends"));
    assert_eq!(stored.min_temperature, Some(55.0));
    assert_eq!(stored.max_temperature, None);
    assert!(stored.avoid_rain);

    let first = db.recommendations().get(recommendations[0].id).await.unwrap().unwrap();
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2025, 6, 7).unwrap());
    assert_eq!((first.preferred_time_start, first.preferred_time_end), (9, 21));
    assert_eq!(first.explanation, days[0].explanation);
    assert_eq!(first.precipitation_probability, Some(0.05));

    let listed = db.user_activities().list_for_user(user.id).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_failed_selection_leaves_nothing_behind() {
    let db = create_test_database().await.unwrap();
    let user = test_user("kai@example.com");
    db.users().create(&user).await.unwrap();

    let days = top_recommendations(&sample_forecast(), "25-34", "outdoor", None, 3).unwrap();
    // Activity 999 violates the foreign key, so the whole transaction rolls back.
    let result = db
        .user_activities()
        .create_with_recommendations(user.id, &selection(999), &days)
        .await;
    assert!(result.is_err());

    assert!(db.user_activities().list_for_user(user.id).await.unwrap().is_empty());
    assert!(db
        .recommendations()
        .list_for_user(user.id, None)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_listing_sorts_by_score_and_filters_by_activity() {
    let db = create_test_database().await.unwrap();
    let user = test_user("jo@example.com");
    db.users().create(&user).await.unwrap();

    let outdoor = top_recommendations(&sample_forecast(), "25-34", "outdoor", None, 2).unwrap();
    let creative = top_recommendations(&sample_forecast(), "25-34", "creative", None, 2).unwrap();
    db.user_activities()
        .create_with_recommendations(user.id, &selection(1), &outdoor)
        .await
        .unwrap();
    db.user_activities()
        .create_with_recommendations(user.id, &selection(5), &creative)
        .await
        .unwrap();

    let all = db.recommendations().list_for_user(user.id, None).await.unwrap();
    assert_eq!(all.len(), 4);
    assert!(all
        .windows(2)
        .all(|w| w[0].recommendation.score >= w[1].recommendation.score));

    let painting = db.recommendations().list_for_user(user.id, Some(5)).await.unwrap();
    assert_eq!(painting.len(), 2);
    assert!(painting.iter().all(|r| r.activity_name == "Painting" && r.activity_id == 5));
}

#[tokio::test]
async fn test_messages_are_stored_per_user() {
    let db = create_test_database().await.unwrap();
    let user = test_user("ash@example.com");
    db.users().create(&user).await.unwrap();

    let message = db
        .messages()
        .create(NewMessage {
            user_id: user.id,
            recipient_email: Some("friend@example.com".to_owned()),
            subject: "Join me for Hiking on Saturday?".to_owned(),
            body: "Hi there!".to_owned(),
            recommendation_id: None,
        })
        .await
        .unwrap();

    let listed = db.messages().list_for_user(user.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, message.id);
    assert_eq!(listed[0].recipient_email.as_deref(), Some("friend@example.com"));
}

#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("good_day.db");
    let url = DatabaseUrl::SQLite { path };

    let user = test_user("persist@example.com");
    {
        let db = Database::open(&url).await.unwrap();
        db.users().create(&user).await.unwrap();
        db.pool().close().await;
    }

    let reopened = Database::open(&url).await.unwrap();
    assert!(reopened.users().get(user.id).await.unwrap().is_some());
    assert_eq!(reopened.activities().count().await.unwrap(), 11);
}
