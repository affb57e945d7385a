// ABOUTME: Core data models shared by the scoring engine, providers and server
// ABOUTME: Re-exports forecast, preference, scored-day and persisted record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

//! # Data Models
//!
//! Two families of types live here:
//!
//! - **Transient scoring values**: `DailyWeatherObservation`, `ActivityPreferences`,
//!   `PreferenceOverrides` and `ScoredDay`. They exist only for the duration of a
//!   single ranking call.
//! - **Persisted records**: `User`, `Activity`, `UserActivity`, `Recommendation`
//!   and `Message`, as stored by the server's SQLite layer.

mod activity;
mod forecast;
mod preferences;
mod recommendation;
mod scored_day;
mod user;

pub use activity::{Activity, UserActivity};
pub use forecast::DailyWeatherObservation;
pub use preferences::{ActivityPreferences, PreferenceOverrides};
pub use recommendation::{Message, Recommendation};
pub use scored_day::ScoredDay;
pub use user::User;
