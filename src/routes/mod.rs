// ABOUTME: Route module organization for the HTTP API
// ABOUTME: Each domain module holds route definitions and thin handlers over the services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

//! HTTP routes grouped by domain

/// Activity catalog routes
pub mod activities;
/// Health check route
pub mod health;
/// Recommendation artifact routes (invitations, calendar files)
pub mod recommendations;
/// User, activity selection and recommendation listing routes
pub mod users;

pub use activities::ActivityRoutes;
pub use health::HealthRoutes;
pub use recommendations::RecommendationRoutes;
pub use users::UserRoutes;
