// ABOUTME: Business logic between the HTTP routes and the database and providers
// ABOUTME: Users, recommendation generation and artifact creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

/// Recommendation generation, invitations and calendar files
pub mod recommendations;

/// User registration
pub mod users;
