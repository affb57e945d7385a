// ABOUTME: Main library entry point for The Next Good Day recommendation service
// ABOUTME: Wires configuration, persistence, providers, artifacts and the HTTP API together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

#![deny(unsafe_code)]

//! # The Next Good Day
//!
//! Weather-aware day recommendations for everyday activities. A user picks an
//! activity; the service fetches a short forecast for the user's location,
//! scores every day with the `good_day_intelligence` engine and stores the
//! best days. Each stored day can be turned into an invitation or a calendar file.
//!
//! ## Architecture
//!
//! - **config**: environment-driven `ServerConfig`
//! - **database**: SQLite persistence via `sqlx`
//! - **services**: registration, ranking and artifact orchestration
//! - **routes**: axum handlers, one struct per domain
//! - **artifacts**: iCalendar and invitation text generators
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use next_good_day::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Next Good Day configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Calendar and invitation generators
pub mod artifacts;
/// Environment-based configuration
pub mod config;
/// Application constants
pub mod constants;
/// SQLite persistence
pub mod database;
/// Unified error handling
pub mod errors;
/// Production logging and structured output
pub mod logging;
/// HTTP middleware
pub mod middleware;
/// Shared data models
pub mod models;
/// Shared request-handler resources
pub mod resources;
/// HTTP routes by domain
pub mod routes;
/// Router assembly and serve loop
pub mod server;
/// Business logic behind the routes
pub mod services;
