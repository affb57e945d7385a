// ABOUTME: Configuration management module for server settings
// ABOUTME: Re-exports the environment-driven ServerConfig and its sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

//! Configuration for the Next Good Day server
//!
//! All settings come from environment variables; there are no config files.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, ProviderSettings,
    RecommendationSettings, ServerConfig,
};
