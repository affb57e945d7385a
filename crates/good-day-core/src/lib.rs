// ABOUTME: Core types and constants for The Next Good Day recommendation service
// ABOUTME: Foundation crate with error handling, shared models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

#![deny(unsafe_code)]

//! # Good Day Core
//!
//! Foundation crate providing shared types and constants for the Next Good Day
//! recommendation service. The scoring engine, the external providers and the
//! HTTP server all build on these definitions, so this crate changes rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Forecast observations, preference sets, scored days and persisted records

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and default values organized by domain
pub mod constants;

/// Core data models (observations, preferences, scored days, persisted records)
pub mod models;
