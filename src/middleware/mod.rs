// ABOUTME: HTTP middleware for the axum router
// ABOUTME: Currently cross-origin resource sharing only; tracing comes from tower-http
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

/// CORS layer construction
pub mod cors;

pub use cors::setup_cors;
