// ABOUTME: Unified error handling re-exported from the core crate
// ABOUTME: AppError, ErrorCode and domain errors for the server layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

//! Re-export of [`good_day_core::errors`] so server code uses `crate::errors`.

pub use good_day_core::errors::*;
