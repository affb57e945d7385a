// ABOUTME: Shared data models re-exported from the core crate
// ABOUTME: Observations, preferences, scored days and persisted records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

pub use good_day_core::models::*;
