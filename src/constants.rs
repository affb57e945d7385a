// ABOUTME: Application constants re-exported from the core crate
// ABOUTME: Keeps crate::constants paths stable for server modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

pub use good_day_core::constants::*;
