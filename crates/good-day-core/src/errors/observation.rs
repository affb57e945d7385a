// ABOUTME: Error raised when a forecast observation violates the input contract
// ABOUTME: Carries the offending index and raw value so callers can pre-filter data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use thiserror::Error;

/// A forecast observation could not be interpreted.
///
/// Ranking is all-or-nothing: the first malformed entry aborts the whole batch
/// and is reported with its position in the input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid observation at index {index}: '{value}' ({reason})")]
pub struct InvalidObservationError {
    /// Zero-based position of the observation in the forecast
    pub index: usize,
    /// Raw value that failed to parse
    pub value: String,
    /// Parser explanation
    pub reason: String,
}

impl InvalidObservationError {
    /// Create an error for the observation at `index`
    #[must_use]
    pub fn new(index: usize, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            index,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
