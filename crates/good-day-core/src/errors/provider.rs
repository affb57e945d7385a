// ABOUTME: Error types for external forecast and geocoding provider calls
// ABOUTME: Distinguishes transport failures, API-level failures and malformed payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use thiserror::Error;

/// Errors returned by external weather and geocoding providers
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider answered with a non-success status
    #[error("{provider} API error (status {status}): {message}")]
    ApiError {
        /// Provider name
        provider: String,
        /// HTTP status code
        status: u16,
        /// Body or reason reported by the provider
        message: String,
    },

    /// Request never produced a response
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response arrived but could not be mapped to domain types
    #[error("{provider} returned an invalid response: {reason}")]
    InvalidResponse {
        /// Provider name
        provider: String,
        /// What was wrong with the payload
        reason: String,
    },

    /// Provider is switched off in configuration
    #[error("{provider} is disabled")]
    Disabled {
        /// Provider name
        provider: String,
    },
}

/// Result alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(feature = "provider-errors")]
impl From<reqwest::Error> for ProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::InvalidResponse {
                provider: "http".to_owned(),
                reason: error.to_string(),
            }
        } else {
            Self::NetworkError(error.to_string())
        }
    }
}
