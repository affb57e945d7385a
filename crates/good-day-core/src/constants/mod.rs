// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Ports, defaults, provider endpoints and service names for Next Good Day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

//! Constants module
//!
//! Application constants grouped by domain. Scoring weights live next to the
//! scorer in `good-day-intelligence`; only values shared across crates belong here.

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8000;
}

/// Recommendation defaults
pub mod recommendations {
    /// Forecast window length requested from the provider
    pub const DEFAULT_FORECAST_DAYS: u32 = 5;
    /// Largest forecast window the provider serves
    pub const MAX_FORECAST_DAYS: u32 = 16;
    /// Number of days persisted per user activity
    pub const DEFAULT_TOP_N: usize = 3;
    /// Start hour used for artifacts when the user activity has no window
    pub const DEFAULT_WINDOW_START_HOUR: u32 = 12;
    /// End hour used for artifacts when the user activity has no window
    pub const DEFAULT_WINDOW_END_HOUR: u32 = 18;
}

/// Display fallbacks
pub mod display {
    /// Location label when geocoding yields nothing
    pub const UNKNOWN_LOCATION: &str = "Unknown Location";
    /// Location label used in invitations when the user has no location name
    pub const INVITATION_LOCATION_FALLBACK: &str = "your area";
    /// Location label used in calendar events when the user has no location name
    pub const CALENDAR_LOCATION_FALLBACK: &str = "Your Location";
    /// Activity label when a recommendation's activity row has vanished
    pub const UNKNOWN_ACTIVITY: &str = "Unknown Activity";
    /// Sender name written into invitations
    pub const INVITATION_SENDER: &str = "You";
}

/// External provider endpoints
pub mod providers {
    /// Open-Meteo forecast API base URL
    pub const OPEN_METEO_FORECAST_BASE: &str = "https://api.open-meteo.com/v1";
    /// Open-Meteo geocoding API base URL
    pub const OPEN_METEO_GEOCODING_BASE: &str = "https://geocoding-api.open-meteo.com/v1";
    /// Daily variables requested from the forecast API
    pub const OPEN_METEO_DAILY_FIELDS: &str =
        "temperature_2m_max,precipitation_probability_max,windspeed_10m_max";
    /// Provider name used in errors and logs
    pub const OPEN_METEO: &str = "open-meteo";
}

/// Cache defaults
pub mod cache {
    /// Forecast cache TTL in seconds
    pub const DEFAULT_FORECAST_TTL_SECS: u64 = 1800;
    /// Forecast windows held before LRU eviction
    pub const DEFAULT_FORECAST_MAX_ENTRIES: usize = 1000;
}

/// HTTP client timeouts
pub mod http_client {
    /// Overall request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Connect timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Service identifiers
pub mod service_names {
    /// Service name reported in logs and health checks
    pub const NEXT_GOOD_DAY: &str = "next-good-day";
    /// Product name written into generated artifacts
    pub const PRODUCT_NAME: &str = "The Next Good Day";
    /// Public product URL written into generated artifacts
    pub const PRODUCT_URL: &str = "https://nextgoodday.app";
    /// Calendar product identifier
    pub const ICS_PRODID: &str = "-//Next Good Day//Recommendations//EN";
}
