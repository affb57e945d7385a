// ABOUTME: Weather forecast and location-naming providers for The Next Good Day
// ABOUTME: Provider traits, the Open-Meteo client, the forecast cache and the shared HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

#![deny(unsafe_code)]

//! External data collaborators.
//!
//! The scoring engine never talks to the network. The server obtains a
//! forecast window through a [`ForecastProvider`] and a display name through a
//! [`LocationNamer`], then hands plain observations to the engine.

/// TTL cache decorator for forecast providers
pub mod cache;
/// Core provider traits
pub mod core;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// Open-Meteo forecast and geocoding client
pub mod open_meteo;

pub use cache::CachedForecastProvider;
pub use core::{ForecastProvider, LocationNamer};
pub use good_day_core::errors::{ProviderError, ProviderResult};
pub use http_client::{initialize_shared_client, shared_client};
pub use open_meteo::{OpenMeteoClient, OpenMeteoConfig};
