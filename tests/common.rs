// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, stub providers and ready-made server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `next_good_day`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use anyhow::Result;
use async_trait::async_trait;
use good_day_providers::{ForecastProvider, LocationNamer, ProviderError, ProviderResult};
use next_good_day::{
    config::ServerConfig, database::Database, models::DailyWeatherObservation,
    resources::ServerResources,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}

/// Forecast provider returning a fixed window, or failing on demand
pub struct StubForecastProvider {
    days: Vec<DailyWeatherObservation>,
    fail: bool,
    calls: AtomicUsize,
}

impl StubForecastProvider {
    pub fn with_days(days: Vec<DailyWeatherObservation>) -> Self {
        Self {
            days,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            days: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ForecastProvider for StubForecastProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn daily_forecast(
        &self,
        _latitude: f64,
        _longitude: f64,
        days: u32,
    ) -> ProviderResult<Vec<DailyWeatherObservation>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProviderError::NetworkError("connection refused".to_owned()));
        }
        Ok(self.days.iter().take(days as usize).cloned().collect())
    }
}

/// Location namer returning a fixed name, or failing on demand
pub struct StubLocationNamer {
    name: Option<String>,
}

impl StubLocationNamer {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
        }
    }

    pub const fn failing() -> Self {
        Self { name: None }
    }
}

#[async_trait]
impl LocationNamer for StubLocationNamer {
    async fn location_name(&self, _latitude: f64, _longitude: f64) -> ProviderResult<String> {
        self.name.clone().ok_or_else(|| ProviderError::ApiError {
            provider: "stub".to_owned(),
            status: 503,
            message: "unavailable".to_owned(),
        })
    }
}

/// Five forecast days in this order: Mon 2025-06-02 (rainy), Thu 06-05 (ideal),
/// Fri 06-06 (hot), Sat 06-07 (ideal), Sun 06-08 (windy, some rain)
///
/// Outdoor scores for any age range: 6.8, 9.0, 8.0, 9.5, 7.3.
pub fn sample_forecast() -> Vec<DailyWeatherObservation> {
    vec![
        DailyWeatherObservation::new("2025-06-02", 72.0, 0.8).with_wind_speed(5.0),
        DailyWeatherObservation::new("2025-06-05", 70.0, 0.05).with_wind_speed(5.0),
        DailyWeatherObservation::new("2025-06-06", 95.0, 0.0).with_wind_speed(5.0),
        DailyWeatherObservation::new("2025-06-07", 75.0, 0.05).with_wind_speed(3.0),
        DailyWeatherObservation::new("2025-06-08", 68.0, 0.3).with_wind_speed(25.0),
    ]
}

/// Server resources over an in-memory database and the given providers
pub async fn create_test_resources(
    forecast: Arc<dyn ForecastProvider>,
    locations: Arc<dyn LocationNamer>,
) -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        Arc::new(ServerConfig::default()),
        forecast,
        locations,
    )))
}

/// Server resources with [`sample_forecast`] and a fixed location name
pub async fn create_default_resources() -> Result<Arc<ServerResources>> {
    create_test_resources(
        Arc::new(StubForecastProvider::with_days(sample_forecast())),
        Arc::new(StubLocationNamer::named("Portland, United States")),
    )
    .await
}

/// Approximate float equality for score assertions
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
