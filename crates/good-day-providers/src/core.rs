// ABOUTME: Provider traits for daily forecasts and coordinate-to-name lookups
// ABOUTME: Implemented by the Open-Meteo client, the cache decorator and test stubs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use std::sync::Arc;

use async_trait::async_trait;
use good_day_core::errors::ProviderResult;
use good_day_core::models::DailyWeatherObservation;

/// Source of daily forecast windows
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &'static str;

    /// Fetch `days` daily observations starting today, in date order
    async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: u32,
    ) -> ProviderResult<Vec<DailyWeatherObservation>>;
}

/// Source of display names for coordinates
#[async_trait]
pub trait LocationNamer: Send + Sync {
    /// Resolve a display name such as `"Lisbon, Portugal"`
    async fn location_name(&self, latitude: f64, longitude: f64) -> ProviderResult<String>;
}

#[async_trait]
impl<T: ForecastProvider + ?Sized> ForecastProvider for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: u32,
    ) -> ProviderResult<Vec<DailyWeatherObservation>> {
        (**self).daily_forecast(latitude, longitude, days).await
    }
}

#[async_trait]
impl<T: LocationNamer + ?Sized> LocationNamer for Arc<T> {
    async fn location_name(&self, latitude: f64, longitude: f64) -> ProviderResult<String> {
        (**self).location_name(latitude, longitude).await
    }
}
