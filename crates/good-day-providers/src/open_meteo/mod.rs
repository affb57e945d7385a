// ABOUTME: Open-Meteo client implementing the forecast and location-naming providers
// ABOUTME: Requests Fahrenheit and mph daily maxima and maps them to observations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

//! Open-Meteo integration
//!
//! Both APIs are keyless. Base URLs are configurable so tests and self-hosted
//! mirrors can point the client elsewhere.

mod response;

pub use response::{parse_forecast_response, parse_geocoding_response};

use async_trait::async_trait;
use good_day_core::constants::providers::{
    OPEN_METEO, OPEN_METEO_DAILY_FIELDS, OPEN_METEO_FORECAST_BASE, OPEN_METEO_GEOCODING_BASE,
};
use good_day_core::errors::{ProviderError, ProviderResult};
use good_day_core::models::DailyWeatherObservation;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::core::{ForecastProvider, LocationNamer};
use crate::http_client::shared_client;

/// Base URLs for the Open-Meteo APIs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenMeteoConfig {
    /// Forecast API base, e.g. `https://api.open-meteo.com/v1`
    pub forecast_base_url: String,
    /// Geocoding API base, e.g. `https://geocoding-api.open-meteo.com/v1`
    pub geocoding_base_url: String,
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: OPEN_METEO_FORECAST_BASE.to_owned(),
            geocoding_base_url: OPEN_METEO_GEOCODING_BASE.to_owned(),
        }
    }
}

/// Client for the Open-Meteo forecast and geocoding APIs
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: OpenMeteoConfig,
}

impl OpenMeteoClient {
    /// Create a client on top of the shared HTTP client
    #[must_use]
    pub fn new(config: OpenMeteoConfig) -> Self {
        Self::with_client(shared_client().clone(), config)
    }

    /// Create a client with an explicit HTTP client
    #[must_use]
    pub const fn with_client(client: Client, config: OpenMeteoConfig) -> Self {
        Self { client, config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &OpenMeteoConfig {
        &self.config
    }

    async fn get_text(&self, url: &str, query: &[(&str, String)]) -> ProviderResult<String> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), url, "Open-Meteo request failed");
            return Err(ProviderError::ApiError {
                provider: OPEN_METEO.to_owned(),
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    fn name(&self) -> &'static str {
        OPEN_METEO
    }

    #[instrument(skip(self), fields(provider = OPEN_METEO))]
    async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: u32,
    ) -> ProviderResult<Vec<DailyWeatherObservation>> {
        let url = format!(
            "{}/forecast",
            self.config.forecast_base_url.trim_end_matches('/')
        );
        let query = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("daily", OPEN_METEO_DAILY_FIELDS.to_owned()),
            ("temperature_unit", "fahrenheit".to_owned()),
            ("windspeed_unit", "mph".to_owned()),
            ("forecast_days", days.to_string()),
            ("timezone", "auto".to_owned()),
        ];

        let body = self.get_text(&url, &query).await?;
        let observations = parse_forecast_response(&body)?;
        debug!(days = observations.len(), "Fetched daily forecast");
        Ok(observations)
    }
}

#[async_trait]
impl LocationNamer for OpenMeteoClient {
    #[instrument(skip(self), fields(provider = OPEN_METEO))]
    async fn location_name(&self, latitude: f64, longitude: f64) -> ProviderResult<String> {
        let url = format!(
            "{}/search",
            self.config.geocoding_base_url.trim_end_matches('/')
        );
        let query = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("count", "1".to_owned()),
            ("format", "json".to_owned()),
        ];

        let body = self.get_text(&url, &query).await?;
        parse_geocoding_response(&body)
    }
}
