// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Bundles the database, configuration and external providers behind Arcs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use std::sync::Arc;
use std::time::Duration;

use good_day_providers::{
    initialize_shared_client, CachedForecastProvider, ForecastProvider, LocationNamer,
    OpenMeteoClient, OpenMeteoConfig,
};

use crate::config::ServerConfig;
use crate::database::Database;

/// Everything a request handler needs, created once at startup
#[derive(Clone)]
pub struct ServerResources {
    /// Persistence
    pub database: Arc<Database>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Daily forecast source
    pub forecast: Arc<dyn ForecastProvider>,
    /// Reverse geocoding source
    pub locations: Arc<dyn LocationNamer>,
}

impl ServerResources {
    /// Assemble resources from explicit parts
    #[must_use]
    pub fn new(
        database: Database,
        config: Arc<ServerConfig>,
        forecast: Arc<dyn ForecastProvider>,
        locations: Arc<dyn LocationNamer>,
    ) -> Self {
        Self {
            database: Arc::new(database),
            config,
            forecast,
            locations,
        }
    }

    /// Wire the Open-Meteo client (with its forecast cache) from configuration
    #[must_use]
    pub fn with_open_meteo(database: Database, config: Arc<ServerConfig>) -> Self {
        initialize_shared_client(
            config.providers.http_timeout_secs,
            config.providers.http_connect_timeout_secs,
        );

        let client = Arc::new(OpenMeteoClient::new(OpenMeteoConfig {
            forecast_base_url: config.providers.forecast_base_url.clone(),
            geocoding_base_url: config.providers.geocoding_base_url.clone(),
        }));
        let forecast = Arc::new(CachedForecastProvider::with_capacity(
            Arc::clone(&client),
            Duration::from_secs(config.providers.forecast_cache_ttl_secs),
            config.providers.forecast_cache_max_entries,
        ));

        Self::new(database, config, forecast, client)
    }
}
