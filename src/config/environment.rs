// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a validated, strongly typed ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{cache, http_client, ports, providers, recommendations};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational output
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(s)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
            Self::Testing => f.write_str("testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// File-backed `SQLite` database
    SQLite {
        /// Database file path
        path: PathBuf,
    },
    /// In-memory `SQLite`, discarded on shutdown
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL
    ///
    /// # Errors
    ///
    /// Returns an error for any other scheme or an empty path
    pub fn parse_url(s: &str) -> Result<Self> {
        let rest = s
            .strip_prefix("sqlite://")
            .or_else(|| s.strip_prefix("sqlite:"))
            .ok_or_else(|| anyhow!("Unsupported database URL '{s}': only sqlite is supported"))?;
        match rest {
            ":memory:" => Ok(Self::Memory),
            "" => Err(anyhow!("Database URL '{s}' has no path")),
            path => Ok(Self::SQLite {
                path: PathBuf::from(path),
            }),
        }
    }

    /// Connection string for sqlx
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// True for the in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/next_good_day.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_connection_string())
    }
}

/// Database settings
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

/// CORS settings
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Allowed origins; empty means any origin
    pub allowed_origins: Vec<String>,
}

/// External provider settings
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Forecast API base URL
    pub forecast_base_url: String,
    /// Geocoding API base URL
    pub geocoding_base_url: String,
    /// Forecast window length in days
    pub forecast_days: u32,
    /// Forecast cache TTL in seconds, 0 disables caching
    pub forecast_cache_ttl_secs: u64,
    /// Forecast windows held in memory before LRU eviction
    pub forecast_cache_max_entries: usize,
    /// Outbound request timeout in seconds
    pub http_timeout_secs: u64,
    /// Outbound connect timeout in seconds
    pub http_connect_timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            forecast_base_url: providers::OPEN_METEO_FORECAST_BASE.to_owned(),
            geocoding_base_url: providers::OPEN_METEO_GEOCODING_BASE.to_owned(),
            forecast_days: recommendations::DEFAULT_FORECAST_DAYS,
            forecast_cache_ttl_secs: cache::DEFAULT_FORECAST_TTL_SECS,
            forecast_cache_max_entries: cache::DEFAULT_FORECAST_MAX_ENTRIES,
            http_timeout_secs: http_client::DEFAULT_TIMEOUT_SECS,
            http_connect_timeout_secs: http_client::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Recommendation settings
#[derive(Debug, Clone)]
pub struct RecommendationSettings {
    /// Days persisted per user activity
    pub top_n: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            top_n: recommendations::DEFAULT_TOP_N,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Application log level
    pub log_level: LogLevel,
    /// Database settings
    pub database: DatabaseConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// Forecast and geocoding settings
    pub providers: ProviderSettings,
    /// Ranking output settings
    pub recommendations: RecommendationSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            host: "127.0.0.1".to_owned(),
            environment: Environment::default(),
            log_level: LogLevel::default(),
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
            providers: ProviderSettings::default(),
            recommendations: RecommendationSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the result fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed or the result fails validation
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var_or = |key: &str, default: String| lookup(key).unwrap_or(default);

        let config = Self {
            http_port: parse_var(&lookup, "HTTP_PORT", defaults.http_port)?,
            host: var_or("HOST", defaults.host),
            environment: Environment::from_str_or_default(&var_or(
                "ENVIRONMENT",
                defaults.environment.to_string(),
            )),
            log_level: LogLevel::from_str_or_default(&var_or(
                "RUST_LOG",
                defaults.log_level.to_string(),
            )),
            database: DatabaseConfig {
                url: match lookup("DATABASE_URL") {
                    Some(url) => DatabaseUrl::parse_url(&url).context("Invalid DATABASE_URL")?,
                    None => defaults.database.url,
                },
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&var_or("CORS_ALLOWED_ORIGINS", "*".to_owned())),
            },
            providers: ProviderSettings {
                forecast_base_url: var_or(
                    "FORECAST_API_BASE",
                    defaults.providers.forecast_base_url,
                ),
                geocoding_base_url: var_or(
                    "GEOCODING_API_BASE",
                    defaults.providers.geocoding_base_url,
                ),
                forecast_days: parse_var(
                    &lookup,
                    "FORECAST_DAYS",
                    defaults.providers.forecast_days,
                )?,
                forecast_cache_ttl_secs: parse_var(
                    &lookup,
                    "FORECAST_CACHE_TTL_SECS",
                    defaults.providers.forecast_cache_ttl_secs,
                )?,
                forecast_cache_max_entries: parse_var(
                    &lookup,
                    "FORECAST_CACHE_MAX_ENTRIES",
                    defaults.providers.forecast_cache_max_entries,
                )?,
                http_timeout_secs: parse_var(
                    &lookup,
                    "HTTP_TIMEOUT_SECS",
                    defaults.providers.http_timeout_secs,
                )?,
                http_connect_timeout_secs: parse_var(
                    &lookup,
                    "HTTP_CONNECT_TIMEOUT_SECS",
                    defaults.providers.http_connect_timeout_secs,
                )?,
            },
            recommendations: RecommendationSettings {
                top_n: parse_var(&lookup, "RECOMMENDATION_COUNT", defaults.recommendations.top_n)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error when the forecast window or recommendation count is out of range
    pub fn validate(&self) -> Result<()> {
        let days = self.providers.forecast_days;
        if !(1..=recommendations::MAX_FORECAST_DAYS).contains(&days) {
            return Err(anyhow!(
                "FORECAST_DAYS must be between 1 and {}, got {days}",
                recommendations::MAX_FORECAST_DAYS
            ));
        }
        if self.recommendations.top_n == 0 {
            return Err(anyhow!("RECOMMENDATION_COUNT must be at least 1"));
        }
        if self.host.trim().is_empty() {
            return Err(anyhow!("HOST must not be empty"));
        }
        Ok(())
    }

    /// Log-safe multi-line summary
    #[must_use]
    pub fn summary(&self) -> String {
        let origins = if self.cors.allowed_origins.is_empty() {
            "*".to_owned()
        } else {
            self.cors.allowed_origins.join(", ")
        };
        format!(
            "Next Good Day Configuration:\n\
             - Listen: {}:{}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - CORS Origins: {origins}\n\
             - Forecast API: {} ({} days, cache {}s)\n\
             - Geocoding API: {}\n\
             - Recommendations per activity: {}",
            self.host,
            self.http_port,
            self.environment,
            self.log_level,
            self.database.url,
            self.providers.forecast_base_url,
            self.providers.forecast_days,
            self.providers.forecast_cache_ttl_secs,
            self.providers.geocoding_base_url,
            self.recommendations.top_n,
        )
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .with_context(|| format!("Invalid {key} value '{raw}'"))
    })
}

/// Parse comma-separated origins; `*` means any origin
fn parse_origins(origins: &str) -> Vec<String> {
    if origins.trim() == "*" {
        return Vec::new();
    }
    origins
        .split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}
