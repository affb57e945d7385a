// ABOUTME: HTTP server binary for The Next Good Day
// ABOUTME: Loads configuration, opens the database, wires providers and serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

//! # Next Good Day Server Binary
//!
//! Reads configuration from the environment, migrates the database and
//! serves the HTTP API until interrupted.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use next_good_day::{
    config::ServerConfig, database::Database, logging, resources::ServerResources, server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "next-good-day-server")]
#[command(about = "The Next Good Day - weather-aware activity recommendations")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = next_good_day::config::DatabaseUrl::parse_url(url)?;
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Starting The Next Good Day server");
    info!("{}", config.summary());

    let database = Database::open(&config.database.url).await?;
    info!(url = %config.database.url, "Database ready");

    let resources = Arc::new(ServerResources::with_open_meteo(database, Arc::new(config)));

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }
    Ok(())
}
