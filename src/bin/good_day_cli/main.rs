// ABOUTME: Good Day CLI - offline ranking of forecast files and catalog browsing
// ABOUTME: Runs the scoring engine without a server, database or network access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day
//!
//! Usage:
//! ```bash
//! # Rank a saved forecast for an outdoor activity
//! good-day-cli rank --forecast forecast.json --age-range 25-34 --category outdoor
//!
//! # Tighter comfort band, top two days, JSON output
//! good-day-cli rank --forecast forecast.json --age-range 55+ --category social \
//!     --min-temp 60 --max-temp 80 --top 2 --json
//!
//! # Catalog entries suitable for an age range
//! good-day-cli activities --age-range 18-24
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use next_good_day::logging;

#[derive(Parser)]
#[command(
    name = "good-day-cli",
    about = "The Next Good Day offline tools",
    long_about = "Rank forecast files with the day-scoring engine and browse the built-in activity catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Rank the days of a forecast file
    Rank(commands::RankArgs),

    /// List the built-in activity catalog
    Activities {
        /// Only entries suitable for this age range
        #[arg(long)]
        age_range: Option<String>,

        /// Gender used together with --age-range
        #[arg(long)]
        gender: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_for_cli(cli.verbose)?;

    match cli.command {
        Command::Rank(args) => commands::rank(&args),
        Command::Activities { age_range, gender } => {
            commands::list_activities(age_range.as_deref(), gender.as_deref());
            Ok(())
        }
    }
}
