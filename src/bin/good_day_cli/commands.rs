// ABOUTME: Command implementations for the offline CLI
// ABOUTME: Reads observation files, ranks them and renders text or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use good_day_intelligence::{filter_by_demographics, top_recommendations};
use next_good_day::constants::recommendations::DEFAULT_TOP_N;
use next_good_day::database::default_catalog;
use next_good_day::models::{Activity, DailyWeatherObservation, PreferenceOverrides, ScoredDay};
use tracing::debug;

/// Arguments of the `rank` command
#[derive(Args)]
pub struct RankArgs {
    /// JSON array of daily observations, or `-` for stdin
    #[arg(long)]
    forecast: PathBuf,

    /// Age range label such as 25-34 or 55+
    #[arg(long, default_value = "25-34")]
    age_range: String,

    /// Activity category (outdoor, creative, social)
    #[arg(long, default_value = "outdoor")]
    category: String,

    /// Lower comfortable temperature (°F)
    #[arg(long)]
    min_temp: Option<f64>,

    /// Upper comfortable temperature (°F)
    #[arg(long)]
    max_temp: Option<f64>,

    /// Penalize rainy days (true/false)
    #[arg(long, action = clap::ArgAction::Set)]
    avoid_rain: Option<bool>,

    /// Number of days to keep
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Rank a forecast file and print the best days
pub fn rank(args: &RankArgs) -> Result<()> {
    let forecast = load_forecast(&args.forecast)?;
    debug!(days = forecast.len(), "Loaded forecast");

    let days = rank_forecast(args, &forecast)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&days)?);
    } else if days.is_empty() {
        println!("No days to recommend.");
    } else {
        for (rank, day) in days.iter().enumerate() {
            println!("{}", render_day(rank + 1, day));
        }
    }
    Ok(())
}

fn load_forecast(path: &Path) -> Result<Vec<DailyWeatherObservation>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Forecast file is not a JSON array of observations")
}

fn rank_forecast(args: &RankArgs, forecast: &[DailyWeatherObservation]) -> Result<Vec<ScoredDay>> {
    let overrides = PreferenceOverrides {
        min_temperature: args.min_temp,
        max_temperature: args.max_temp,
        avoid_rain: args.avoid_rain,
        avoid_snow: None,
    };
    let overrides = (!overrides.is_empty()).then_some(overrides);

    Ok(top_recommendations(
        forecast,
        &args.age_range,
        &args.category,
        overrides.as_ref(),
        args.top,
    )?)
}

/// Print the built-in catalog, optionally filtered by demographics
pub fn list_activities(age_range: Option<&str>, gender: Option<&str>) {
    let catalog: Vec<Activity> = default_catalog()
        .into_iter()
        .zip(1_i64..)
        .map(|(entry, id)| Activity {
            id,
            name: entry.name,
            description: entry.description,
            category: entry.category,
            weather_preferences: entry.weather_preferences,
            min_age: entry.min_age,
            max_age: entry.max_age,
            gender_preference: entry.gender_preference,
        })
        .collect();

    let catalog = match age_range {
        Some(range) => filter_by_demographics(catalog, range, gender),
        None => catalog,
    };

    for activity in &catalog {
        println!(
            "{:>2}  {:<18} {:<9} {}",
            activity.id,
            activity.name,
            activity.category,
            activity.description.as_deref().unwrap_or("")
        );
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read forecast from stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read forecast file {}", path.display()))
}

fn render_day(rank: usize, day: &ScoredDay) -> String {
    format!(
        "{rank}. {} ({})  score {:.1}  {:02}:00-{:02}:00\n   {}\n   {}",
        day.date,
        day.date.format("%A"),
        day.score,
        day.preferred_time_start,
        day.preferred_time_end,
        day.weather_summary,
        day.explanation
    )
}
