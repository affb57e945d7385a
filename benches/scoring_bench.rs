// ABOUTME: Criterion benchmarks for the day-scoring engine and artifact generation
// ABOUTME: Measures single-day scoring, window ranking and calendar rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

//! Criterion benchmarks for the scoring engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use good_day_intelligence::{rank_days, resolve_preferences, score_weather, top_recommendations};
use next_good_day::artifacts::{generate_ics, generate_invitation, PlannedOuting};
use next_good_day::models::{DailyWeatherObservation, PreferenceOverrides};
use uuid::Uuid;

/// Build a deterministic forecast window of `days` days
#[allow(clippy::cast_precision_loss)]
fn generate_forecast(days: usize) -> Vec<DailyWeatherObservation> {
    let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap_or_default();
    (0..days)
        .map(|index| {
            let date = start + Duration::days(index as i64);
            let temperature = 40.0 + ((index * 37) % 60) as f64;
            let precipitation = ((index * 13) % 100) as f64 / 100.0;
            let wind = ((index * 7) % 30) as f64;
            DailyWeatherObservation::new(date.format("%Y-%m-%d").to_string(), temperature, precipitation)
                .with_wind_speed(wind)
        })
        .collect()
}

fn bench_score_weather(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_weather");

    for category in ["outdoor", "creative", "social", "unknown"] {
        let prefs = resolve_preferences(category, None);
        group.bench_with_input(BenchmarkId::new("single_day", category), &prefs, |b, prefs| {
            b.iter(|| score_weather(black_box(91.0), black_box(0.35), black_box(18.0), prefs));
        });
    }

    group.finish();
}

fn bench_rank_days(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_days");
    let overrides = PreferenceOverrides {
        min_temperature: Some(60.0),
        max_temperature: Some(80.0),
        avoid_rain: Some(true),
        avoid_snow: None,
    };

    for days in [5_usize, 16, 365] {
        let forecast = generate_forecast(days);
        group.throughput(Throughput::Elements(days as u64));

        group.bench_with_input(BenchmarkId::new("defaults", days), &forecast, |b, forecast| {
            b.iter(|| rank_days(black_box(forecast), "25-34", "outdoor", None));
        });
        group.bench_with_input(
            BenchmarkId::new("with_overrides", days),
            &forecast,
            |b, forecast| {
                b.iter(|| rank_days(black_box(forecast), "55+", "outdoor", Some(&overrides)));
            },
        );
        group.bench_with_input(BenchmarkId::new("top_3", days), &forecast, |b, forecast| {
            b.iter(|| top_recommendations(black_box(forecast), "18-24", "creative", None, 3));
        });
    }

    group.finish();
}

fn bench_artifacts(c: &mut Criterion) {
    let mut group = c.benchmark_group("artifacts");
    let date = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap_or_default();
    let explanation = "Perfect conditions: Ideal temperature of 75.0°F; Clear skies expected. \
                       Weekend bonus applied.";
    let outing = PlannedOuting {
        activity_name: "Hiking",
        date,
        start_hour: 9,
        end_hour: 21,
        location: Some("Portland, United States"),
        weather_summary: "Clear, 75.0°F",
        explanation,
        score: 9.5,
    };
    let uid = Uuid::new_v4();
    let stamp = Utc::now();

    group.bench_function("generate_ics", |b| {
        b.iter(|| generate_ics(black_box(&outing), uid, stamp));
    });
    group.bench_function("generate_invitation", |b| {
        b.iter(|| generate_invitation(black_box(&outing)));
    });

    group.finish();
}

criterion_group!(benches, bench_score_weather, bench_rank_days, bench_artifacts);
criterion_main!(benches);
