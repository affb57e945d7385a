// ABOUTME: In-memory LRU cache with TTL wrapping any forecast provider
// ABOUTME: Keys on rounded coordinates and window length; only successful fetches are stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use std::num::NonZeroUsize;
use std::time::Duration;

use async_trait::async_trait;
use good_day_core::constants::cache::DEFAULT_FORECAST_MAX_ENTRIES;
use good_day_core::errors::ProviderResult;
use good_day_core::models::DailyWeatherObservation;
use lru::LruCache;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::core::ForecastProvider;

/// Coordinates are keyed at three decimals, roughly 100 m
const COORDINATE_SCALE: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ForecastKey {
    latitude: i64,
    longitude: i64,
    days: u32,
}

impl ForecastKey {
    fn new(latitude: f64, longitude: f64, days: u32) -> Self {
        Self {
            latitude: (latitude * COORDINATE_SCALE).round() as i64,
            longitude: (longitude * COORDINATE_SCALE).round() as i64,
            days,
        }
    }
}

#[derive(Debug, Clone)]
struct CachedForecast {
    observations: Vec<DailyWeatherObservation>,
    cached_at: Instant,
}

impl CachedForecast {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() >= ttl
    }
}

/// Forecast provider decorator that serves recent windows from memory
///
/// Entries live at most `ttl` and the store never holds more than its
/// capacity; the least recently used window is evicted first. Expired entries
/// are dropped when read and swept before every insert.
/// A zero TTL disables caching and every call goes to the inner provider.
pub struct CachedForecastProvider<P> {
    inner: P,
    ttl: Duration,
    entries: RwLock<LruCache<ForecastKey, CachedForecast>>,
}

impl<P: ForecastProvider> CachedForecastProvider<P> {
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_FORECAST_MAX_ENTRIES) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Wrap `inner` with the given TTL and the default capacity
    #[must_use]
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self::with_capacity(inner, ttl, DEFAULT_FORECAST_MAX_ENTRIES)
    }

    /// Wrap `inner` holding at most `max_entries` windows (0 means the default)
    #[must_use]
    pub fn with_capacity(inner: P, ttl: Duration, max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            inner,
            ttl,
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Wrapped provider
    #[must_use]
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// Number of stored windows
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Maximum number of stored windows
    pub async fn capacity(&self) -> usize {
        self.entries.read().await.cap().get()
    }

    /// Drop every stored window
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    async fn fresh_entry(&self, key: &ForecastKey) -> Option<Vec<DailyWeatherObservation>> {
        // LruCache::get updates recency, so it needs the write lock
        let mut entries = self.entries.write().await;
        let expired = entries.get(key)?.is_expired(self.ttl);
        if expired {
            entries.pop(key);
            return None;
        }
        entries.get(key).map(|cached| cached.observations.clone())
    }

    async fn store(&self, key: ForecastKey, observations: Vec<DailyWeatherObservation>) {
        let mut entries = self.entries.write().await;

        let expired_keys: Vec<ForecastKey> = entries
            .iter()
            .filter(|(_, cached)| cached.is_expired(self.ttl))
            .map(|(stale, _)| *stale)
            .collect();
        for expired in &expired_keys {
            entries.pop(expired);
        }
        if !expired_keys.is_empty() {
            debug!(removed = expired_keys.len(), "Swept expired forecast cache entries");
        }

        entries.push(
            key,
            CachedForecast {
                observations,
                cached_at: Instant::now(),
            },
        );
    }
}

#[async_trait]
impl<P: ForecastProvider> ForecastProvider for CachedForecastProvider<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn daily_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: u32,
    ) -> ProviderResult<Vec<DailyWeatherObservation>> {
        if self.ttl.is_zero() {
            return self.inner.daily_forecast(latitude, longitude, days).await;
        }

        let key = ForecastKey::new(latitude, longitude, days);
        if let Some(observations) = self.fresh_entry(&key).await {
            debug!(provider = self.inner.name(), latitude, longitude, "Forecast cache hit");
            return Ok(observations);
        }

        let observations = self.inner.daily_forecast(latitude, longitude, days).await?;
        if !observations.is_empty() {
            self.store(key, observations.clone()).await;
        }
        Ok(observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use good_day_core::errors::ProviderError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ForecastProvider for CountingProvider {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn daily_forecast(
            &self,
            _latitude: f64,
            _longitude: f64,
            days: u32,
        ) -> ProviderResult<Vec<DailyWeatherObservation>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ProviderError::NetworkError("offline".to_owned()));
            }
            Ok((0..days)
                .map(|d| DailyWeatherObservation::new(format!("2025-06-{:02}", d + 1), 70.0, 0.1))
                .collect())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_call_is_served_from_cache() {
        let cache = CachedForecastProvider::new(CountingProvider::default(), Duration::from_secs(60));

        let first = cache.daily_forecast(38.7223, -9.1393, 5).await.unwrap();
        let second = cache.daily_forecast(38.72231, -9.13929, 5).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_expire_after_ttl() {
        let cache = CachedForecastProvider::new(CountingProvider::default(), Duration::from_secs(60));

        cache.daily_forecast(1.0, 2.0, 3).await.unwrap();
        tokio::time::advance(Duration::from_secs(61)).await;
        cache.daily_forecast(1.0, 2.0, 3).await.unwrap();

        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_length_is_part_of_the_key() {
        let cache = CachedForecastProvider::new(CountingProvider::default(), Duration::from_secs(60));

        assert_eq!(cache.daily_forecast(1.0, 2.0, 3).await.unwrap().len(), 3);
        assert_eq!(cache.daily_forecast(1.0, 2.0, 5).await.unwrap().len(), 5);
        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_ttl_disables_caching() {
        let cache = CachedForecastProvider::new(CountingProvider::default(), Duration::ZERO);

        cache.daily_forecast(1.0, 2.0, 3).await.unwrap();
        cache.daily_forecast(1.0, 2.0, 3).await.unwrap();

        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let provider = CountingProvider {
            fail: true,
            ..CountingProvider::default()
        };
        let cache = CachedForecastProvider::new(provider, Duration::from_secs(60));

        assert!(cache.daily_forecast(1.0, 2.0, 3).await.is_err());
        assert!(cache.daily_forecast(1.0, 2.0, 3).await.is_err());
        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_count_never_exceeds_capacity() {
        let cache =
            CachedForecastProvider::with_capacity(CountingProvider::default(), Duration::from_secs(60), 8);

        for i in 0..100 {
            cache.daily_forecast(f64::from(i), 2.0, 3).await.unwrap();
            assert!(cache.len().await <= 8);
        }

        assert_eq!(cache.len().await, 8);
        assert_eq!(cache.capacity().await, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_least_recently_used_window_is_evicted() {
        let cache =
            CachedForecastProvider::with_capacity(CountingProvider::default(), Duration::from_secs(60), 2);

        cache.daily_forecast(1.0, 0.0, 3).await.unwrap();
        cache.daily_forecast(2.0, 0.0, 3).await.unwrap();
        // touch the first window so the second becomes the oldest
        cache.daily_forecast(1.0, 0.0, 3).await.unwrap();
        cache.daily_forecast(3.0, 0.0, 3).await.unwrap();
        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 3);

        cache.daily_forecast(1.0, 0.0, 3).await.unwrap();
        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 3);
        cache.daily_forecast(2.0, 0.0, 3).await.unwrap();
        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_windows_are_swept_on_insert() {
        let cache = CachedForecastProvider::new(CountingProvider::default(), Duration::from_secs(60));

        for i in 0..500 {
            cache.daily_forecast(f64::from(i), 2.0, 3).await.unwrap();
        }
        assert_eq!(cache.len().await, 500);

        tokio::time::advance(Duration::from_secs(3600)).await;
        cache.daily_forecast(-45.0, 2.0, 3).await.unwrap();

        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_window_is_dropped_when_read() {
        let provider = CountingProvider {
            fail: true,
            ..CountingProvider::default()
        };
        let cache = CachedForecastProvider::new(provider, Duration::from_secs(60));
        cache
            .store(
                ForecastKey::new(1.0, 2.0, 3),
                vec![DailyWeatherObservation::new("2025-06-01", 70.0, 0.1)],
            )
            .await;
        assert_eq!(cache.len().await, 1);

        tokio::time::advance(Duration::from_secs(61)).await;

        assert!(cache.daily_forecast(1.0, 2.0, 3).await.is_err());
        assert!(cache.is_empty().await);
    }
}
