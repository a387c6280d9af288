//! Translation loading metrics.
//!
//! Counts cache behaviour, bundle fetches and the degradation steps taken
//! when bundles are missing.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters shared by a loader and the translators it hands out.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of loads answered from the cache
    cache_hits: AtomicUsize,

    /// Number of loads that had to fetch
    cache_misses: AtomicUsize,

    /// Number of bundle fetches attempted (including fallbacks)
    fetch_attempts: AtomicUsize,

    /// Number of bundle fetches that failed
    fetch_failures: AtomicUsize,

    /// Loads answered with the registered fallback locale's bundle
    fallback_served: AtomicUsize,

    /// Loads answered with the default locale's bundle
    default_served: AtomicUsize,

    /// Loads where every attempt failed and an empty bundle was returned
    empty_served: AtomicUsize,

    /// Keys rendered raw because the bundle lacked them
    missing_keys: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fetch(&self) {
        self.fetch_attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fetch_failure(&self) {
        self.fetch_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback_served(&self) {
        self.fallback_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_default_served(&self) {
        self.default_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_empty_served(&self) {
        self.empty_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> usize {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn fetch_attempts(&self) -> usize {
        self.fetch_attempts.load(Ordering::Relaxed)
    }

    pub fn fetch_failures(&self) -> usize {
        self.fetch_failures.load(Ordering::Relaxed)
    }

    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.cache_hits();
        let misses = self.cache_misses();
        let total_loads = hits + misses;
        let cache_hit_rate = if total_loads > 0 {
            (hits as f64 / total_loads as f64) * 100.0
        } else {
            0.0
        };

        let attempts = self.fetch_attempts();
        let failures = self.fetch_failures();
        let fetch_success_rate = if attempts > 0 {
            (attempts.saturating_sub(failures) as f64 / attempts as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            cache_hits: hits,
            cache_misses: misses,
            cache_hit_rate,
            fetch_attempts: attempts,
            fetch_failures: failures,
            fetch_success_rate,
            fallback_served: self.fallback_served.load(Ordering::Relaxed),
            default_served: self.default_served.load(Ordering::Relaxed),
            empty_served: self.empty_served.load(Ordering::Relaxed),
            missing_keys: self.missing_keys(),
        }
    }
}

/// Snapshot of the translation counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub cache_hits: usize,
    pub cache_misses: usize,

    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,

    pub fetch_attempts: usize,
    pub fetch_failures: usize,

    /// Fetch success rate as a percentage (0-100)
    pub fetch_success_rate: f64,

    pub fallback_served: usize,
    pub default_served: usize,
    pub empty_served: usize,
    pub missing_keys: usize,
}
