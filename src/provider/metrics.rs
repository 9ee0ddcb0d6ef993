//! Registry cache metrics.
//!
//! Tracks how each of the registry's caches is being satisfied: hits,
//! misses that published a new value, and misses that lost a first-access
//! race and had their value discarded.

use super::cache::Outcome;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for a single cache.
#[derive(Debug, Default)]
pub struct CacheCounters {
    /// Lookups answered by an already published value
    hits: AtomicUsize,

    /// Lookups that built and published a new value
    published: AtomicUsize,

    /// Lookups that built a value but lost the race to publish it
    discarded: AtomicUsize,
}

impl CacheCounters {
    /// Record how a lookup was satisfied.
    pub fn record(&self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Hit => &self.hits,
            Outcome::Published => &self.published,
            Outcome::Discarded => &self.discarded,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn published(&self) -> usize {
        self.published.load(Ordering::Relaxed)
    }

    pub fn discarded(&self) -> usize {
        self.discarded.load(Ordering::Relaxed)
    }

    /// Snapshot these counters.
    pub fn report(&self) -> CacheReport {
        let hits = self.hits();
        let published = self.published();
        let discarded = self.discarded();
        let lookups = hits + published + discarded;
        let hit_rate = if lookups > 0 {
            (hits as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        CacheReport {
            hits,
            published,
            discarded,
            hit_rate,
        }
    }
}

/// Per-registry metrics, one set of counters per cache.
#[derive(Debug, Default)]
pub struct RegistryMetrics {
    pub tag_sets: CacheCounters,
    pub providers: CacheCounters,
    pub resources: CacheCounters,
}

impl RegistryMetrics {
    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            tag_sets: self.tag_sets.report(),
            providers: self.providers.report(),
            resources: self.resources.report(),
        }
    }
}

/// Snapshot of one cache's counters.
#[derive(Debug, Clone, Serialize)]
pub struct CacheReport {
    pub hits: usize,
    pub published: usize,
    pub discarded: usize,

    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,
}

/// Snapshot of all registry cache counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub tag_sets: CacheReport,
    pub providers: CacheReport,
    pub resources: CacheReport,
}
