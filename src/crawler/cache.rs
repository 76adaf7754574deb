//! Page cache implementation
//!
//! A bounded, time-expiring cache of fetched page bodies keyed by URL. The
//! cache is shared between concurrent crawls, so every operation takes an
//! internal lock that is never held across an await point.

use crate::config::CacheConfig;
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Longest TTL honored (one year)
const MAX_TTL_SECONDS: u64 = 365 * 24 * 60 * 60;

/// A cached page body along with the time it was stored
#[derive(Debug, Clone)]
struct CachedPage {
    body: String,
    inserted_at: DateTime<Utc>,
}

impl CachedPage {
    fn new(body: String) -> Self {
        Self {
            body,
            inserted_at: Utc::now(),
        }
    }

    /// Checks if the entry has outlived the TTL
    fn is_stale(&self, ttl: Duration) -> bool {
        Utc::now() - self.inserted_at > ttl
    }
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<String, CachedPage>,
    /// Insertion order, oldest first
    order: VecDeque<String>,
}

impl CacheInner {
    fn remove(&mut self, url: &str) {
        if self.entries.remove(url).is_some() {
            self.order.retain(|key| key != url);
        }
    }
}

/// Snapshot of cache effectiveness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

impl CacheStats {
    /// Fraction of lookups served from the cache, in `0.0..=1.0`
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, hitRate={:.1}%, size={}",
            self.hits,
            self.misses,
            self.hit_rate() * 100.0,
            self.size
        )
    }
}

/// Bounded page cache with per-entry TTL and oldest-first eviction
#[derive(Debug)]
pub struct PageCache {
    inner: Mutex<CacheInner>,
    max_entries: usize,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PageCache {
    /// Creates a new cache
    ///
    /// # Arguments
    ///
    /// * `max_entries` - Entries kept before the oldest is evicted
    /// * `ttl` - Time an entry stays valid after insertion
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            max_entries: max_entries.max(1),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Creates a cache from the `[cache]` configuration section
    pub fn from_config(config: &CacheConfig) -> Self {
        let ttl = Duration::seconds(config.ttl_seconds.min(MAX_TTL_SECONDS) as i64);
        Self::new(config.max_entries, ttl)
    }

    /// Looks up a page, dropping it if it has expired
    pub fn get(&self, url: &str) -> Option<String> {
        let mut inner = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let stale = inner
            .entries
            .get(url)
            .map(|page| page.is_stale(self.ttl));
        let fresh = match stale {
            Some(false) => inner.entries.get(url).map(|page| page.body.clone()),
            Some(true) => {
                inner.remove(url);
                None
            }
            None => None,
        };

        if fresh.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        fresh
    }

    /// Stores a page, evicting the oldest entries once the cache is full
    pub fn put(&self, url: &str, body: String) {
        let mut inner = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        inner.remove(url);
        while inner.entries.len() >= self.max_entries {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            inner.entries.remove(&oldest);
        }

        inner.order.push_back(url.to_string());
        inner.entries.insert(url.to_string(), CachedPage::new(body));
    }

    /// Number of entries currently held, including expired ones not yet dropped
    pub fn len(&self) -> usize {
        match self.inner.lock() {
            Ok(guard) => guard.entries.len(),
            Err(poisoned) => poisoned.into_inner().entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            size: self.len(),
        }
    }

    /// Removes every entry and resets the counters
    pub fn clear(&self) {
        let mut inner = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner.entries.clear();
        inner.order.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
