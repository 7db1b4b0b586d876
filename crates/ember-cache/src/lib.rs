//! In-memory resource cache keyed by canonical URL.
//!
//! Freshness decisions come entirely from the expiration stamped on each
//! `ResourceResponse`; expired entries are retained and surfaced so the
//! loader can revalidate them conditionally instead of refetching.

use ember_core::EmberError;
use ember_core::EmberResult;
use ember_net::ResourceResponse;
use ember_net::ResourceUrl;
use std::collections::HashMap;

/// Resource cache configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub max_entries: usize,
    pub ephemeral: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 512,
            ephemeral: false,
        }
    }
}

/// One cached resource: the response record plus its body bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedResource {
    pub response: ResourceResponse,
    pub body: Vec<u8>,
    stored_sequence: u64,
}

/// Outcome of a cache probe at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup<'a> {
    Miss,
    Fresh(&'a CachedResource),
    MustRevalidate(&'a CachedResource),
}

/// Cache telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
}

/// Bounded in-memory resource cache with oldest-store eviction.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceCache {
    config: CacheConfig,
    entries: HashMap<String, CachedResource>,
    next_sequence: u64,
}

impl MemoryResourceCache {
    pub fn new(config: CacheConfig) -> EmberResult<Self> {
        if config.max_entries == 0 {
            return Err(EmberError::new(
                "cache.capacity_invalid",
                "resource cache capacity must be at least one entry",
            ));
        }

        Ok(Self {
            config,
            entries: HashMap::new(),
            next_sequence: 0,
        })
    }

    /// Stores a response body under the response's canonical URL.
    ///
    /// Refuses in ephemeral mode so callers fall through to the network,
    /// and refuses statuses a cache may not store by default.
    pub fn store(&mut self, response: ResourceResponse, body: Vec<u8>) -> EmberResult<()> {
        if self.config.ephemeral {
            return Err(EmberError::new(
                "cache.ephemeral_mode",
                "resource caching is disabled in ephemeral mode",
            ));
        }

        if !response.status().allows_caching() {
            return Err(EmberError::new(
                "cache.status_uncacheable",
                format!(
                    "status {} is not cacheable by default",
                    response.status().as_u16()
                ),
            ));
        }

        let key = response.url().cache_key().to_owned();
        if !self.entries.contains_key(&key) && self.entries.len() >= self.config.max_entries {
            self.evict_oldest();
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.insert(
            key,
            CachedResource {
                response,
                body,
                stored_sequence: sequence,
            },
        );

        Ok(())
    }

    pub fn lookup(&self, url: &ResourceUrl, now: f64) -> CacheLookup<'_> {
        match self.entries.get(url.cache_key()) {
            None => CacheLookup::Miss,
            Some(entry) if entry.response.is_fresh_at(now) => CacheLookup::Fresh(entry),
            Some(entry) => CacheLookup::MustRevalidate(entry),
        }
    }

    pub fn evict(&mut self, url: &ResourceUrl) -> bool {
        self.entries.remove(url.cache_key()).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
        }
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.stored_sequence)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}
