//! Caching layer for directory responses.
//!
//! Switching districts on the map re-requests the same region listings
//! over and over. Region contents only change when the operator edits the
//! dataset, so a short TTL keeps the picker responsive without a refetch
//! per switch.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use super::client::{DirectoryClient, RegionStationsResponse};
use super::error::DirectoryError;

/// Cached region listing, shared between callers.
type RegionEntry = Arc<RegionStationsResponse>;

/// Configuration for the directory cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached regions.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 64,
        }
    }
}

/// Cache for region listings, keyed by region name.
pub struct DirectoryCache {
    regions: MokaCache<String, RegionEntry>,
}

impl DirectoryCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let regions = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { regions }
    }

    /// Get a cached region listing.
    pub async fn get_region(&self, region: &str) -> Option<RegionEntry> {
        self.regions.get(region).await
    }

    /// Insert a region listing into the cache.
    pub async fn insert_region(&self, region: String, entry: RegionEntry) {
        self.regions.insert(region, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.regions.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.regions.invalidate_all();
    }
}

/// Directory client with caching.
///
/// Wraps a `DirectoryClient` and caches region listings. Lookup failures
/// are not cached, so a region that appears in the dataset later is picked
/// up on the next request.
pub struct CachedDirectory {
    client: DirectoryClient,
    cache: DirectoryCache,
}

impl CachedDirectory {
    /// Create a new cached directory.
    pub fn new(client: DirectoryClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: DirectoryCache::new(cache_config),
        }
    }

    /// Fetch the stations for a region, using cache if available.
    pub async fn stations_in_region(&self, region: &str) -> Result<RegionEntry, DirectoryError> {
        if let Some(cached) = self.cache.get_region(region).await {
            return Ok(cached);
        }

        let listing = self.client.fetch_region(region).await?;
        let entry = Arc::new(listing);

        self.cache
            .insert_region(region.to_string(), entry.clone())
            .await;

        Ok(entry)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &DirectoryClient {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
