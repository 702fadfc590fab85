//! Caching layer for facility dataset responses.
//!
//! Facility statuses change on the scale of minutes, while a rider may
//! re-search the same station several times in a row. A short TTL cache
//! keyed by the derived search query absorbs the repeats without going
//! back to the three-range fan-out.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::StationName;
use crate::facilities::{FacilityClient, FacilityError, FacilitySearch, FacilitySource};

/// Configuration for the facility cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 256,
        }
    }
}

/// Facility client with response caching.
///
/// Wraps a [`FacilityClient`] and caches complete search results by
/// query. Partial results (ranges that soft-failed) are returned but not
/// cached, so an incomplete row set is never pinned for the TTL.
pub struct CachedFacilityClient {
    client: FacilityClient,
    cache: MokaCache<String, Arc<FacilitySearch>>,
}

impl CachedFacilityClient {
    /// Create a new cached client.
    pub fn new(client: FacilityClient, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, cache }
    }

    /// Number of cached entries.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl FacilitySource for CachedFacilityClient {
    async fn search_by_station_name(
        &self,
        name: &StationName,
    ) -> Result<FacilitySearch, FacilityError> {
        let key = name.search_query();

        if let Some(cached) = self.cache.get(&key).await {
            return Ok((*cached).clone());
        }

        let search = self.client.search_by_station_name(name).await?;

        if search.failed_ranges == 0 {
            self.cache.insert(key, Arc::new(search.clone())).await;
        }

        Ok(search)
    }
}
