//! Application state with trait-object collaborators.
//!
//! This module defines the shared state passed to all request handlers and
//! the factory functions that wire up concrete backends per feature flags.

use std::sync::Arc;

use taodivs_core::dividends::DividendResolver;
use taodivs_core::jobs::{JobContext, JobStore};

use crate::clients::{ChutesClient, DesearchClient, SubtensorClient};
use crate::config::Config;
use crate::dispatch::{QueueDispatcher, StakeWorker};

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Cache features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "memory", feature = "redis"))]
compile_error!("Cannot enable both 'memory' and 'redis' cache features");

#[cfg(not(any(feature = "memory", feature = "redis")))]
compile_error!("Must enable exactly one cache feature: 'memory' or 'redis'");

// Job store features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "sqlite"))]
compile_error!("Cannot enable both 'inmemory' and 'sqlite' job store features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!("Must enable exactly one job store feature: 'inmemory' or 'sqlite'");

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Read-through dividend resolver.
    pub resolver: Arc<DividendResolver>,
    /// Job store, read directly by the job status handler.
    pub job_store: Arc<dyn JobStore>,
    /// Shared secret expected in the `X-API-Key` header.
    pub api_key: Arc<str>,
    /// Subnet queried when the request omits `netuid`.
    pub default_netuid: u16,
    /// Hotkey queried when the request omits `hotkey`.
    pub default_hotkey: Arc<str>,
}

impl AppState {
    /// Wires the resolver, worker, and state around an already-chosen cache
    /// and job store.
    fn build(
        cache: Arc<dyn taodivs_core::cache::Cache>,
        job_store: Arc<dyn JobStore>,
        config: &Config,
    ) -> anyhow::Result<Self> {
        let timeout = config.upstream_timeout();

        let subtensor = Arc::new(SubtensorClient::new(&config.subtensor_url, timeout)?);
        let desearch = Arc::new(DesearchClient::new(
            &config.datura_api_url,
            &config.datura_api_key,
            timeout,
        )?);
        let chutes = Arc::new(ChutesClient::new(
            &config.chutes_api_url,
            &config.chutes_api_key,
            timeout,
        )?);

        let (dispatcher, rx) = QueueDispatcher::new();
        let ctx = JobContext {
            store: job_store.clone(),
            evidence: desearch,
            scorer: chutes,
            actuator: subtensor.clone(),
        };
        StakeWorker::new(ctx, rx).spawn();

        let resolver = Arc::new(DividendResolver::new(
            cache,
            subtensor,
            Arc::new(dispatcher),
            config.cache_ttl(),
        ));

        Ok(Self {
            resolver,
            job_store,
            api_key: config.api_key.as_str().into(),
            default_netuid: config.default_netuid,
            default_hotkey: config.default_hotkey.as_str().into(),
        })
    }
}

// ============================================================================
// Factory functions for different backend combinations
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::jobstore::SqliteJobStore;

    impl AppState {
        /// Creates AppState with a SQLite job store and in-memory cache.
        pub async fn new(config: &Config) -> anyhow::Result<Self> {
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));
            let job_store = Arc::new(SqliteJobStore::new(&config.sqlite_path).await?);

            Self::build(cache, job_store, config)
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::jobstore::SqliteJobStore;

    impl AppState {
        /// Creates AppState with a SQLite job store and Redis cache.
        pub async fn new(config: &Config) -> anyhow::Result<Self> {
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);
            let job_store = Arc::new(SqliteJobStore::new(&config.sqlite_path).await?);

            Self::build(cache, job_store, config)
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::jobstore::MemoryJobStore;

    impl AppState {
        /// Creates AppState with everything in memory (local dev, tests).
        pub async fn new(config: &Config) -> anyhow::Result<Self> {
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));
            let job_store = Arc::new(MemoryJobStore::new());

            Self::build(cache, job_store, config)
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::jobstore::MemoryJobStore;

    impl AppState {
        /// Creates AppState with an in-memory job store and Redis cache.
        pub async fn new(config: &Config) -> anyhow::Result<Self> {
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);
            let job_store = Arc::new(MemoryJobStore::new());

            Self::build(cache, job_store, config)
        }
    }
}
