//! Read-through dividend resolver.
//!
//! Orchestrates cache lookup, chain fallback, cache repopulation, and
//! best-effort background dispatch. Only the chain query can fail the
//! caller; every other collaborator degrades to a logged warning.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::{deserialize_dividend, dividend_key, serialize_dividend, Cache};
use crate::jobs::JobDispatcher;

use super::{DividendError, DividendResponse, DividendSource};

/// Coordinates the dividend read path.
///
/// Collaborators are injected explicitly; concrete implementations are
/// chosen at the process entry point.
pub struct DividendResolver {
    cache: Arc<dyn Cache>,
    source: Arc<dyn DividendSource>,
    dispatcher: Arc<dyn JobDispatcher>,
    ttl: Duration,
}

impl DividendResolver {
    /// Creates a new resolver.
    ///
    /// # Arguments
    ///
    /// * `cache` - Cache store consulted before the chain
    /// * `source` - Authoritative dividend source
    /// * `dispatcher` - Background job queue for sentiment staking
    /// * `ttl` - Time-to-live for cached dividend values
    pub fn new(
        cache: Arc<dyn Cache>,
        source: Arc<dyn DividendSource>,
        dispatcher: Arc<dyn JobDispatcher>,
        ttl: Duration,
    ) -> Self {
        Self {
            cache,
            source,
            dispatcher,
            ttl,
        }
    }

    /// Resolves the current dividend for `(netuid, hotkey)`.
    ///
    /// When `trade` is true, a sentiment-staking job is enqueued after the
    /// value is resolved. Dispatch is fire-and-forget: an enqueue failure is
    /// logged and the response still succeeds.
    ///
    /// Concurrent calls for the same key are not coalesced; each races to
    /// the cache and chain independently, which is acceptable with a TTL
    /// short relative to the request rate.
    pub async fn resolve(
        &self,
        netuid: u16,
        hotkey: &str,
        trade: bool,
    ) -> Result<DividendResponse, DividendError> {
        let cache_key = dividend_key(netuid, hotkey);

        // Cache read. Failures and malformed payloads degrade to a miss.
        let mut cached_value = None;
        match self.cache.get(&cache_key).await {
            Ok(Some(bytes)) => match deserialize_dividend(&bytes) {
                Ok(value) => {
                    tracing::trace!(netuid, hotkey, "Cache hit for dividend");
                    cached_value = Some(value);
                }
                Err(err) => {
                    tracing::warn!(
                        netuid,
                        hotkey,
                        error = %err,
                        "Cached dividend payload malformed, treating as miss"
                    );
                }
            },
            Ok(None) => {
                tracing::debug!(netuid, hotkey, "Cache miss for dividend");
            }
            Err(err) => {
                tracing::warn!(
                    netuid,
                    hotkey,
                    error = %err,
                    "Cache read failed, falling back to chain"
                );
            }
        }

        let cached = cached_value.is_some();
        let dividend = match cached_value {
            Some(value) => value,
            None => self
                .source
                .get_dividend(netuid, hotkey)
                .await
                .map_err(|err| {
                    tracing::error!(netuid, hotkey, error = %err, "Chain query failed");
                    DividendError::UpstreamUnavailable(err.to_string())
                })?,
        };

        // Write-back also runs on hits, refreshing the TTL on every
        // successful read. The cache is an optimization: a failure here must
        // never fail or delay the response.
        match serialize_dividend(dividend) {
            Ok(bytes) => {
                if let Err(err) = self.cache.set(&cache_key, &bytes, Some(self.ttl)).await {
                    tracing::warn!(netuid, hotkey, error = %err, "Failed to cache dividend");
                }
            }
            Err(err) => {
                tracing::warn!(netuid, hotkey, error = %err, "Failed to serialize dividend");
            }
        }

        if trade {
            match self.dispatcher.enqueue(netuid, hotkey).await {
                Ok(job_id) => {
                    tracing::info!(netuid, hotkey, %job_id, "Sentiment staking job enqueued");
                }
                Err(err) => {
                    tracing::error!(
                        netuid,
                        hotkey,
                        error = %err,
                        "Failed to enqueue sentiment staking job"
                    );
                }
            }
        }

        Ok(DividendResponse {
            netuid,
            hotkey: hotkey.to_string(),
            dividend,
            cached,
            stake_tx_triggered: trade,
        })
    }
}
