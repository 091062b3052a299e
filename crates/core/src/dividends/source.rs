use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by a [`DividendSource`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Chain query failed: {0}")]
    Query(String),
    #[error("Chain response decode failed: {0}")]
    Decode(String),
}

/// Authoritative provider of dividend values.
///
/// Implementations query the chain (or a sidecar in front of it); they may
/// be slow and may fail. The resolver maps any failure here to
/// [`DividendError::UpstreamUnavailable`](super::DividendError).
#[async_trait]
pub trait DividendSource: Send + Sync {
    /// Queries the Tao dividend for a given subnet and hotkey.
    ///
    /// A hotkey with no dividend entry on the subnet resolves to `0.0`, not
    /// an error.
    async fn get_dividend(&self, netuid: u16, hotkey: &str) -> Result<f64, SourceError>;
}
