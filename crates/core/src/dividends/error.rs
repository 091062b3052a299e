use thiserror::Error;

/// Errors surfaced to callers of [`DividendResolver::resolve`].
///
/// Cache and dispatch failures are absorbed inside the resolver and only
/// show up as `tracing` warnings; the chain is the sole source of truth, so
/// its failure is the one condition a caller must see.
///
/// [`DividendResolver::resolve`]: super::DividendResolver::resolve
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DividendError {
    #[error("Failed to query blockchain: {0}")]
    UpstreamUnavailable(String),
}
