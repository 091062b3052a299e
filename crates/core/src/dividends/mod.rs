//! Read-through resolution of Tao dividend values.
//!
//! The resolver consults the cache first and falls back to the chain on a
//! miss. The chain is the only dependency allowed to fail the read: cache
//! errors degrade to misses, write-back failures are swallowed, and a failed
//! background dispatch never touches the response.

mod error;
mod resolver;
mod source;
mod types;

pub use error::DividendError;
pub use resolver::DividendResolver;
pub use source::{DividendSource, SourceError};
pub use types::DividendResponse;
