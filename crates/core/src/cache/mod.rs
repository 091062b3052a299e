mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::dividend_key;
pub use serialization::{deserialize_dividend, serialize_dividend, SerializationError};
pub use traits::Cache;
