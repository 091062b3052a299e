//! Pure functions for serializing/deserializing cached values to/from bytes.
//!
//! Dividend values are stored as JSON numbers, keeping cache contents
//! human-readable for debugging with `redis-cli`.

use thiserror::Error;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Serializes a dividend value to JSON bytes.
pub fn serialize_dividend(value: f64) -> Result<Vec<u8>, SerializationError> {
    serde_json::to_vec(&value).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a dividend value.
pub fn deserialize_dividend(bytes: &[u8]) -> Result<f64, SerializationError> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
