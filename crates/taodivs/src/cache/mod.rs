//! Cache backend implementations.
//!
//! Exactly one backend is compiled in, selected by feature flag:
//! - `memory` - in-process LRU cache with lazy TTL expiry
//! - `redis` - Redis via connection manager

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "redis")]
pub mod redis_impl;
