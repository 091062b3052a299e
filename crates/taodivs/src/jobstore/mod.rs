//! Job store backend implementations.
//!
//! Exactly one backend is compiled in, selected by feature flag:
//! - `inmemory` - HashMap behind a tokio RwLock (tests, local dev)
//! - `sqlite` - durable store via tokio-rusqlite

// The memory store doubles as the test-double store, so it is always
// compiled into test builds.
#[cfg(any(feature = "inmemory", test))]
pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(feature = "inmemory", test))]
pub use memory::MemoryJobStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteJobStore;
