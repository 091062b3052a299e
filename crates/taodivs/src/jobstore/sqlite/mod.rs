//! SQLite job store backend.

mod error;
mod schema;
mod store;

pub use store::SqliteJobStore;
