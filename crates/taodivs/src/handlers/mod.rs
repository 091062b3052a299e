pub mod auth;
pub mod dividends;
pub mod error;
pub mod health;
pub mod jobs;

pub use error::AppError;
