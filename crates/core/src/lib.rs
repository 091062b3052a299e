pub mod cache;
pub mod dividends;
pub mod jobs;
