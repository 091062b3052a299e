//! HTTP clients for the external collaborators.
//!
//! Each client implements one or two of the collaborator traits from
//! `taodivs_core`: the subtensor sidecar serves dividend reads and stake
//! orders, Datura serves tweet search, Chutes serves sentiment scoring.

mod chutes;
mod desearch;
mod subtensor;

pub use chutes::ChutesClient;
pub use desearch::DesearchClient;
pub use subtensor::SubtensorClient;
