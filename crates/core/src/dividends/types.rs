use serde::{Deserialize, Serialize};

/// Response payload for a dividend query.
///
/// Built once per request and never persisted; `cached` records whether the
/// value was served from the cache, `stake_tx_triggered` whether a
/// sentiment-staking job was requested alongside the read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendResponse {
    pub netuid: u16,
    pub hotkey: String,
    pub dividend: f64,
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub stake_tx_triggered: bool,
}
