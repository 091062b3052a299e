//! Subtensor sidecar client.
//!
//! Talks to a sidecar that owns the substrate connection and the staking
//! wallet. Dividend reads query the per-subnet dividend map and filter by
//! hotkey locally; stake orders are plain JSON posts and the sidecar's
//! boolean tells whether the extrinsic was accepted.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use taodivs_core::dividends::{DividendSource, SourceError};
use taodivs_core::jobs::{JobError, StakeActuator};

#[derive(Debug, Serialize)]
struct StakeOrder<'a> {
    netuid: u16,
    hotkey: &'a str,
    amount: f64,
}

#[derive(Debug, Deserialize)]
struct StakeOutcome {
    success: bool,
}

/// Client for the subtensor sidecar.
pub struct SubtensorClient {
    http: reqwest::Client,
    base_url: String,
}

impl SubtensorClient {
    /// Creates a client with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns the underlying builder error if the TLS backend cannot be
    /// initialized.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetches the full hotkey -> dividend map for a subnet.
    async fn dividends_for_subnet(&self, netuid: u16) -> Result<HashMap<String, f64>, SourceError> {
        let url = format!("{}/dividends/{}", self.base_url, netuid);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SourceError::Query(e.to_string()))?;

        response
            .json::<HashMap<String, f64>>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }

    async fn submit_order(&self, path: &str, order: StakeOrder<'_>) -> Result<bool, JobError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .http
            .post(&url)
            .json(&order)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| JobError::Actuation(e.to_string()))?;

        let outcome: StakeOutcome = response
            .json()
            .await
            .map_err(|e| JobError::Actuation(e.to_string()))?;

        Ok(outcome.success)
    }
}

#[async_trait]
impl DividendSource for SubtensorClient {
    async fn get_dividend(&self, netuid: u16, hotkey: &str) -> Result<f64, SourceError> {
        tracing::debug!(netuid, hotkey, "Querying dividends");
        let dividends = self.dividends_for_subnet(netuid).await?;
        // A hotkey missing from the subnet map earned nothing
        Ok(dividends.get(hotkey).copied().unwrap_or(0.0))
    }
}

#[async_trait]
impl StakeActuator for SubtensorClient {
    async fn add_stake(&self, netuid: u16, hotkey: &str, amount: f64) -> Result<bool, JobError> {
        tracing::info!(netuid, hotkey, amount, "Submitting stake order");
        self.submit_order(
            "stake",
            StakeOrder {
                netuid,
                hotkey,
                amount,
            },
        )
        .await
    }

    async fn remove_stake(&self, netuid: u16, hotkey: &str, amount: f64) -> Result<bool, JobError> {
        tracing::info!(netuid, hotkey, amount, "Submitting unstake order");
        self.submit_order(
            "unstake",
            StakeOrder {
                netuid,
                hotkey,
                amount,
            },
        )
        .await
    }
}
