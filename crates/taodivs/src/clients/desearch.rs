//! Datura tweet search client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use taodivs_core::jobs::{EvidenceSource, JobError};

/// Tweets fetched per sentiment evaluation.
const TWEET_COUNT: u32 = 10;

#[derive(Debug, Deserialize)]
struct Tweet {
    text: String,
}

/// Client for Datura's basic twitter search.
pub struct DesearchClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DesearchClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl EvidenceSource for DesearchClient {
    async fn fetch_evidence(&self, netuid: u16) -> Result<Vec<String>, JobError> {
        let query = format!("Bittensor netuid {netuid}");
        tracing::debug!(netuid, %query, "Searching tweets");

        let response = self
            .http
            .get(&self.base_url)
            .bearer_auth(&self.api_key)
            .query(&[("query", query.as_str())])
            .query(&[("count", TWEET_COUNT)])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| JobError::Evidence(e.to_string()))?;

        let tweets: Vec<Tweet> = response
            .json()
            .await
            .map_err(|e| JobError::Evidence(e.to_string()))?;

        Ok(tweets.into_iter().map(|t| t.text).collect())
    }
}
