//! Chutes LLM sentiment client.
//!
//! Sends a single-integer sentiment prompt over the OpenAI-style chat
//! completions API and parses the completion as an `i32`. Range validation
//! lives in the job runner; this client only guarantees "some integer".

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use taodivs_core::jobs::{JobError, SentimentScorer};

const MODEL: &str = "unsloth/Llama-3.2-3B-Instruct";

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: String,
}

/// Client for the Chutes chat completions API.
pub struct ChutesClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl ChutesClient {
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
            api_key: api_key.into(),
        })
    }

    fn sentiment_prompt(tweets: &[String]) -> String {
        let tweets_text = tweets.join("\n");
        format!(
            "You are a sentiment analysis expert. Given the following tweets about a blockchain subnet, \
             analyze the overall sentiment and respond with a single integer between -100 (extremely negative) \
             and +100 (extremely positive). Do not explain your answer. Only output the integer.\n\n\
             Tweets:\n{tweets_text}\n\nSentiment score:"
        )
    }
}

#[async_trait]
impl SentimentScorer for ChutesClient {
    async fn score(&self, evidence: &[String]) -> Result<i32, JobError> {
        let payload = json!({
            "model": MODEL,
            "messages": [{"role": "user", "content": Self::sentiment_prompt(evidence)}],
            "stream": false,
            "max_tokens": 1024,
            "temperature": 0.7,
        });

        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| JobError::Scoring(e.to_string()))?;

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| JobError::Scoring(e.to_string()))?;

        let content = chat
            .choices
            .first()
            .map(|c| c.message.content.trim())
            .ok_or_else(|| JobError::Scoring("empty completion".to_string()))?;

        content
            .parse::<i32>()
            .map_err(|_| JobError::Scoring(format!("unexpected completion: {content}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_tweets() {
        let tweets = vec!["great subnet".to_string(), "going down".to_string()];

        let prompt = ChutesClient::sentiment_prompt(&tweets);

        assert!(prompt.contains("great subnet\ngoing down"));
        assert!(prompt.ends_with("Sentiment score:"));
    }
}
