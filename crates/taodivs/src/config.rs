use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret expected in the `X-API-Key` header.
    pub api_key: String,
    /// Cache TTL in seconds (default: 120)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Subnet queried when the request omits `netuid` (default: 18)
    pub default_netuid: u16,
    /// Hotkey queried when the request omits `hotkey`
    pub default_hotkey: String,
    /// Base URL of the subtensor sidecar (default: "http://localhost:9933")
    pub subtensor_url: String,
    /// Timeout applied to all upstream HTTP calls, in seconds (default: 10)
    pub upstream_timeout_seconds: u64,
    /// Datura tweet search endpoint and key
    pub datura_api_url: String,
    pub datura_api_key: String,
    /// Chutes chat-completions endpoint and key
    pub chutes_api_url: String,
    pub chutes_api_key: String,
    /// Path to SQLite database file (default: "taodivs.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `API_KEY` - Shared secret for the `X-API-Key` header (required)
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 120)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `DEFAULT_NETUID` - Fallback subnet ID (default: 18)
    /// - `DEFAULT_HOTKEY` - Fallback hotkey address
    /// - `SUBTENSOR_URL` - Subtensor sidecar base URL
    /// - `UPSTREAM_TIMEOUT_SECONDS` - Upstream HTTP timeout (default: 10)
    /// - `DATURA_API_URL` / `DATURA_API_KEY` - Tweet search service
    /// - `CHUTES_API_URL` / `CHUTES_API_KEY` - LLM sentiment service
    /// - `SQLITE_PATH` - SQLite database path (default: "taodivs.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("API_KEY").map_err(|_| anyhow::anyhow!("API_KEY must be set"))?;

        Ok(Self {
            api_key,
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            default_netuid: env::var("DEFAULT_NETUID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(18),
            default_hotkey: env::var("DEFAULT_HOTKEY")
                .unwrap_or_else(|_| "5FFApaS75bv5pJHfAp2FVLBj9ZaXuFDjEypsaBNc1wCfe52v".to_string()),
            subtensor_url: env::var("SUBTENSOR_URL")
                .unwrap_or_else(|_| "http://localhost:9933".to_string()),
            upstream_timeout_seconds: env::var("UPSTREAM_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            datura_api_url: env::var("DATURA_API_URL")
                .unwrap_or_else(|_| "https://apis.datura.ai/twitter".to_string()),
            datura_api_key: env::var("DATURA_API_KEY").unwrap_or_default(),
            chutes_api_url: env::var("CHUTES_API_URL")
                .unwrap_or_else(|_| "https://llm.chutes.ai/v1/chat/completions".to_string()),
            chutes_api_key: env::var("CHUTES_API_KEY").unwrap_or_default(),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "taodivs.db".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the upstream HTTP timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            api_key: "secret".to_string(),
            cache_ttl_seconds: 600,
            cache_max_entries: 10_000,
            default_netuid: 18,
            default_hotkey: "5FFApaS75bv5pJHfAp2FVLBj9ZaXuFDjEypsaBNc1wCfe52v".to_string(),
            subtensor_url: "http://localhost:9933".to_string(),
            upstream_timeout_seconds: 10,
            datura_api_url: "https://apis.datura.ai/twitter".to_string(),
            datura_api_key: String::new(),
            chutes_api_url: "https://llm.chutes.ai/v1/chat/completions".to_string(),
            chutes_api_key: String::new(),
            sqlite_path: "test.db".to_string(),
            redis_url: "redis://localhost:6379".to_string(),
        }
    }

    #[test]
    fn test_cache_ttl_conversion() {
        let config = base_config();

        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
        assert_eq!(config.upstream_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        env::remove_var("API_KEY");

        assert!(Config::from_env().is_err());
    }
}
