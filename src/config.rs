//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{FETCH_CACHE_TTL_SECS, QUERY_CACHE_TTL_SECS};
use crate::fetcher::RetryPolicy;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for the query handler cache
    pub query_cache_ttl: u64,
    /// TTL in seconds for the fetch helper cache
    pub fetch_cache_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Base URL of the song search API
    pub genius_api_url: String,
    /// Bearer token for the song search API, if any
    pub genius_access_token: Option<String>,
    /// Base URL of the public lyrics API (`/v1/{artist}/{song}`)
    pub lyrics_api_url: String,
    /// Retry attempts after a 429 from the lyrics API
    pub fetch_max_retries: u32,
    /// Delay before the first retry, doubled on each further one
    pub fetch_base_delay_ms: u64,
    /// Outbound HTTP request timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `QUERY_CACHE_TTL` - Query cache TTL in seconds (default: 1800)
    /// - `FETCH_CACHE_TTL` - Fetch cache TTL in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `GENIUS_API_URL` - Song search API (default: https://api.genius.com)
    /// - `GENIUS_ACCESS_TOKEN` - Song search API token (default: unset)
    /// - `LYRICS_API_URL` - Lyrics API (default: https://api.lyrics.ovh)
    /// - `FETCH_MAX_RETRIES` - Retries on rate limiting (default: 3)
    /// - `FETCH_BASE_DELAY_MS` - First retry delay (default: 1000)
    /// - `HTTP_TIMEOUT_SECS` - Outbound request timeout (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_var("SERVER_PORT", defaults.server_port),
            query_cache_ttl: parse_var("QUERY_CACHE_TTL", defaults.query_cache_ttl),
            fetch_cache_ttl: parse_var("FETCH_CACHE_TTL", defaults.fetch_cache_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL", defaults.cleanup_interval),
            genius_api_url: env::var("GENIUS_API_URL").unwrap_or(defaults.genius_api_url),
            genius_access_token: env::var("GENIUS_ACCESS_TOKEN")
                .ok()
                .filter(|token| !token.is_empty()),
            lyrics_api_url: env::var("LYRICS_API_URL").unwrap_or(defaults.lyrics_api_url),
            fetch_max_retries: parse_var("FETCH_MAX_RETRIES", defaults.fetch_max_retries),
            fetch_base_delay_ms: parse_var("FETCH_BASE_DELAY_MS", defaults.fetch_base_delay_ms),
            http_timeout: parse_var("HTTP_TIMEOUT_SECS", defaults.http_timeout),
        }
    }

    pub fn query_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.query_cache_ttl)
    }

    pub fn fetch_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.fetch_cache_ttl)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.fetch_max_retries,
            base_delay_ms: self.fetch_base_delay_ms,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        let retry = RetryPolicy::default();

        Self {
            server_port: 3000,
            query_cache_ttl: QUERY_CACHE_TTL_SECS,
            fetch_cache_ttl: FETCH_CACHE_TTL_SECS,
            cleanup_interval: 60,
            genius_api_url: "https://api.genius.com".to_string(),
            genius_access_token: None,
            lyrics_api_url: "https://api.lyrics.ovh".to_string(),
            fetch_max_retries: retry.max_retries,
            fetch_base_delay_ms: retry.base_delay_ms,
            http_timeout: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.query_cache_ttl(), Duration::from_secs(1800));
        assert_eq!(config.fetch_cache_ttl(), Duration::from_secs(3600));
        assert!(config.genius_access_token.is_none());
    }

    #[test]
    fn test_retry_policy_from_config() {
        let config = Config {
            fetch_max_retries: 5,
            fetch_base_delay_ms: 250,
            ..Config::default()
        };
        let policy = config.retry_policy();
        assert_eq!(policy.max_retries, 5);
        assert_eq!(policy.base_delay_ms, 250);
    }

    #[test]
    fn test_parse_var_falls_back_on_garbage() {
        env::set_var("LYRICS_PROXY_TEST_GARBAGE", "not-a-number");
        assert_eq!(parse_var("LYRICS_PROXY_TEST_GARBAGE", 42u64), 42);
        env::remove_var("LYRICS_PROXY_TEST_GARBAGE");
    }
}
