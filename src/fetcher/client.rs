//! Lyrics Fetcher Module
//!
//! Direct lyrics lookup against a `/v1/{artist}/{song}` API, cached for the
//! fetcher's own TTL and retried when the API rate limits.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::RetryPolicy;
use crate::cache::{CacheStore, SharedCache};
use crate::error::FetchError;

// == Lyrics Fetcher ==
/// Cached client for the public lyrics API.
///
/// Payloads are stored unshaped; callers get whatever JSON the API returned.
#[derive(Clone)]
pub struct LyricsFetcher {
    client: reqwest::Client,
    base_url: String,
    cache: SharedCache<Value>,
    retry: RetryPolicy,
}

impl LyricsFetcher {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        cache_ttl: Duration,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: Arc::new(RwLock::new(CacheStore::init(cache_ttl))),
            retry,
        }
    }

    /// Handle to the fetcher's private cache.
    pub fn cache(&self) -> SharedCache<Value> {
        self.cache.clone()
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    // == Cache Key ==
    /// Builds the cache key for a lookup.
    ///
    /// The key is `artist-song` even though arguments arrive as
    /// `(song, artist)`; existing keys depend on this order.
    pub fn cache_key(song: &str, artist: &str) -> String {
        format!("{}-{}", artist, song).to_lowercase()
    }

    // == Fetch Lyrics ==
    /// Returns the cached payload for `(song, artist)` or fetches it.
    ///
    /// A 429 sleeps per the retry policy and starts over, cache check
    /// included. Every other failure is returned untouched.
    pub async fn fetch_lyrics(&self, song: &str, artist: &str) -> Result<Value, FetchError> {
        let key = Self::cache_key(song, artist);
        let mut retry = 0u32;

        loop {
            if let Some(cached) = self.cache.write().await.get(&key) {
                debug!("Cache hit for '{}'", key);
                return Ok(cached);
            }

            let url = format!(
                "{}/v1/{}/{}",
                self.base_url,
                urlencoding::encode(artist),
                urlencoding::encode(song)
            );
            debug!("Cache miss for '{}', requesting {}", key, url);

            let response = self.client.get(&url).send().await?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                match self.retry.delay_for(retry) {
                    Some(delay) => {
                        warn!(
                            "Rate limit hit for '{}', retrying in {}ms",
                            key,
                            delay.as_millis()
                        );
                        tokio::time::sleep(delay).await;
                        retry += 1;
                        continue;
                    }
                    None => {
                        let attempts = self.retry.max_attempts();
                        warn!("Giving up on '{}' after {} rate limited attempts", key, attempts);
                        return Err(FetchError::RateLimited { attempts });
                    }
                }
            }

            if !status.is_success() {
                return Err(FetchError::Status(status));
            }

            let bytes = response.bytes().await?;
            let payload: Value = serde_json::from_slice(&bytes)?;

            self.cache.write().await.set(key, payload.clone());
            return Ok(payload);
        }
    }
}
