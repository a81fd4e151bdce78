//! API Handlers
//!
//! HTTP request handlers for each lyrics proxy endpoint.

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, State},
    http::{header, Method},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::cache::{CacheStore, SharedCache};
use crate::config::Config;
use crate::error::{ApiError, ProviderError, Result};
use crate::fetcher::LyricsFetcher;
use crate::models::{
    CacheStatsResponse, HealthResponse, LyricsQuery, LyricsResponse, StatsResponse,
};
use crate::provider::{build_http_client, GeniusProvider, LyricsProvider};

/// Path prefix of the query endpoint; everything after it is the query.
pub const API_PREFIX: &str = "/api";

/// `Cache-Control` sent with every successful lyrics lookup.
pub const LYRICS_CACHE_CONTROL: &str = "public, s-maxage=86400, stale-while-revalidate=43200";

/// Application state shared across all handlers.
///
/// The query cache and the fetcher's cache are separate stores; nothing is
/// shared between the two lookup paths.
#[derive(Clone)]
pub struct AppState {
    /// Shaped responses of the query endpoint
    pub lyrics_cache: SharedCache<LyricsResponse>,
    /// Song search and lyrics backend
    pub provider: Arc<dyn LyricsProvider>,
    /// Direct lyrics lookup with its own cache
    pub fetcher: LyricsFetcher,
}

impl AppState {
    pub fn new(
        lyrics_cache: CacheStore<LyricsResponse>,
        provider: Arc<dyn LyricsProvider>,
        fetcher: LyricsFetcher,
    ) -> Self {
        Self {
            lyrics_cache: Arc::new(RwLock::new(lyrics_cache)),
            provider,
            fetcher,
        }
    }

    /// Creates an AppState wired to the real upstream services.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        let client = build_http_client(config.http_timeout())?;

        let provider = GeniusProvider::new(
            client.clone(),
            &config.genius_api_url,
            &config.lyrics_api_url,
            config.genius_access_token.clone(),
        );
        let fetcher = LyricsFetcher::new(
            client,
            &config.lyrics_api_url,
            config.fetch_cache_ttl(),
            config.retry_policy(),
        );

        Ok(Self::new(
            CacheStore::init(config.query_cache_ttl()),
            Arc::new(provider),
            fetcher,
        ))
    }
}

/// Handler for `/api/<song>[/<artist>]`, any method.
///
/// Only GET is served. Provider failures of any kind come back as 404.
pub async fn query_handler(
    method: Method,
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response> {
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let raw = uri.path().strip_prefix(API_PREFIX).unwrap_or_default();
    let query = LyricsQuery::from_path(raw)?;
    let key = query.cache_key();

    // Write lock: lookups update stats and may drop an expired entry
    if let Some(cached) = state.lyrics_cache.write().await.get(&key) {
        debug!("Cache hit for '{}'", key);
        return Ok(lyrics_response(cached));
    }

    let response = lookup(state.provider.as_ref(), &query)
        .await
        .map_err(|err| {
            error!("Lyrics fetch failed for '{}': {}", key, err);
            ApiError::NotFound
        })?;

    if response.is_empty() {
        info!("No search results for '{}'", key);
    } else {
        state.lyrics_cache.write().await.set(key, response.clone());
    }

    Ok(lyrics_response(response))
}

/// One search call, then one lyrics call for the first hit.
async fn lookup(
    provider: &dyn LyricsProvider,
    query: &LyricsQuery,
) -> std::result::Result<LyricsResponse, ProviderError> {
    let songs = provider.search(&query.search_term()).await?;

    let Some(song) = songs.into_iter().next() else {
        return Ok(LyricsResponse::default());
    };

    let lyrics = provider.lyrics(&song).await?;
    Ok(LyricsResponse::from_song(&song, Some(lyrics)))
}

fn lyrics_response(body: LyricsResponse) -> Response {
    (
        [
            (header::CACHE_CONTROL, LYRICS_CACHE_CONTROL),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        Json(body),
    )
        .into_response()
}

/// Handler for GET /lyrics/:artist/:song
///
/// Returns the lyrics API payload unchanged.
pub async fn fetch_handler(
    State(state): State<AppState>,
    Path((artist, song)): Path<(String, String)>,
) -> Result<Json<Value>> {
    let payload = state
        .fetcher
        .fetch_lyrics(&song, &artist)
        .await
        .map_err(|err| {
            warn!("Direct lyrics fetch failed for {} - {}: {}", artist, song, err);
            ApiError::from(err)
        })?;

    Ok(Json(payload))
}

/// Handler for GET /stats
///
/// Returns statistics for both caches.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let query_cache = {
        let cache = state.lyrics_cache.read().await;
        CacheStatsResponse::new(&cache.stats(), cache.ttl().as_secs())
    };

    let fetch_cache = {
        let shared = state.fetcher.cache();
        let cache = shared.read().await;
        CacheStatsResponse::new(&cache.stats(), cache.ttl().as_secs())
    };

    Json(StatsResponse {
        query_cache,
        fetch_cache,
    })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
