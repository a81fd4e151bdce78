//! Lyrics Provider Module
//!
//! The contract the query handler relies on: a song search plus a per-song
//! lyrics lookup. Optional metadata is explicit in the types instead of being
//! discovered at runtime.

mod genius;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ProviderError;

pub use genius::GeniusProvider;

// == Song Model ==
/// A search hit as seen by the rest of the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub title: String,
    pub artist: Artist,
    pub album: Option<Album>,
    /// Release date as displayed by the provider
    pub released_at: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub name: String,
    pub image: Option<String>,
}

impl Song {
    /// Creates a song with only the required fields set.
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: Artist {
                name: artist.into(),
            },
            album: None,
            released_at: None,
            image: None,
        }
    }
}

// == Provider Trait ==
/// Song search and lyrics retrieval backend.
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Returns matching songs, best match first.
    async fn search(&self, query: &str) -> Result<Vec<Song>, ProviderError>;

    /// Returns the full lyrics text for `song`.
    async fn lyrics(&self, song: &Song) -> Result<String, ProviderError>;
}

/// Builds the outbound HTTP client shared by upstream integrations.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    let user_agent = format!("lyrics_proxy/{}", env!("CARGO_PKG_VERSION"));

    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
}
