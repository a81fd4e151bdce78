//! Genius-backed provider
//!
//! Song search goes through the Genius search API. Lyrics text is taken
//! verbatim from a lyrics.ovh compatible endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{Album, Artist, LyricsProvider, Song};
use crate::error::ProviderError;

#[derive(Deserialize, Debug)]
struct SearchEnvelope {
    response: SearchBody,
}

#[derive(Deserialize, Debug)]
struct SearchBody {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Deserialize, Debug)]
struct SearchHit {
    #[serde(rename = "type")]
    kind: Option<String>,
    result: Option<GeniusSong>,
}

#[derive(Deserialize, Debug)]
struct GeniusSong {
    title: Option<String>,
    primary_artist: Option<GeniusArtist>,
    album: Option<GeniusAlbum>,
    release_date_for_display: Option<String>,
    song_art_image_url: Option<String>,
    header_image_url: Option<String>,
}

#[derive(Deserialize, Debug)]
struct GeniusArtist {
    name: Option<String>,
}

#[derive(Deserialize, Debug)]
struct GeniusAlbum {
    name: Option<String>,
    cover_art_url: Option<String>,
}

#[derive(Deserialize, Debug)]
struct LyricsBody {
    lyrics: Option<String>,
}

impl GeniusSong {
    /// Converts into a [`Song`], or `None` when title or artist is missing.
    fn into_song(self) -> Option<Song> {
        let title = self.title.filter(|t| !t.is_empty())?;
        let artist = self.primary_artist.and_then(|a| a.name)?;

        let album = self.album.and_then(|album| {
            album.name.map(|name| Album {
                name,
                image: album.cover_art_url,
            })
        });

        Some(Song {
            title,
            artist: Artist { name: artist },
            album,
            released_at: self.release_date_for_display,
            image: self.song_art_image_url.or(self.header_image_url),
        })
    }
}

/// [`LyricsProvider`] over HTTP.
#[derive(Clone)]
pub struct GeniusProvider {
    client: reqwest::Client,
    search_url: String,
    lyrics_url: String,
    access_token: Option<String>,
}

impl GeniusProvider {
    pub fn new(
        client: reqwest::Client,
        search_url: &str,
        lyrics_url: &str,
        access_token: Option<String>,
    ) -> Self {
        Self {
            client,
            search_url: search_url.trim_end_matches('/').to_string(),
            lyrics_url: lyrics_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }
}

#[async_trait]
impl LyricsProvider for GeniusProvider {
    async fn search(&self, query: &str) -> Result<Vec<Song>, ProviderError> {
        let url = format!("{}/search", self.search_url);
        debug!("Searching songs for '{}'", query);

        let mut request = self.client.get(&url).query(&[("q", query)]);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let envelope: SearchEnvelope = response.json().await?;
        let total = envelope.response.hits.len();

        let songs: Vec<Song> = envelope
            .response
            .hits
            .into_iter()
            .filter(|hit| hit.kind.as_deref().map_or(true, |kind| kind == "song"))
            .filter_map(|hit| hit.result)
            .filter_map(GeniusSong::into_song)
            .collect();

        if songs.len() < total {
            warn!("Dropped {} incomplete search hits", total - songs.len());
        }

        Ok(songs)
    }

    async fn lyrics(&self, song: &Song) -> Result<String, ProviderError> {
        let url = format!(
            "{}/v1/{}/{}",
            self.lyrics_url,
            urlencoding::encode(&song.artist.name),
            urlencoding::encode(&song.title)
        );
        debug!("Fetching lyrics for {} - {}", song.artist.name, song.title);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let body: LyricsBody = response.json().await?;
        body.lyrics
            .ok_or_else(|| ProviderError::Malformed("missing `lyrics` field".to_string()))
    }
}
