//! Lyrics Proxy - cached lyric lookups over HTTP
//!
//! Searches an external provider for a song, shapes its metadata and lyrics
//! into a JSON response, and keeps results in memory for a fixed TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod provider;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use fetcher::{LyricsFetcher, RetryPolicy};
pub use provider::{LyricsProvider, Song};
pub use tasks::spawn_cleanup_task;
