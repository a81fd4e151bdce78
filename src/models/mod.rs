//! Request and Response models for the lyrics API
//!
//! Validated inputs and the DTOs serialized into HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{LyricsQuery, MAX_QUERY_TERMS, NULLISH_QUERIES};
pub use responses::{
    CacheStatsResponse, ErrorResponse, HealthResponse, LyricsResponse, StatsResponse,
};
