//! Cache Module
//!
//! Provides in-memory caching with fixed TTL expiration.

mod entry;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

/// A cache store shared between handlers and background tasks.
pub type SharedCache<V> = Arc<RwLock<CacheStore<V>>>;

// == Public Constants ==
/// TTL in seconds for shaped query responses
pub const QUERY_CACHE_TTL_SECS: u64 = 1800;

/// TTL in seconds for raw fetch payloads
pub const FETCH_CACHE_TTL_SECS: u64 = 3600;
