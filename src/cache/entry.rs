//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with its value and expiry deadline.
///
/// Timestamps come from `tokio::time::Instant`, so a paused test runtime
/// can move entries past their TTL without sleeping.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Instant at which the entry stops being served
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry that lives for `ttl` from now.
    pub fn new(value: V, ttl: Duration) -> Self {
        let now = Instant::now();

        Self {
            value,
            expires_at: now + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal to
    /// its expiration time.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
