//! Fetcher Module
//!
//! Standalone cached lyrics lookup with bounded retry on rate limiting.

mod client;
mod retry;

pub use client::LyricsFetcher;
pub use retry::RetryPolicy;
