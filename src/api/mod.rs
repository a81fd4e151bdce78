//! API Module
//!
//! HTTP handlers and routing for the lyrics proxy.
//!
//! # Endpoints
//! - `GET /api/<song>[/<artist>]` - Search-backed lookup with shaped metadata
//! - `GET /lyrics/:artist/:song` - Raw payload from the public lyrics API
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
