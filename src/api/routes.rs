//! API Routes
//!
//! Configures the Axum router with all lyrics proxy endpoints.

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use super::handlers::{fetch_handler, health_handler, query_handler, stats_handler, AppState};
use crate::error::ApiError;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `ANY /api/<song>[/<artist>]` - Cached song search (GET only)
/// - `GET /lyrics/:artist/:song` - Direct lyrics fetch
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Panic catcher: any panic becomes a JSON 500
/// - CORS: Allows any origin on `/lyrics`, `/stats` and `/health`
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    // `layer` only wraps routes registered before it, so the `/api` routes
    // stay outside CORS and answer OPTIONS with their own 405.
    // `/api` and `/api/` route to the same handler so an empty query gets a
    // 400 instead of falling through to the 404 fallback.
    Router::new()
        .route("/lyrics/:artist/:song", get(fetch_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .route("/api", any(query_handler))
        .route("/api/", any(query_handler))
        .route("/api/*query", any(query_handler))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Server error: {}", detail);

    ApiError::Internal.into_response()
}
