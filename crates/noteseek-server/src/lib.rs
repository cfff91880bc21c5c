//! noteseek-server library - HTTP wrapper around the scraping pipeline
//!
//! The router is constructed explicitly and handed to the startup code;
//! there is no ambient server singleton.

use axum::Router;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Shared outbound HTTP client
    pub client: reqwest::Client,
    /// Base URL of the notation site (overridable for tests)
    pub base_url: String,
}

impl AppState {
    /// Create new application state
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::post;

    Router::new()
        .route("/api/notes", post(api::extract_notes))
        .merge(api::health_routes())
        .with_state(state)
}
