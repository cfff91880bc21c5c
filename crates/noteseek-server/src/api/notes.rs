//! Notation lookup endpoint

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use noteseek_scrape::{extract_notation, fetch_html, locate, ScrapeError};

use crate::AppState;

/// Request body for POST /api/notes
#[derive(Debug, Deserialize)]
pub struct NotesRequest {
    #[serde(default)]
    pub search_query: Option<String>,
}

/// Handler-level errors, mapped to status codes with a JSON error payload.
#[derive(Debug)]
pub enum ApiError {
    /// `search_query` missing, empty, or whitespace-only
    MissingQuery,
    /// No "Continue reading" anchor on the search results page
    ArticleNotFound,
    /// Outbound fetch failed (transport error or non-2xx from the site)
    Upstream(ScrapeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingQuery => (
                StatusCode::BAD_REQUEST,
                "Please provide a search query in the request body.".to_string(),
            ),
            ApiError::ArticleNotFound => (
                StatusCode::NOT_FOUND,
                "Could not find article for search query.".to_string(),
            ),
            ApiError::Upstream(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// POST /api/notes
///
/// Looks up `search_query` on the notation site, follows the first
/// "Continue reading" link, and returns the article's notation lines as a
/// JSON array of strings.
///
/// A missing `post-content` container is a soft error: the response is still
/// 200 but carries `{"error": "..."}` instead of a line array.
pub async fn extract_notes(
    State(state): State<AppState>,
    Json(request): Json<NotesRequest>,
) -> Result<Response, ApiError> {
    let query = request.search_query.as_deref().map(str::trim).unwrap_or("");
    if query.is_empty() {
        return Err(ApiError::MissingQuery);
    }

    let article_url = locate(&state.client, &state.base_url, query)
        .await
        .map_err(ApiError::Upstream)?
        .ok_or(ApiError::ArticleNotFound)?;

    tracing::info!(url = %article_url, query = %query, "Fetching article");
    let html = fetch_html(&state.client, &article_url)
        .await
        .map_err(ApiError::Upstream)?;

    match extract_notation(&html) {
        Ok(lines) => {
            tracing::info!(lines = lines.len(), "Extracted notation lines");
            Ok(Json(lines).into_response())
        }
        Err(err @ ScrapeError::ContainerNotFound) => {
            tracing::warn!(url = %article_url, "Article has no notes container");
            Ok(Json(json!({ "error": err.to_string() })).into_response())
        }
        Err(other) => Err(ApiError::Upstream(other)),
    }
}
