use reqwest::StatusCode;
use thiserror::Error;

/// Errors from the fetch and extraction pipeline.
///
/// "No article found" is not an error — [`crate::locate`] reports it as
/// `Ok(None)` so callers can distinguish a clean miss from a failure.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("invalid search URL: {0}")]
    InvalidUrl(String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("Could not find notes container in the article.")]
    ContainerNotFound,
}
