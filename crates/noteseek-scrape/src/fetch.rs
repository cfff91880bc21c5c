use crate::error::ScrapeError;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = "noteseek/0.1 (keyboard notation lookup)";

/// Timeout for each outbound fetch. The upstream site is occasionally slow;
/// without a bound a stuck fetch would pin its request handler indefinitely.
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Build the shared HTTP client used for all outbound fetches.
pub fn http_client() -> Result<Client, ScrapeError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(ScrapeError::Client)
}

/// Fetch a page and return its body as text.
///
/// Non-2xx statuses are reported as [`ScrapeError::Status`]; connection and
/// timeout failures as [`ScrapeError::Transport`].
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            status,
            url: url.to_string(),
        });
    }

    response
        .text()
        .await
        .map_err(|source| ScrapeError::Transport {
            url: url.to_string(),
            source,
        })
}
