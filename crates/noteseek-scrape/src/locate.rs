use crate::error::ScrapeError;
use crate::fetch;
use reqwest::{Client, Url};
use scraper::{Html, Selector};

/// Link text that marks a search result's full-article link on noobnotes.net.
pub const ARTICLE_LINK_TEXT: &str = "Continue reading";

/// Locate the full-article URL for a search query.
///
/// Issues one GET to the site's search endpoint and scans the result page
/// for the first "Continue reading" anchor. Returns `Ok(None)` when no
/// anchor matches — including when the body is empty or not HTML at all.
pub async fn locate(
    client: &Client,
    base_url: &str,
    query: &str,
) -> Result<Option<String>, ScrapeError> {
    let url = search_url(base_url, query)?;

    tracing::info!(url = %url, "Fetching search results");
    let html = fetch::fetch_html(client, url.as_str()).await?;
    tracing::debug!(bytes = html.len(), "Received search HTML");

    Ok(find_article_link(&html))
}

/// Build the search URL: `<base>/?s=<urlencoded-query>&submit=Go`.
pub fn search_url(base_url: &str, query: &str) -> Result<Url, ScrapeError> {
    Url::parse_with_params(base_url, &[("s", query), ("submit", "Go")])
        .map_err(|e| ScrapeError::InvalidUrl(e.to_string()))
}

/// Scan all anchors in document order and return the href of the first whose
/// trimmed visible text equals [`ARTICLE_LINK_TEXT`] exactly.
///
/// Anchors without an href attribute are skipped rather than returned as an
/// empty URL. No partial matches.
pub fn find_article_link(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let anchor_sel = Selector::parse("a").expect("valid selector");

    for anchor in document.select(&anchor_sel) {
        let text: String = anchor.text().collect();
        if text.trim() != ARTICLE_LINK_TEXT {
            continue;
        }
        if let Some(href) = anchor.value().attr("href") {
            return Some(href.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_url("https://noobnotes.net", "happy birthday").unwrap();
        assert_eq!(
            url.as_str(),
            "https://noobnotes.net/?s=happy+birthday&submit=Go"
        );
    }

    #[test]
    fn test_no_matching_anchor() {
        let html = r#"
        <html><body>
        <a href="/about">About</a>
        <a href="/song-1">Happy Birthday - traditional</a>
        </body></html>
        "#;
        assert_eq!(find_article_link(html), None);
    }

    #[test]
    fn test_single_matching_anchor() {
        let html = r#"
        <html><body>
        <a href="/about">About</a>
        <a href="https://noobnotes.net/happy-birthday/">Continue reading</a>
        <a href="/contact">Contact</a>
        </body></html>
        "#;
        assert_eq!(
            find_article_link(html).as_deref(),
            Some("https://noobnotes.net/happy-birthday/")
        );
    }

    #[test]
    fn test_first_of_multiple_matches_wins() {
        let html = r#"
        <html><body>
        <a href="/first">Continue reading</a>
        <a href="/second">Continue reading</a>
        </body></html>
        "#;
        assert_eq!(find_article_link(html).as_deref(), Some("/first"));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let html = r#"<a href="/song">  Continue reading
        </a>"#;
        assert_eq!(find_article_link(html).as_deref(), Some("/song"));
    }

    #[test]
    fn test_partial_match_is_rejected() {
        let html = r#"<a href="/song">Continue reading this article</a>"#;
        assert_eq!(find_article_link(html), None);
    }

    #[test]
    fn test_nested_markup_in_anchor_text() {
        let html = r#"<a href="/song"><span>Continue reading</span></a>"#;
        assert_eq!(find_article_link(html).as_deref(), Some("/song"));
    }

    #[test]
    fn test_matching_anchor_without_href_is_skipped() {
        let html = r#"
        <html><body>
        <a>Continue reading</a>
        <a href="/with-href">Continue reading</a>
        </body></html>
        "#;
        assert_eq!(find_article_link(html).as_deref(), Some("/with-href"));
    }

    #[test]
    fn test_empty_and_non_html_bodies() {
        assert_eq!(find_article_link(""), None);
        assert_eq!(find_article_link("{\"not\": \"html\"}"), None);
    }
}
