//! Scraping and extraction pipeline for noobnotes.net keyboard notation.
//!
//! Two core steps, invoked sequentially per lookup:
//! - [`locate`]: search the site for a query and resolve the first
//!   "Continue reading" link to a full-article URL.
//! - [`extract_notation`]: pull the notation lines out of an article's
//!   `post-content` container.
//!
//! Parsing is separated from fetching so the parse functions can be tested
//! against fixture HTML without a network.

pub mod error;
pub mod extract;
pub mod fetch;
pub mod locate;
pub mod normalize;

pub use error::ScrapeError;
pub use extract::extract_notation;
pub use fetch::{fetch_html, http_client};
pub use locate::{find_article_link, locate};
