//! Yahoo adapter: scrapes the web results page.
//!
//! Yahoo wraps each organic hit in a `div.algo` container. Unlike
//! DuckDuckGo, its result anchors are absolute URLs, so non-`http` hrefs are
//! internal navigation (pagination, related searches) and are dropped rather
//! than decoded.

use scraper::Html;

use crate::config::SearchConfig;
use crate::engine::SourceAdapter;
use crate::error::SearchError;
use crate::extract::{element_text, truncate_chars, SelectorChain};
use crate::http;
use crate::types::{ResultSet, SearchResult, Source};

use super::CAPTURE_SNIPPET_CHARS;

/// Result container selector.
const RESULT_BLOCKS: &[&str] = &["div.algo"];

/// The result link is the first anchor carrying an href.
const LINK_ANCHORS: &[&str] = &["a[href]"];

/// Snippet holder selectors, in priority order.
const SNIPPETS: &[&str] = &["div.compText", "p, div"];

/// Titles shorter than this are icon or decoration anchors.
const MIN_TITLE_CHARS: usize = 3;

/// Yahoo web results scraper.
///
/// Only the first `max_results` containers are examined, so skipped
/// candidates count against the cap. Duplicates are passed through as
/// Yahoo listed them.
pub struct YahooAdapter;

impl SourceAdapter for YahooAdapter {
    async fn search(&self, query: &str, config: &SearchConfig) -> Result<ResultSet, SearchError> {
        tracing::trace!(query, "Yahoo search");

        let settings = &config.yahoo;
        let client = http::build_client(settings.timeout_seconds, config.user_agent.as_deref())?;

        let response = client
            .get(settings.endpoint.as_str())
            .query(&[("p", query)])
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Yahoo request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                source_name: Source::Yahoo.name().into(),
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Yahoo response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "Yahoo response received");

        parse_yahoo_html(&html, settings.max_results)
    }

    fn source(&self) -> Source {
        Source::Yahoo
    }
}

/// Parse a Yahoo results page.
///
/// Exposed separately so already-fetched pages can be parsed without a request.
pub fn parse_yahoo_html(html: &str, max_results: usize) -> Result<ResultSet, SearchError> {
    let document = Html::parse_document(html);

    let blocks = SelectorChain::parse(RESULT_BLOCKS)?;
    let anchors = SelectorChain::parse(LINK_ANCHORS)?;
    let snippets = SelectorChain::parse(SNIPPETS)?;

    let mut results = Vec::new();

    for block in blocks.union(&document).into_iter().take(max_results) {
        let Some(anchor) = anchors.first(block) else {
            continue;
        };

        let link = anchor.value().attr("href").unwrap_or_default().trim();
        if !link.starts_with("http") {
            continue;
        }

        let title = element_text(anchor);
        if title.chars().count() < MIN_TITLE_CHARS {
            continue;
        }

        let snippet = snippets
            .first(block)
            .map(|el| truncate_chars(&element_text(el), CAPTURE_SNIPPET_CHARS))
            .unwrap_or_default();

        results.push(SearchResult {
            title,
            link: link.to_string(),
            snippet,
        });
    }

    tracing::debug!(count = results.len(), "Yahoo results parsed");
    Ok(results)
}
