//! DuckDuckGo adapter: scrapes the JavaScript-free HTML endpoint.
//!
//! The HTML endpoint has shipped several markup generations, so result
//! blocks, title anchors and snippets are each located through a
//! [`SelectorChain`]. Result links are wrapped in DuckDuckGo's `/l/?uddg=`
//! redirect and are unwrapped with [`extract_target_url`].

use std::collections::HashSet;

use scraper::{ElementRef, Html};

use crate::config::SearchConfig;
use crate::engine::SourceAdapter;
use crate::error::SearchError;
use crate::extract::{element_text, truncate_chars, SelectorChain};
use crate::http;
use crate::types::{ResultSet, SearchResult, Source};
use crate::url_normalize::extract_target_url;

use super::CAPTURE_SNIPPET_CHARS;

/// Result block selectors, one per known markup generation. Matches are
/// unioned in this order.
const RESULT_BLOCKS: &[&str] = &[
    "div.result",
    "div.results_links_deep.web-result",
    "div.web-result",
];

/// Title anchor selectors, in priority order.
const TITLE_ANCHORS: &[&str] = &["a.result__a", "h2.result__title a", "a[href]"];

/// Snippet holder selectors, in priority order.
const SNIPPETS: &[&str] = &["a.result__snippet", "div.result__snippet", "p", "div"];

/// Class carried by sponsored result blocks.
const AD_CLASS: &str = "result--ad";

/// DuckDuckGo HTML endpoint scraper.
///
/// Tries each configured endpoint in order until one answers with a
/// success status, then extracts up to `max_results` unique results.
/// Duplicate `(title, link)` pairs are dropped.
pub struct DuckDuckGoAdapter;

impl SourceAdapter for DuckDuckGoAdapter {
    async fn search(&self, query: &str, config: &SearchConfig) -> Result<ResultSet, SearchError> {
        tracing::trace!(query, "DuckDuckGo search");

        let settings = &config.duckduckgo;
        let client = http::build_client(settings.timeout_seconds, config.user_agent.as_deref())?;
        let html = fetch_first_available(&client, &settings.endpoints, query).await?;

        tracing::trace!(bytes = html.len(), "DuckDuckGo response received");

        parse_duckduckgo_html(&html, settings.max_results)
    }

    fn source(&self) -> Source {
        Source::DuckDuckGo
    }
}

/// Try `endpoints` in order; the first successful response body wins.
async fn fetch_first_available(
    client: &reqwest::Client,
    endpoints: &[String],
    query: &str,
) -> Result<String, SearchError> {
    let mut last_error =
        SearchError::Config("no DuckDuckGo endpoint configured".into());

    for endpoint in endpoints {
        match fetch_endpoint(client, endpoint, query).await {
            Ok(html) => return Ok(html),
            Err(err) => {
                tracing::debug!(%endpoint, error = %err, "DuckDuckGo endpoint failed");
                last_error = err;
            }
        }
    }

    Err(last_error)
}

async fn fetch_endpoint(
    client: &reqwest::Client,
    endpoint: &str,
    query: &str,
) -> Result<String, SearchError> {
    let response = client
        .get(endpoint)
        .query(&[("q", query)])
        .header("Accept", "text/html,application/xhtml+xml")
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| SearchError::Http(format!("DuckDuckGo request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::Status {
            source_name: Source::DuckDuckGo.name().into(),
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| SearchError::Http(format!("DuckDuckGo response read failed: {e}")))
}

/// Parse a DuckDuckGo HTML results page.
///
/// Exposed separately so already-fetched pages can be parsed without a request.
pub fn parse_duckduckgo_html(
    html: &str,
    max_results: usize,
) -> Result<ResultSet, SearchError> {
    let document = Html::parse_document(html);

    let blocks = SelectorChain::parse(RESULT_BLOCKS)?;
    let anchors = SelectorChain::parse(TITLE_ANCHORS)?;
    let snippets = SelectorChain::parse(SNIPPETS)?;

    let mut results = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for block in blocks.union(&document) {
        if results.len() >= max_results {
            break;
        }
        if is_ad(block) {
            continue;
        }

        let Some(anchor) = anchors.first(block) else {
            continue;
        };
        let Some(link) = anchor.value().attr("href").and_then(extract_target_url) else {
            continue;
        };
        let title = element_text(anchor);
        if title.is_empty() {
            continue;
        }

        if !seen.insert((title.clone(), link.clone())) {
            continue;
        }

        let snippet = snippets
            .first(block)
            .map(|el| truncate_chars(&element_text(el), CAPTURE_SNIPPET_CHARS))
            .unwrap_or_default();

        results.push(SearchResult {
            title,
            link,
            snippet,
        });
    }

    tracing::debug!(count = results.len(), "DuckDuckGo results parsed");
    Ok(results)
}

fn is_ad(block: ElementRef<'_>) -> bool {
    block.value().classes().any(|class| class == AD_CLASS)
}
