//! # drichsearch-search
//!
//! Dual-source web search for drichsearch.
//!
//! This crate scrapes two independent search providers directly (DuckDuckGo's
//! HTML endpoint and Yahoo's results page), extracts structured results from
//! their markup and renders them side by side in one HTML document. No API
//! keys are involved.
//!
//! ## Design
//!
//! - One [`SourceAdapter`] per provider; the two run concurrently
//! - Markup is probed through ordered selector chains, so older and newer
//!   page generations are both understood
//! - Redirect wrappers are unwrapped to the real destination URL
//! - Graceful degradation: a provider that fails shows an empty column,
//!   never an error
//!
//! ## Security
//!
//! - Queries are logged only at trace level
//! - All scraped text is HTML-escaped in the rendered document, which
//!   carries no script

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod extract;
pub mod http;
pub mod orchestrator;
pub mod render;
pub mod types;
pub mod url_normalize;

pub use config::{DuckDuckGoConfig, SearchConfig, YahooConfig};
pub use engine::SourceAdapter;
pub use engines::{DuckDuckGoAdapter, YahooAdapter};
pub use error::{Result, SearchError};
pub use orchestrator::{aggregate, Aggregator};
pub use render::{render, render_labeled};
pub use types::{ResultSet, SearchResult, Source};

/// Search DuckDuckGo and Yahoo and render the comparison page.
///
/// Never fails: a provider that cannot be reached or parsed renders as a
/// "no results" column.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// let config = drichsearch_search::SearchConfig::default();
/// let page = drichsearch_search::search_and_render("rust programming", &config).await;
/// std::fs::write("results.html", page).ok();
/// # }
/// ```
pub async fn search_and_render(query: &str, config: &SearchConfig) -> String {
    let aggregator = Aggregator::dual_source();
    let (first, second) = aggregator.sources();
    let (first_results, second_results) = aggregator.aggregate(query, config).await;
    render_labeled(first.name(), &first_results, second.name(), &second_results)
}
