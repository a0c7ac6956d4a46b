//! Query dispatch: navigate to an external engine, or build the
//! dual-source comparison page.

use drichsearch_search::SearchConfig;

use crate::catalog::EngineEntry;
use crate::error::{AppError, Result};

/// What the host should show for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Load this URL from the selected external engine.
    Navigate(String),
    /// Display this self-contained HTML document.
    Document(String),
}

/// Trim `raw`, rejecting queries that are empty afterwards.
///
/// # Errors
///
/// Returns [`AppError::EmptyQuery`] for blank input.
pub fn normalize_query(raw: &str) -> Result<&str> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(AppError::EmptyQuery);
    }
    Ok(query)
}

/// Append the percent-encoded query to an engine's URL prefix.
pub fn engine_url(engine: &EngineEntry, query: &str) -> String {
    format!("{}{}", engine.url, urlencoding::encode(query))
}

/// Route `raw_query` to `engine`.
///
/// External engines resolve immediately to a [`Dispatch::Navigate`] URL. The
/// custom entry queries DuckDuckGo and Yahoo concurrently and always yields a
/// [`Dispatch::Document`], even when both providers fail.
///
/// # Errors
///
/// Returns [`AppError::EmptyQuery`] if the query is blank after trimming.
pub async fn dispatch(
    raw_query: &str,
    engine: &EngineEntry,
    search: &SearchConfig,
) -> Result<Dispatch> {
    let query = normalize_query(raw_query)?;

    if engine.is_custom() {
        tracing::info!(engine = %engine.name, "dual-source search");
        let html = drichsearch_search::search_and_render(query, search).await;
        return Ok(Dispatch::Document(html));
    }

    let url = engine_url(engine, query);
    tracing::info!(engine = %engine.name, "navigating to external engine");
    tracing::trace!(%url, "engine url");
    Ok(Dispatch::Navigate(url))
}
