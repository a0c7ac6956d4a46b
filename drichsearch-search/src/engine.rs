//! Trait definition for provider adapters.
//!
//! Each provider (DuckDuckGo, Yahoo) implements [`SourceAdapter`] to turn a
//! query into a bounded [`ResultSet`]. Implementors report failures through
//! [`SourceAdapter::search`]; callers use [`SourceAdapter::fetch`], which
//! never fails.

use std::future::Future;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{ResultSet, Source};

/// A provider-specific fetch-and-extract unit.
///
/// Implementors handle their own:
///
/// - URL construction with query encoding
/// - HTTP request with a desktop User-Agent and timeout
/// - HTML extraction via selector chains
/// - result cap and (optionally) deduplication
///
/// All implementations must be `Send + Sync` so both adapters can run
/// concurrently.
pub trait SourceAdapter: Send + Sync {
    /// Query the provider and extract results.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, the provider answers
    /// with an error status, or the adapter's selectors cannot be built.
    /// Markup that simply contains no results is `Ok(vec![])`.
    fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> impl Future<Output = Result<ResultSet, SearchError>> + Send;

    /// Which provider this adapter scrapes.
    fn source(&self) -> Source;

    /// Query the provider, degrading any failure to an empty result set.
    ///
    /// The failure reason is logged at `warn` level before being dropped.
    fn fetch(&self, query: &str, config: &SearchConfig) -> impl Future<Output = ResultSet> + Send {
        async move {
            match self.search(query, config).await {
                Ok(results) => {
                    tracing::debug!(source = %self.source(), count = results.len(), "adapter returned results");
                    results
                }
                Err(err) => {
                    tracing::warn!(source = %self.source(), error = %err, "adapter failed, showing no results");
                    Vec::new()
                }
            }
        }
    }
}
