//! Concurrent fan-out to a pair of adapters.
//!
//! Both adapters are polled together with [`futures::future::join`], so a
//! search takes as long as the slower provider rather than the sum of both.
//! Each adapter already degrades failures to an empty list, so neither side
//! can prevent the other's results from being returned.

use crate::config::SearchConfig;
use crate::engine::SourceAdapter;
use crate::engines::{DuckDuckGoAdapter, YahooAdapter};
use crate::types::{ResultSet, Source};

/// Runs two adapters for the same query and pairs their results by position.
pub struct Aggregator<A, B> {
    first: A,
    second: B,
}

impl Aggregator<DuckDuckGoAdapter, YahooAdapter> {
    /// The standard pairing: DuckDuckGo first, Yahoo second.
    pub fn dual_source() -> Self {
        Self::new(DuckDuckGoAdapter, YahooAdapter)
    }
}

impl<A: SourceAdapter, B: SourceAdapter> Aggregator<A, B> {
    /// Pair two adapters. `first` fills the left column, `second` the right.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Providers behind the two columns, in column order.
    pub fn sources(&self) -> (Source, Source) {
        (self.first.source(), self.second.source())
    }

    /// Query both adapters concurrently.
    ///
    /// The lists are returned exactly as each adapter produced them: no
    /// retries, no cross-source merging or deduplication.
    pub async fn aggregate(&self, query: &str, config: &SearchConfig) -> (ResultSet, ResultSet) {
        let (first, second) = futures::future::join(
            self.first.fetch(query, config),
            self.second.fetch(query, config),
        )
        .await;

        tracing::debug!(
            first = %self.first.source(),
            first_count = first.len(),
            second = %self.second.source(),
            second_count = second.len(),
            "aggregation complete"
        );

        (first, second)
    }
}

/// Query DuckDuckGo and Yahoo concurrently.
///
/// Returns `(duckduckgo_results, yahoo_results)`. Never fails: a provider
/// that cannot be reached contributes an empty list.
pub async fn aggregate(query: &str, config: &SearchConfig) -> (ResultSet, ResultSet) {
    Aggregator::dual_source().aggregate(query, config).await
}
