//! Error types for the drichsearch-search crate.
//!
//! These errors never cross the [`crate::SourceAdapter::fetch`] boundary:
//! adapters use them internally to explain why a provider produced nothing,
//! and the boundary logs them and degrades to an empty result set.

/// Errors that can occur while querying or parsing a search provider.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider answered with a non-success status code.
    #[error("unexpected status {status} from {source_name}")]
    Status {
        /// Provider display name.
        source_name: String,
        /// HTTP status code returned.
        status: u16,
    },

    /// Failed to build a selector or parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for drichsearch-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_status() {
        let err = SearchError::Status {
            source_name: "Yahoo".into(),
            status: 503,
        };
        assert_eq!(err.to_string(), "unexpected status 503 from Yahoo");
    }

    #[test]
    fn display_parse() {
        let err = SearchError::Parse("invalid result selector".into());
        assert_eq!(err.to_string(), "parse error: invalid result selector");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("max_results must be > 0".into());
        assert_eq!(err.to_string(), "config error: max_results must be > 0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
