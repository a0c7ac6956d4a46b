//! Error types for the drichsearch host.

/// Top-level error type for query dispatch and host configuration.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be read, parsed or validated.
    #[error("config error: {0}")]
    Config(String),

    /// Engine catalog could not be loaded or is unusable.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// The query was empty after trimming.
    #[error("the search field is empty")]
    EmptyQuery,

    /// No catalog entry carries the requested name.
    #[error("unknown search engine: {0}")]
    UnknownEngine(String),

    /// Error raised by the dual-source search library.
    #[error(transparent)]
    Search(#[from] drichsearch_search::SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
