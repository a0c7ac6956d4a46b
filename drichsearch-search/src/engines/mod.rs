//! Provider adapters.
//!
//! Each module provides a struct implementing [`crate::engine::SourceAdapter`]
//! that scrapes one provider's HTML results page.

pub mod duckduckgo;
pub mod yahoo;

pub use duckduckgo::{parse_duckduckgo_html, DuckDuckGoAdapter};
pub use yahoo::{parse_yahoo_html, YahooAdapter};

/// Maximum snippet length, in characters, kept at extraction time.
pub const CAPTURE_SNIPPET_CHARS: usize = 200;
