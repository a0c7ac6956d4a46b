//! Core types for extracted results and provider identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single hit extracted from a provider's results page.
///
/// Adapters only ever emit results whose `title` and `link` are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display text of the result, whitespace-collapsed.
    pub title: String,
    /// Absolute `http://` or `https://` destination.
    pub link: String,
    /// Excerpt shown under the title. May be empty.
    pub snippet: String,
}

impl SearchResult {
    /// Convenience constructor.
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
        }
    }
}

/// Results from one provider, in the order the provider ranked them.
pub type ResultSet = Vec<SearchResult>;

/// Search providers scraped in dual-source mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// DuckDuckGo's JavaScript-free HTML endpoint.
    DuckDuckGo,
    /// Yahoo's web results page.
    Yahoo,
}

impl Source {
    /// Returns the human-readable name of this provider.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "DuckDuckGo",
            Self::Yahoo => "Yahoo",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_result_construction() {
        let result = SearchResult::new("Example", "https://example.com", "An example page");
        assert_eq!(result.title, "Example");
        assert_eq!(result.link, "https://example.com");
        assert_eq!(result.snippet, "An example page");
    }

    #[test]
    fn search_result_serializes_with_field_names() {
        let result = SearchResult::new("Test", "https://test.com", "");
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["link"], "https://test.com");
        assert_eq!(json["snippet"], "");
    }

    #[test]
    fn source_display() {
        assert_eq!(Source::DuckDuckGo.to_string(), "DuckDuckGo");
        assert_eq!(Source::Yahoo.to_string(), "Yahoo");
    }
}
