//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which endpoints each adapter queries, how many
//! results it keeps and how long it waits. It is serde-enabled so the host
//! application can embed it in its TOML config file; every field has a
//! default, so partial tables are accepted.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Settings for the DuckDuckGo-compatible adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuckDuckGoConfig {
    /// HTML endpoints tried in order; the first successful response wins.
    pub endpoints: Vec<String>,
    /// Maximum number of results kept.
    pub max_results: usize,
    /// HTTP request timeout in seconds, per endpoint attempt.
    pub timeout_seconds: u64,
}

impl Default for DuckDuckGoConfig {
    fn default() -> Self {
        Self {
            endpoints: vec![
                "https://html.duckduckgo.com/html/".into(),
                "https://duckduckgo.com/html/".into(),
            ],
            max_results: 10,
            timeout_seconds: 12,
        }
    }
}

/// Settings for the Yahoo adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YahooConfig {
    /// Web results page queried with `?p=<query>`.
    pub endpoint: String,
    /// Maximum number of result containers examined.
    pub max_results: usize,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://search.yahoo.com/search".into(),
            max_results: 10,
            timeout_seconds: 10,
        }
    }
}

/// Configuration for a dual-source search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// DuckDuckGo-compatible adapter settings.
    pub duckduckgo: DuckDuckGoConfig,
    /// Yahoo adapter settings.
    pub yahoo: YahooConfig,
    /// Custom User-Agent string. If `None`, a desktop browser User-Agent
    /// is picked from a built-in list for every request.
    pub user_agent: Option<String>,
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - both `max_results` values are greater than 0
    /// - both timeouts are greater than 0
    /// - at least one DuckDuckGo endpoint is configured
    /// - every endpoint is an absolute http(s) URL
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.duckduckgo.max_results == 0 || self.yahoo.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.duckduckgo.timeout_seconds == 0 || self.yahoo.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.duckduckgo.endpoints.is_empty() {
            return Err(SearchError::Config(
                "at least one DuckDuckGo endpoint must be configured".into(),
            ));
        }
        for endpoint in self
            .duckduckgo
            .endpoints
            .iter()
            .chain(std::iter::once(&self.yahoo.endpoint))
        {
            let parsed = url::Url::parse(endpoint)
                .map_err(|e| SearchError::Config(format!("invalid endpoint {endpoint}: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(SearchError::Config(format!(
                    "endpoint {endpoint} must use http or https"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SearchConfig::default();
        assert_eq!(config.duckduckgo.max_results, 10);
        assert_eq!(config.duckduckgo.timeout_seconds, 12);
        assert_eq!(config.duckduckgo.endpoints.len(), 2);
        assert!(config.duckduckgo.endpoints[0].starts_with("https://html.duckduckgo.com"));
        assert_eq!(config.yahoo.max_results, 10);
        assert_eq!(config.yahoo.timeout_seconds, 10);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_max_results_rejected() {
        let mut config = SearchConfig::default();
        config.yahoo.max_results = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_results"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let mut config = SearchConfig::default();
        config.duckduckgo.timeout_seconds = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn empty_endpoint_list_rejected() {
        let mut config = SearchConfig::default();
        config.duckduckgo.endpoints.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("endpoint"));
    }

    #[test]
    fn relative_endpoint_rejected() {
        let mut config = SearchConfig::default();
        config.yahoo.endpoint = "/search".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_http_endpoint_rejected() {
        let mut config = SearchConfig::default();
        config.duckduckgo.endpoints = vec!["ftp://example.com/html/".into()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn partial_table_fills_defaults() {
        let json = r#"{"yahoo": {"max_results": 5}}"#;
        let config: SearchConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.yahoo.max_results, 5);
        assert_eq!(config.yahoo.timeout_seconds, 10);
        assert_eq!(config.duckduckgo, DuckDuckGoConfig::default());
    }
}
