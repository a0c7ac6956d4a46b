//! Search engine catalog.
//!
//! Each entry is either an external engine, whose `url` is a prefix the
//! encoded query is appended to, or the dual-source entry whose `url` is the
//! [`CUSTOM_URL`] marker. Catalogs can be embedded in the TOML config or
//! imported from a standalone JSON list of `{name, url, logo}` objects.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// `url` marker selecting the DuckDuckGo + Yahoo comparison page.
pub const CUSTOM_URL: &str = "custom";

/// One selectable search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineEntry {
    /// Display name, matched case-insensitively.
    pub name: String,
    /// Query URL prefix, or [`CUSTOM_URL`].
    pub url: String,
    /// Optional icon path relative to the asset directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl EngineEntry {
    /// Entry without a logo.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            logo: None,
        }
    }

    /// Attach an icon path.
    #[must_use]
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    /// Whether this entry selects the dual-source comparison page.
    pub fn is_custom(&self) -> bool {
        self.url == CUSTOM_URL
    }
}

/// The engines offered out of the box.
pub fn default_engines() -> Vec<EngineEntry> {
    vec![
        EngineEntry::new("Google", "https://www.google.com/search?q=")
            .with_logo("assets/google.svg"),
        EngineEntry::new("DuckDuckGo", "https://duckduckgo.com/?q=")
            .with_logo("assets/duckduckgo.svg"),
        EngineEntry::new("Bing", "https://www.bing.com/search?q=").with_logo("assets/bing.svg"),
        EngineEntry::new("Yahoo", "https://search.yahoo.com/search?p=")
            .with_logo("assets/yahoo.svg"),
        EngineEntry::new("Custom", CUSTOM_URL).with_logo("assets/search.svg"),
    ]
}

/// Find an engine by name, ignoring ASCII case.
///
/// ```
/// use drichsearch::catalog::{default_engines, find};
///
/// let engines = default_engines();
/// assert!(find(&engines, "bing").is_some());
/// ```
pub fn find<'a>(engines: &'a [EngineEntry], name: &str) -> Option<&'a EngineEntry> {
    let name = name.trim();
    engines.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

/// Check that a catalog is usable: non-empty, unique names, and every
/// non-custom entry is an http(s) prefix.
///
/// # Errors
///
/// Returns [`AppError::Catalog`] describing the first problem found.
pub fn validate(engines: &[EngineEntry]) -> Result<()> {
    if engines.is_empty() {
        return Err(AppError::Catalog("engine list is empty".into()));
    }

    for (i, engine) in engines.iter().enumerate() {
        if engine.name.trim().is_empty() {
            return Err(AppError::Catalog(format!("engine #{i} has no name")));
        }
        if engines[..i]
            .iter()
            .any(|prev| prev.name.eq_ignore_ascii_case(&engine.name))
        {
            return Err(AppError::Catalog(format!(
                "duplicate engine name: {}",
                engine.name
            )));
        }
        if !engine.is_custom()
            && !(engine.url.starts_with("http://") || engine.url.starts_with("https://"))
        {
            return Err(AppError::Catalog(format!(
                "engine {} has a non-http url: {}",
                engine.name, engine.url
            )));
        }
    }

    Ok(())
}

/// Load a catalog from a JSON array of engine objects.
///
/// # Errors
///
/// Returns [`AppError::Io`] if the file cannot be read and
/// [`AppError::Catalog`] if it is not a valid engine list.
pub fn load_json(path: &Path) -> Result<Vec<EngineEntry>> {
    let content = std::fs::read_to_string(path)?;
    let engines: Vec<EngineEntry> = serde_json::from_str(&content)
        .map_err(|e| AppError::Catalog(format!("{}: {e}", path.display())))?;
    validate(&engines)?;
    Ok(engines)
}
