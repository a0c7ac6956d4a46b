//! Host configuration: the engine catalog, the default engine and the
//! dual-source search settings.

use std::path::{Path, PathBuf};

use drichsearch_search::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, EngineEntry};
use crate::error::{AppError, Result};

/// Environment variable overriding [`AppConfig::default_config_path`]'s directory.
pub const CONFIG_DIR_ENV: &str = "DRICHSEARCH_CONFIG_DIR";

/// Top-level configuration for drichsearch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Engine used when none is named on the command line.
    pub default_engine: String,
    /// JSON engine list to use instead of `engines`.
    pub engines_file: Option<PathBuf>,
    /// Inline engine catalog.
    pub engines: Vec<EngineEntry>,
    /// Dual-source scraping settings.
    pub search: SearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_engine: "Custom".into(),
            engines_file: None,
            engines: catalog::default_engines(),
            search: SearchConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load the file at `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error only when an existing file cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `dirs::config_dir()/drichsearch/config.toml`.
    ///
    /// The directory can be overridden with `DRICHSEARCH_CONFIG_DIR`.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        let dir = if let Some(override_dir) = std::env::var_os(CONFIG_DIR_ENV) {
            PathBuf::from(override_dir)
        } else {
            dirs::config_dir()
                .map(|d| d.join("drichsearch"))
                .unwrap_or_else(|| PathBuf::from("/tmp/drichsearch-config"))
        };
        dir.join("config.toml")
    }

    /// The effective engine catalog: the JSON file when one is configured,
    /// the inline list otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON file cannot be loaded or the resulting
    /// catalog is invalid.
    pub fn engines(&self) -> Result<Vec<EngineEntry>> {
        match &self.engines_file {
            Some(path) => catalog::load_json(path),
            None => {
                catalog::validate(&self.engines)?;
                Ok(self.engines.clone())
            }
        }
    }

    /// Check the search settings and that the default engine exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Search`] for invalid search settings, and
    /// [`AppError::Config`] or [`AppError::Catalog`] for catalog problems.
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;

        let engines = self.engines()?;
        if catalog::find(&engines, &self.default_engine).is_none() {
            return Err(AppError::Config(format!(
                "default engine {} is not in the catalog",
                self.default_engine
            )));
        }
        Ok(())
    }
}
