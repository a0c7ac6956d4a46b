//! drichsearch: a search browser host.
//!
//! A query goes either to an external engine chosen from the catalog, which
//! resolves to a URL to load, or to the "custom" dual-source mode, which
//! scrapes DuckDuckGo and Yahoo concurrently and produces a side-by-side
//! comparison page.
//!
//! # Architecture
//!
//! - **Catalog**: named engines, each a URL prefix or the custom marker
//! - **Config**: TOML file holding the catalog and the scraping settings
//! - **Dispatch**: turns `(query, engine)` into a URL or an HTML document
//! - **Search**: the [`drichsearch_search`] crate does the scraping,
//!   aggregation and rendering

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;

pub use catalog::{EngineEntry, CUSTOM_URL};
pub use config::AppConfig;
pub use dispatch::{dispatch, Dispatch};
pub use error::{AppError, Result};
