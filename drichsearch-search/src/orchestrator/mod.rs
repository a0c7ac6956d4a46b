//! Dual-source orchestration: concurrent adapter fan-out into a result pair.
//!
//! Results are never merged or deduplicated across sources; each column of
//! the rendered page shows exactly what its provider returned.

pub mod aggregate;

pub use aggregate::{aggregate, Aggregator};
