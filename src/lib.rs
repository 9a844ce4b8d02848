//! Analysis harness for benchmark result files
//!
//! Aggregates CSV result files scattered in a directory tree into a single
//! table, tagging each row with its source file, and formats numeric axis
//! values with magnitude suffixes (k, M, G, ...) for charts.

pub mod config;
pub mod data;
pub mod fmt;
