//! Benchmark result file discovery and aggregation

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use itertools::Itertools as _;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::DataConfig;

/// Name of the column tagging each row with its source file
pub const FILE_COLUMN: &str = "file";

/// Column-aligned table aggregated from result files
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Table {
    /// Column names, in first-seen order
    pub headers: Vec<String>,
    /// Row cells, one per header
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Cell content by row index and column name, if both exist
    #[must_use]
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        let col = self.headers.iter().position(|h| h == header)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Append another table, aligning its columns by name
    ///
    /// Columns not yet seen are added after the existing ones; cells with no
    /// matching column on either side are left empty.
    fn append(&mut self, other: Table) {
        if self.headers.is_empty() {
            *self = other;
            return;
        }

        // Map each incoming column to its position in the combined header set
        let mut mapping = Vec::with_capacity(other.headers.len());
        for header in other.headers {
            let col = match self.headers.iter().position(|h| *h == header) {
                Some(col) => col,
                None => {
                    self.headers.push(header);
                    self.headers.len() - 1
                }
            };
            mapping.push(col);
        }

        let width = self.headers.len();
        for row in &mut self.rows {
            row.resize(width, String::new());
        }
        for cells in other.rows {
            let mut row = vec![String::new(); width];
            for (cell, &col) in cells.into_iter().zip(&mapping) {
                row[col] = cell;
            }
            self.rows.push(row);
        }
    }
}

/// Read a single CSV result file
pub fn read_table(path: &Path) -> anyhow::Result<Table> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Failed to open {path:?}"))?;
    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header of {path:?}"))?
        .iter()
        .map(ToOwned::to_owned)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("Failed to read record of {path:?}"))?;
        rows.push(record.iter().map(ToOwned::to_owned).collect());
    }
    Ok(Table { headers, rows })
}

/// Find result files matching a filename glob, in deterministic path order
fn discover(
    root: &Path,
    pattern: &str,
    exclude: &[regex::Regex],
) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = glob::Pattern::new(pattern)
        .with_context(|| format!("Invalid filename pattern {pattern:?}"))?;
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !pattern.matches(&entry.file_name().to_string_lossy()) {
            continue;
        }
        let path = entry.into_path();
        if exclude
            .iter()
            .any(|r| r.is_match(&path.to_string_lossy()))
        {
            continue;
        }
        files.push(path);
    }
    Ok(files.into_iter().sorted().collect())
}

/// Read and concatenate result files in order, tagging rows with their source file stem
fn concat(paths: Vec<PathBuf>) -> anyhow::Result<Table> {
    let mut combined = Table::default();
    for path in paths {
        debug!("Reading {path:?}");
        let mut table = read_table(&path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        table.headers.push(FILE_COLUMN.to_owned());
        for row in &mut table.rows {
            row.push(stem.clone());
        }
        combined.append(table);
    }
    Ok(combined)
}

/// Scan a directory tree and aggregate all result files matching a filename glob
///
/// Each row is tagged with the base name (without extension) of the file it
/// came from, in a trailing `file` column. File order is deterministic (sorted
/// by path); row order within each file is preserved. No matching file yields
/// an empty table.
pub fn load(root: &Path, pattern: &str) -> anyhow::Result<Table> {
    concat(discover(root, pattern, &[])?)
}

/// Aggregate result files per configuration, skipping excluded paths
pub fn load_filtered(cfg: &DataConfig) -> anyhow::Result<Table> {
    concat(discover(&cfg.root, &cfg.pattern, &cfg.exclude)?)
}
