//! Augmented click table and run-metadata output.
//!
//! The output table is the input table with one appended `track_id`
//! column; the format follows the output path's extension, so a Parquet
//! input can be written back as CSV and vice versa.

mod csv;
mod metadata;
mod parquet;
pub mod progress;

use crate::error::Result;
use crate::input::{ClickTable, TableFormat};
use std::path::Path;

pub use csv::write_csv;
pub use metadata::{RunMetadata, RunParameters, RunSummary, metadata_path, write_metadata};
pub use parquet::write_parquet;

/// Write the click table with the per-click track id column appended.
///
/// `assignment` must be one entry per table row, as produced by the
/// associator over the same table.
pub fn write_click_table(path: &Path, table: &ClickTable, assignment: &[i64]) -> Result<()> {
    debug_assert_eq!(assignment.len(), table.len());
    match TableFormat::from_path(path)? {
        TableFormat::Csv => write_csv(path, table, assignment),
        TableFormat::Parquet => write_parquet(path, table, assignment),
    }
}
