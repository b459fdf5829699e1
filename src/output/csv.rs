//! CSV click table writer.

use crate::constants::columns;
use crate::error::{Error, Result};
use crate::input::ClickTable;
use std::path::Path;

/// Write the click table as CSV with the track id column appended.
pub fn write_csv(path: &Path, table: &ClickTable, assignment: &[i64]) -> Result<()> {
    let mut writer = ::csv::Writer::from_path(path).map_err(|e| Error::CsvWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut header: Vec<&str> = table.columns.iter().map(String::as_str).collect();
    header.push(columns::TRACK_ID);
    writer.write_record(&header).map_err(|e| Error::CsvWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    for (row, &track_id) in assignment.iter().enumerate() {
        let mut record: Vec<String> = table
            .values
            .iter()
            .map(|column| format_cell(column[row]))
            .collect();
        record.push(track_id.to_string());
        writer.write_record(&record).map_err(|e| Error::CsvWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Format a cell value without losing precision on round-trip.
fn format_cell(value: f64) -> String {
    format!("{value}")
}
