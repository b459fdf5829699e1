//! CSV click table reader.

use crate::error::{Error, Result};
use crate::input::ClickTable;
use std::path::Path;

/// Load a click table from a CSV file with a header row.
///
/// Every cell must parse as `f64`; the first failing cell is reported
/// with its column name and row number.
pub fn load_csv(path: &Path) -> Result<ClickTable> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(::csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| Error::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(str::to_string)
        .collect();

    let mut values: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];

    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| Error::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        for (col, cell) in record.iter().enumerate() {
            let value: f64 = cell.parse().map_err(|_| Error::NonNumericValue {
                value: cell.to_string(),
                column: columns.get(col).cloned().unwrap_or_default(),
                row: row + 1,
                path: path.to_path_buf(),
            })?;
            if let Some(column) = values.get_mut(col) {
                column.push(value);
            }
        }
    }

    Ok(ClickTable { columns, values })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_basic_csv() {
        let file = csv_file("time,amplitude,tdoa\n0.0,0.5,1e-5\n0.05,0.6,1.1e-5\n");
        let table = load_csv(file.path()).unwrap();
        assert_eq!(table.columns, vec!["time", "amplitude", "tdoa"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("tdoa").unwrap(), &[1e-5, 1.1e-5]);
    }

    #[test]
    fn test_extra_columns_preserved() {
        let file = csv_file("time,amplitude,tdoa,snr\n0.0,0.5,1e-5,12.5\n");
        let table = load_csv(file.path()).unwrap();
        assert_eq!(table.column("snr").unwrap(), &[12.5]);
    }

    #[test]
    fn test_header_only_file_is_empty_table() {
        let file = csv_file("time,amplitude,tdoa\n");
        let table = load_csv(file.path()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns.len(), 3);
    }

    #[test]
    fn test_non_numeric_cell_reported_with_location() {
        let file = csv_file("time,amplitude,tdoa\n0.0,loud,1e-5\n");
        let err = load_csv(file.path()).unwrap_err();
        match err {
            Error::NonNumericValue {
                value, column, row, ..
            } => {
                assert_eq!(value, "loud");
                assert_eq!(column, "amplitude");
                assert_eq!(row, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_csv(Path::new("/nonexistent/clicks.csv")).is_err());
    }
}
