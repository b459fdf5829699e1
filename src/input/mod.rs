//! Click feature table loading.
//!
//! Click files are numeric feature tables with named columns, produced by
//! an upstream click detector. Two container formats are supported,
//! selected by file extension: CSV with a header row, and Apache Parquet.
//! Whatever extra feature columns the detector wrote are preserved so the
//! output table can carry them through unchanged.

mod csv;
mod parquet;

use crate::constants::columns;
use crate::error::{Error, Result};
use crate::tracker::Click;
use std::path::Path;

pub use csv::load_csv;
pub use parquet::load_parquet;

/// Supported click table container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// CSV with a header row.
    Csv,
    /// Apache Parquet.
    Parquet,
}

impl TableFormat {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Self::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("parquet") || ext.eq_ignore_ascii_case("pq") => {
                Ok(Self::Parquet)
            }
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// An in-memory numeric feature table with named columns.
///
/// Column-major: `values[c]` holds the cells of `columns[c]`, one per
/// click, in input order. Every column has the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickTable {
    /// Column names, in file order.
    pub columns: Vec<String>,
    /// Column values, parallel to `columns`.
    pub values: Vec<Vec<f64>>,
}

impl ClickTable {
    /// Number of rows (clicks) in the table.
    pub fn len(&self) -> usize {
        self.values.first().map_or(0, Vec::len)
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.values[i].as_slice())
    }

    /// Extract the click records the associator consumes.
    ///
    /// Requires the `time`, `amplitude` and `tdoa` columns to be present.
    pub fn clicks(&self, path: &Path) -> Result<Vec<Click>> {
        let time = self.required_column(columns::TIME, path)?;
        let amplitude = self.required_column(columns::AMPLITUDE, path)?;
        let tdoa = self.required_column(columns::TDOA, path)?;

        Ok(time
            .iter()
            .zip(amplitude)
            .zip(tdoa)
            .map(|((&time, &amplitude), &tdoa)| Click {
                time,
                amplitude,
                tdoa,
            })
            .collect())
    }

    fn required_column(&self, name: &str, path: &Path) -> Result<&[f64]> {
        self.column(name).ok_or_else(|| Error::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// Load a click table, choosing the reader from the file extension.
pub fn load_click_table(path: &Path) -> Result<ClickTable> {
    match TableFormat::from_path(path)? {
        TableFormat::Csv => load_csv(path),
        TableFormat::Parquet => load_parquet(path),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn table() -> ClickTable {
        ClickTable {
            columns: vec![
                "time".to_string(),
                "amplitude".to_string(),
                "tdoa".to_string(),
                "snr".to_string(),
            ],
            values: vec![
                vec![0.0, 0.05],
                vec![0.5, 0.6],
                vec![1e-5, 1.1e-5],
                vec![12.0, 9.5],
            ],
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            TableFormat::from_path(Path::new("clicks.csv")).unwrap(),
            TableFormat::Csv
        );
        assert_eq!(
            TableFormat::from_path(Path::new("clicks.PARQUET")).unwrap(),
            TableFormat::Parquet
        );
        assert!(TableFormat::from_path(Path::new("clicks.pkl")).is_err());
        assert!(TableFormat::from_path(Path::new("clicks")).is_err());
    }

    #[test]
    fn test_clicks_extraction() {
        let clicks = table().clicks(&PathBuf::from("clicks.csv")).unwrap();
        assert_eq!(clicks.len(), 2);
        assert_eq!(clicks[0].time, 0.0);
        assert_eq!(clicks[1].amplitude, 0.6);
        assert_eq!(clicks[1].tdoa, 1.1e-5);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let mut t = table();
        t.columns[2] = "delay".to_string();
        let err = t.clicks(&PathBuf::from("clicks.csv")).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { ref name, .. } if name == "tdoa"));
    }

    #[test]
    fn test_len_of_empty_table() {
        let t = ClickTable {
            columns: vec![],
            values: vec![],
        };
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
    }
}
