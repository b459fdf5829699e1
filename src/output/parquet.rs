//! Parquet click table writer.

use crate::constants::columns;
use crate::error::{Error, Result};
use crate::input::ClickTable;
use arrow::array::{ArrayRef, Float64Array, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// Write the click table as Parquet with the track id column appended.
///
/// Feature columns are written as Float64, the track id as Int64.
pub fn write_parquet(path: &Path, table: &ClickTable, assignment: &[i64]) -> Result<()> {
    let mut fields: Vec<Field> = table
        .columns
        .iter()
        .map(|name| Field::new(name, DataType::Float64, false))
        .collect();
    fields.push(Field::new(columns::TRACK_ID, DataType::Int64, false));
    let schema = Arc::new(Schema::new(fields));

    let mut arrays: Vec<ArrayRef> = table
        .values
        .iter()
        .map(|column| Arc::new(Float64Array::from(column.clone())) as ArrayRef)
        .collect();
    arrays.push(Arc::new(Int64Array::from(assignment.to_vec())));

    let batch = RecordBatch::try_new(schema.clone(), arrays).map_err(|e| Error::Arrow {
        context: format!("building output record batch for '{}'", path.display()),
        source: e,
    })?;

    let file = File::create(path).map_err(|e| Error::OutputCreate {
        path: path.to_path_buf(),
        source: e,
    })?;

    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer =
        ArrowWriter::try_new(file, schema, Some(props)).map_err(|e| Error::ParquetWrite {
            context: format!("initializing writer for '{}'", path.display()),
            source: e,
        })?;
    writer.write(&batch).map_err(|e| Error::ParquetWrite {
        context: format!("writing record batch to '{}'", path.display()),
        source: e,
    })?;
    writer.close().map_err(|e| Error::ParquetWrite {
        context: format!("closing '{}'", path.display()),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::input::load_parquet;
    use tempfile::NamedTempFile;

    #[test]
    fn test_round_trip_with_track_ids() {
        let table = ClickTable {
            columns: vec![
                "time".to_string(),
                "amplitude".to_string(),
                "tdoa".to_string(),
            ],
            values: vec![
                vec![0.0, 0.05],
                vec![0.5, 0.6],
                vec![1e-5, 1.1e-5],
            ],
        };
        let file = NamedTempFile::with_suffix(".parquet").unwrap();
        write_parquet(file.path(), &table, &[0, -1]).unwrap();

        let reloaded = load_parquet(file.path()).unwrap();
        assert_eq!(
            reloaded.columns,
            vec!["time", "amplitude", "tdoa", "track_id"]
        );
        assert_eq!(reloaded.column("tdoa").unwrap(), &[1e-5, 1.1e-5]);
        // track ids survive as numbers under the reader's Float64 widening
        assert_eq!(reloaded.column("track_id").unwrap(), &[0.0, -1.0]);
    }

    #[test]
    fn test_empty_table_writes_schema_only() {
        let table = ClickTable {
            columns: vec!["time".to_string()],
            values: vec![vec![]],
        };
        let file = NamedTempFile::with_suffix(".parquet").unwrap();
        write_parquet(file.path(), &table, &[]).unwrap();

        let reloaded = load_parquet(file.path()).unwrap();
        assert!(reloaded.is_empty());
        assert_eq!(reloaded.columns, vec!["time", "track_id"]);
    }
}
