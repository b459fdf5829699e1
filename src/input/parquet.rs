//! Parquet click table reader.

use crate::error::{Error, Result};
use crate::input::ClickTable;
use arrow::array::Float64Array;
use arrow::datatypes::DataType;
use arrow::error::ArrowError;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Load a click table from a Parquet file.
///
/// Numeric columns of any width are cast to Float64. Columns with null
/// values are rejected; the feature matrix must be dense.
pub fn load_parquet(path: &Path) -> Result<ClickTable> {
    let file = File::open(path).map_err(|e| Error::ClickFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file).map_err(|e| Error::ParquetRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let columns: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let mut values: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];

    let reader = builder.build().map_err(|e| Error::ParquetRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    for batch in reader {
        let batch = batch.map_err(|e| Error::Arrow {
            context: format!("reading record batch from '{}'", path.display()),
            source: e,
        })?;

        for (col, array) in batch.columns().iter().enumerate() {
            let name = &columns[col];
            if array.null_count() > 0 {
                return Err(Error::NullValues {
                    name: name.clone(),
                    path: path.to_path_buf(),
                });
            }

            let cast = arrow::compute::cast(array, &DataType::Float64).map_err(|e| {
                Error::Arrow {
                    context: format!("casting column '{name}' to Float64"),
                    source: e,
                }
            })?;
            let floats = cast
                .as_any()
                .downcast_ref::<Float64Array>()
                .ok_or_else(|| Error::Arrow {
                    context: format!("casting column '{name}' to Float64"),
                    source: ArrowError::CastError(format!(
                        "column '{name}' did not cast to Float64"
                    )),
                })?;
            values[col].extend(floats.values().iter().copied());
        }
    }

    Ok(ClickTable { columns, values })
}
