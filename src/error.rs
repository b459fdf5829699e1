//! Error types for clicktrack.

/// Result type alias for clicktrack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for clicktrack.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Tracking parameter rejected at the boundary.
    #[error("invalid tracking parameter: {message}")]
    InvalidParameter {
        /// Description of the rejected parameter.
        message: String,
    },

    /// Click sequence is not sorted by time.
    #[error("clicks are not sorted by time (click {index} precedes its predecessor)")]
    UnsortedClicks {
        /// Index of the first out-of-order click.
        index: usize,
    },

    /// Failed to open or read a click file.
    #[error("failed to read click file '{path}'")]
    ClickFileRead {
        /// Path to the click file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Click file extension is not a supported table format.
    #[error("unsupported click file format: {path} (expected .csv or .parquet)")]
    UnsupportedFormat {
        /// Path with the unrecognized extension.
        path: std::path::PathBuf,
    },

    /// Failed to parse a CSV click file.
    #[error("failed to parse CSV file '{path}'")]
    CsvParse {
        /// Path to the CSV file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: csv::Error,
    },

    /// Failed to write a CSV file.
    #[error("failed to write CSV file '{path}'")]
    CsvWrite {
        /// Path to the CSV file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: csv::Error,
    },

    /// A CSV cell did not parse as a number.
    #[error("non-numeric value '{value}' in column '{column}', row {row} of '{path}'")]
    NonNumericValue {
        /// Offending cell contents.
        value: String,
        /// Column name.
        column: String,
        /// 1-based data row number.
        row: usize,
        /// Path to the CSV file.
        path: std::path::PathBuf,
    },

    /// Required column missing from the click table.
    #[error("column '{name}' not found in '{path}'")]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the click file.
        path: std::path::PathBuf,
    },

    /// A table column contains null values.
    #[error("column '{name}' in '{path}' contains null values")]
    NullValues {
        /// Name of the column with nulls.
        name: String,
        /// Path to the click file.
        path: std::path::PathBuf,
    },

    /// Failed to read a Parquet click file.
    #[error("failed to read Parquet file '{path}'")]
    ParquetRead {
        /// Path to the Parquet file.
        path: std::path::PathBuf,
        /// Underlying Parquet error.
        #[source]
        source: parquet::errors::ParquetError,
    },

    /// Failed to write a Parquet file.
    #[error("failed to write Parquet file: {context}")]
    ParquetWrite {
        /// What was being written.
        context: String,
        /// Underlying Parquet error.
        #[source]
        source: parquet::errors::ParquetError,
    },

    /// Arrow columnar operation failed.
    #[error("arrow error: {context}")]
    Arrow {
        /// What was being computed.
        context: String,
        /// Underlying Arrow error.
        #[source]
        source: arrow::error::ArrowError,
    },

    /// Failed to create an output file.
    #[error("failed to create output file '{path}'")]
    OutputCreate {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the run-metadata sidecar.
    #[error("failed to write metadata file '{path}'")]
    MetadataWrite {
        /// Path to the metadata file.
        path: std::path::PathBuf,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
