use thiserror::Error;

/// Convenience result type for loading and preparing the dataset.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned while reading the source CSV files and building the dataset.
///
/// Query functions never produce errors; anything that can fail happens before the
/// immutable [`crate::dataset::Games`] value exists.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not conform to the provided schema (missing required columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// A row parsed fine but does not describe a valid event record
    /// (unknown sex/season/medal literal, missing required field).
    #[error("invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },
}
