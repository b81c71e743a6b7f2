use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn an input resource into a [`Table`](crate::Table).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed delimited text: {0}")]
    Csv(#[from] csv::Error),
    #[error("input has no header line")]
    Empty,
    /// A header name repeats. Repeats are rejected rather than renamed to
    /// `Qty.1`, `Qty.2`, ... the way dataframe readers accept them.
    #[error("duplicate column {name:?} in header (positions {first} and {second})")]
    DuplicateHeader {
        name: String,
        first: usize,
        second: usize,
    },
    #[error(transparent)]
    Shape(#[from] SchemaError),
}

/// Violation of the table shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("columns {first:?} and {second:?} both normalize to {normalized:?}")]
    ColumnCollision {
        normalized: String,
        first: String,
        second: String,
    },
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("expected {expected} column names, got {actual}")]
    ColumnCount { expected: usize, actual: usize },
}

/// Failure while writing a table out.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to move {} into place at {}: {source}", temp_path.display(), target_path.display())]
    Rename {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any failure that aborts a cleaning run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
