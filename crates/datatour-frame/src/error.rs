//! Error types for series and dataframes

use std::path::PathBuf;

use thiserror::Error;

use crate::value::DType;

pub type Result<T> = std::result::Result<T, FrameError>;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("column {column}: cannot store {found} in a {expected} column")]
    TypeMismatch {
        column: String,
        expected: DType,
        found: DType,
    },

    #[error("cannot concatenate zero frames")]
    EmptyConcat,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
