//! Error types for schemas and statements

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("table not found: {0}")]
    TableNotFound(String),

    #[error("table already declared: {0}")]
    DuplicateTable(String),

    #[error("table {table} has no column {column}")]
    UnknownColumn { table: String, column: String },

    #[error("insert into {0} sets no columns")]
    EmptyInsert(String),
}
