//! # datatour-store
//!
//! A small relational layer over a SQLite file: tables are declared once in
//! a [`MetaData`] catalog, created with [`MetaData::create_all`], and used
//! through [`Insert`] and [`Select`] statements executed on a transactional
//! [`Connection`].
//!
//! ```
//! use datatour_store::{ColumnDef, Engine, EngineOptions, MetaData, SqlType, Table, Value};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let engine = Engine::open(dir.path().join("demo.sqlite"), EngineOptions::default()).unwrap();
//!
//! let mut metadata = MetaData::new();
//! metadata
//!     .add_table(Table::new(
//!         "users",
//!         vec![
//!             ColumnDef::new("id", SqlType::Integer).primary_key(),
//!             ColumnDef::new("name", SqlType::Text),
//!         ],
//!     ))
//!     .unwrap();
//! metadata.create_all(&engine).unwrap();
//!
//! let users = metadata.table("users").unwrap();
//! let mut conn = engine.connect().unwrap();
//! let inserted = conn
//!     .execute_insert(&users.insert().value("name", Value::Text("John".into())))
//!     .unwrap();
//! conn.commit().unwrap();
//! assert_eq!(inserted, 1);
//!
//! let rows = conn.execute_select(&users.select()).unwrap();
//! assert_eq!(rows[0].to_string(), "(1, 'John')");
//! ```

pub mod engine;
pub mod error;
pub mod row;
pub mod schema;
pub mod statement;

pub use engine::{Connection, Engine, EngineOptions};
pub use error::{Result, StoreError};
pub use row::Row;
pub use rusqlite::types::Value;
pub use schema::{ColumnDef, ForeignKey, MetaData, SqlType, Table};
pub use statement::{Insert, Select};
