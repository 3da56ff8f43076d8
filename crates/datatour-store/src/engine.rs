//! Engines and transactional connections.
//!
//! A [`Connection`] begins a transaction with its first statement and keeps
//! it open until [`Connection::commit`]. Dropping a connection with work
//! still uncommitted rolls that work back.

use std::path::{Path, PathBuf};

use rusqlite::types::Value;

use crate::error::Result;
use crate::row::{write_tuple, Row};
use crate::statement::{Insert, Select};

#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// Log every statement and its parameters at INFO.
    pub echo: bool,
    /// Enforce `FOREIGN KEY` constraints on every connection.
    pub foreign_keys: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            echo: false,
            foreign_keys: true,
        }
    }
}

/// A handle on one SQLite database file that hands out connections.
#[derive(Debug, Clone)]
pub struct Engine {
    path: PathBuf,
    options: EngineOptions,
}

impl Engine {
    /// Open (creating if absent) the database at `path`.
    pub fn open(path: impl AsRef<Path>, options: EngineOptions) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        rusqlite::Connection::open(&path)?;
        tracing::debug!("opened database {}", path.display());
        Ok(Self { path, options })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// A fresh connection to the database.
    pub fn connect(&self) -> Result<Connection> {
        let conn = rusqlite::Connection::open(&self.path)?;
        if self.options.foreign_keys {
            conn.execute_batch("PRAGMA foreign_keys = ON")?;
        }
        Ok(Connection {
            conn,
            echo: self.options.echo,
            in_transaction: false,
        })
    }
}

/// One open database connection with an implicit transaction.
#[derive(Debug)]
pub struct Connection {
    conn: rusqlite::Connection,
    echo: bool,
    in_transaction: bool,
}

impl Connection {
    pub fn in_transaction(&self) -> bool {
        self.in_transaction
    }

    /// Execute an `INSERT`, returning the number of rows inserted.
    pub fn execute_insert(&mut self, insert: &Insert<'_>) -> Result<usize> {
        let (sql, params) = insert.compile()?;
        self.begin()?;
        self.log(&sql, &params);
        let count = self
            .conn
            .execute(&sql, rusqlite::params_from_iter(params.iter()))?;
        Ok(count)
    }

    /// Execute a `SELECT`, collecting every row.
    pub fn execute_select(&mut self, select: &Select<'_>) -> Result<Vec<Row>> {
        let sql = select.compile();
        self.begin()?;
        self.log(&sql, &[]);

        let mut stmt = self.conn.prepare(&sql)?;
        let width = stmt.column_count();
        let rows = stmt
            .query_map([], |row| {
                (0..width)
                    .map(|i| row.get::<_, Value>(i))
                    .collect::<rusqlite::Result<Vec<Value>>>()
                    .map(Row::new)
            })?
            .collect::<rusqlite::Result<Vec<Row>>>()?;
        Ok(rows)
    }

    /// Execute raw SQL without parameters, returning the affected row count.
    pub fn execute_sql(&mut self, sql: &str) -> Result<usize> {
        self.begin()?;
        self.log(sql, &[]);
        Ok(self.conn.execute(sql, [])?)
    }

    /// Commit the open transaction, if any.
    pub fn commit(&mut self) -> Result<()> {
        if self.in_transaction {
            self.log("COMMIT", &[]);
            self.conn.execute_batch("COMMIT")?;
            self.in_transaction = false;
        }
        Ok(())
    }

    /// Roll back the open transaction, if any.
    pub fn rollback(&mut self) -> Result<()> {
        if self.in_transaction {
            self.log("ROLLBACK", &[]);
            self.in_transaction = false;
            self.conn.execute_batch("ROLLBACK")?;
        }
        Ok(())
    }

    fn begin(&mut self) -> Result<()> {
        if !self.in_transaction {
            self.log("BEGIN (implicit)", &[]);
            self.conn.execute_batch("BEGIN")?;
            self.in_transaction = true;
        }
        Ok(())
    }

    fn log(&self, sql: &str, params: &[Value]) {
        if !self.echo {
            return;
        }
        tracing::info!("{}", sql);
        if !params.is_empty() {
            let mut shown = String::new();
            if write_tuple(&mut shown, params).is_ok() {
                tracing::info!("{}", shown);
            }
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        if let Err(e) = self.rollback() {
            tracing::warn!("rollback on close failed: {}", e);
        }
    }
}
