//! Table declarations and the catalog that creates them.
//!
//! Tables are declared once and never altered; `create_all` only issues
//! `CREATE TABLE IF NOT EXISTS`.

use std::fmt;

use crate::engine::Engine;
use crate::error::{Result, StoreError};
use crate::statement::{Insert, Select};

/// Column storage class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Text,
    Real,
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SqlType::Integer => "INTEGER",
            SqlType::Text => "TEXT",
            SqlType::Real => "REAL",
        })
    }
}

/// Target of a foreign key: `table(column)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub table: String,
    pub column: String,
}

/// A table column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: SqlType,
    /// Whether this is the primary key column. An `INTEGER` primary key is
    /// SQLite's rowid, so inserts may leave it out.
    pub primary_key: bool,
    pub references: Option<ForeignKey>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, ty: SqlType) -> Self {
        Self {
            name: name.into(),
            ty,
            primary_key: false,
            references: None,
        }
    }

    /// Sets this column as the primary key.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Sets this column as a foreign key reference to `table(column)`.
    #[must_use]
    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.references = Some(ForeignKey {
            table: table.into(),
            column: column.into(),
        });
        self
    }
}

/// A table schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<ColumnDef>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the column with the given name, if it exists.
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub(crate) fn check_column(&self, name: &str) -> Result<()> {
        match self.column(name) {
            Some(_) => Ok(()),
            None => Err(StoreError::UnknownColumn {
                table: self.name.clone(),
                column: name.to_string(),
            }),
        }
    }

    /// The `CREATE TABLE IF NOT EXISTS` statement for this table.
    ///
    /// ```
    /// use datatour_store::{ColumnDef, SqlType, Table};
    ///
    /// let t = Table::new("t", vec![ColumnDef::new("id", SqlType::Integer).primary_key()]);
    /// assert_eq!(
    ///     t.create_sql(),
    ///     "CREATE TABLE IF NOT EXISTS t (\n\tid INTEGER NOT NULL, \n\tPRIMARY KEY (id)\n)"
    /// );
    /// ```
    pub fn create_sql(&self) -> String {
        let mut parts: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                if c.primary_key {
                    format!("{} {} NOT NULL", c.name, c.ty)
                } else {
                    format!("{} {}", c.name, c.ty)
                }
            })
            .collect();

        let keys: Vec<&str> = self
            .columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name.as_str())
            .collect();
        if !keys.is_empty() {
            parts.push(format!("PRIMARY KEY ({})", keys.join(", ")));
        }
        for c in &self.columns {
            if let Some(fk) = &c.references {
                parts.push(format!(
                    "FOREIGN KEY({}) REFERENCES {} ({})",
                    c.name, fk.table, fk.column
                ));
            }
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n\t{}\n)",
            self.name,
            parts.join(", \n\t")
        )
    }

    /// Start an `INSERT` into this table.
    pub fn insert(&self) -> Insert<'_> {
        Insert::new(self)
    }

    /// A `SELECT` of every column of this table.
    pub fn select(&self) -> Select<'_> {
        Select::new(self)
    }

    fn depends_on(&self, other: &str) -> bool {
        self.columns
            .iter()
            .filter_map(|c| c.references.as_ref())
            .any(|fk| fk.table == other && fk.table != self.name)
    }
}

/// An ordered catalog of declared tables.
#[derive(Debug, Clone, Default)]
pub struct MetaData {
    tables: Vec<Table>,
}

impl MetaData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a table. Names must be unique within the catalog.
    pub fn add_table(&mut self, table: Table) -> Result<&Table> {
        if self.tables.iter().any(|t| t.name == table.name) {
            return Err(StoreError::DuplicateTable(table.name));
        }
        self.tables.push(table);
        Ok(&self.tables[self.tables.len() - 1])
    }

    pub fn table(&self, name: &str) -> Result<&Table> {
        self.tables
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| StoreError::TableNotFound(name.to_string()))
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Tables ordered so that every referenced table precedes the tables
    /// referencing it. Tables caught in a reference cycle keep their
    /// declaration order.
    pub fn sorted_tables(&self) -> Vec<&Table> {
        let mut sorted: Vec<&Table> = Vec::with_capacity(self.tables.len());
        let mut pending: Vec<&Table> = self.tables.iter().collect();

        while !pending.is_empty() {
            let ready = pending.iter().position(|t| {
                !pending
                    .iter()
                    .any(|other| other.name != t.name && t.depends_on(&other.name))
            });
            let next = pending.remove(ready.unwrap_or(0));
            sorted.push(next);
        }
        sorted
    }

    /// Create every declared table that does not exist yet, in dependency
    /// order, inside one transaction.
    pub fn create_all(&self, engine: &Engine) -> Result<()> {
        let mut conn = engine.connect()?;
        for table in self.sorted_tables() {
            conn.execute_sql(&table.create_sql())?;
            tracing::debug!("ensured table {}", table.name);
        }
        conn.commit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Table {
        Table::new(
            "users",
            vec![
                ColumnDef::new("id", SqlType::Integer).primary_key(),
                ColumnDef::new("name", SqlType::Text),
            ],
        )
    }

    fn posts() -> Table {
        Table::new(
            "posts",
            vec![
                ColumnDef::new("id", SqlType::Integer).primary_key(),
                ColumnDef::new("user_id", SqlType::Integer).references("users", "id"),
            ],
        )
    }

    #[test]
    fn test_create_sql_with_foreign_key() {
        assert_eq!(
            posts().create_sql(),
            "CREATE TABLE IF NOT EXISTS posts (\n\
             \tid INTEGER NOT NULL, \n\
             \tuser_id INTEGER, \n\
             \tPRIMARY KEY (id), \n\
             \tFOREIGN KEY(user_id) REFERENCES users (id)\n)"
        );
    }

    #[test]
    fn test_duplicate_table() {
        let mut md = MetaData::new();
        md.add_table(users()).unwrap();
        assert!(matches!(
            md.add_table(users()),
            Err(StoreError::DuplicateTable(name)) if name == "users"
        ));
    }

    #[test]
    fn test_lookup() {
        let mut md = MetaData::new();
        md.add_table(users()).unwrap();
        assert_eq!(md.table("users").unwrap().columns().len(), 2);
        assert!(matches!(md.table("nope"), Err(StoreError::TableNotFound(_))));
        assert!(md.table("users").unwrap().check_column("age").is_err());
    }

    #[test]
    fn test_sorted_tables_puts_referenced_first() {
        let mut md = MetaData::new();
        md.add_table(posts()).unwrap();
        md.add_table(users()).unwrap();
        let names: Vec<&str> = md.sorted_tables().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["users", "posts"]);
    }

    #[test]
    fn test_self_reference_is_not_a_dependency() {
        let tree = Table::new(
            "nodes",
            vec![
                ColumnDef::new("id", SqlType::Integer).primary_key(),
                ColumnDef::new("parent", SqlType::Integer).references("nodes", "id"),
            ],
        );
        let mut md = MetaData::new();
        md.add_table(tree).unwrap();
        assert_eq!(md.sorted_tables().len(), 1);
    }

    #[test]
    fn test_create_all_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let engine =
            Engine::open(dir.path().join("schema.sqlite"), crate::EngineOptions::default())
                .unwrap();
        let mut md = MetaData::new();
        md.add_table(users()).unwrap();
        md.add_table(posts()).unwrap();
        md.create_all(&engine).unwrap();
        md.create_all(&engine).unwrap();

        let mut conn = engine.connect().unwrap();
        let rows = conn.execute_select(&md.table("posts").unwrap().select()).unwrap();
        assert!(rows.is_empty());
    }
}
