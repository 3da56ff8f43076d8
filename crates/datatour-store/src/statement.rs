//! Insert and select statements bound to a declared table.

use rusqlite::types::Value;

use crate::error::{Result, StoreError};
use crate::schema::Table;

/// `INSERT INTO table (cols...) VALUES (?, ...)`.
///
/// Columns are checked against the table when the statement is compiled,
/// not when values are added.
#[derive(Debug, Clone)]
pub struct Insert<'t> {
    table: &'t Table,
    values: Vec<(String, Value)>,
}

impl<'t> Insert<'t> {
    pub(crate) fn new(table: &'t Table) -> Self {
        Self {
            table,
            values: Vec::new(),
        }
    }

    /// Set `column` to `value`. Setting a column twice keeps the last value.
    #[must_use]
    pub fn value(mut self, column: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        match self.values.iter_mut().find(|(name, _)| name == column) {
            Some(slot) => slot.1 = value,
            None => self.values.push((column.to_string(), value)),
        }
        self
    }

    pub fn table(&self) -> &Table {
        self.table
    }

    /// SQL text with positional parameters, and the parameters in order.
    pub fn compile(&self) -> Result<(String, Vec<Value>)> {
        if self.values.is_empty() {
            return Err(StoreError::EmptyInsert(self.table.name().to_string()));
        }
        for (column, _) in &self.values {
            self.table.check_column(column)?;
        }

        let columns: Vec<&str> = self.values.iter().map(|(c, _)| c.as_str()).collect();
        let placeholders = vec!["?"; columns.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table.name(),
            columns.join(", "),
            placeholders
        );
        let params = self.values.iter().map(|(_, v)| v.clone()).collect();
        Ok((sql, params))
    }
}

/// `SELECT` of every column of one table, in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct Select<'t> {
    table: &'t Table,
}

impl<'t> Select<'t> {
    pub(crate) fn new(table: &'t Table) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Table {
        self.table
    }

    pub fn compile(&self) -> String {
        let name = self.table.name();
        let columns: Vec<String> = self
            .table
            .columns()
            .iter()
            .map(|c| format!("{name}.{}", c.name))
            .collect();
        format!("SELECT {} \nFROM {name}", columns.join(", "))
    }
}
