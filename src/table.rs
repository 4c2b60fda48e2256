use std::collections::HashMap;

use crate::error::TableError;

/// In-memory CSV table: header, data rows, and a name-to-position lookup.
///
/// Rows are kept exactly as parsed; a row shorter or longer than the header is
/// tolerated, cells are addressed positionally. Built once by parsing a file or
/// by a filtering copy, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    column_index: HashMap<String, usize>,
}

impl Table {
    /// Create an empty table with the given header. On duplicate column names
    /// the last occurrence wins in the lookup map.
    pub fn new(columns: Vec<String>) -> Self {
        let column_index = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self {
            columns,
            rows: Vec::new(),
            column_index,
        }
    }

    /// Create an empty table sharing another table's header and lookup map.
    pub fn with_columns_of(other: &Table) -> Self {
        Self {
            columns: other.columns.clone(),
            rows: Vec::new(),
            column_index: other.column_index.clone(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Positional index of a named column.
    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.column_index
            .get(name)
            .copied()
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index.contains_key(name)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
