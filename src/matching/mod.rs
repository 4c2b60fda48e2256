//! Key extraction and set-membership row filtering.

use std::collections::HashSet;

use crate::error::TableError;
use crate::table::Table;

/// Composite key: the cells of one row at a fixed set of column positions,
/// compared element-wise and order-sensitively.
pub type KeyTuple = Vec<String>;

/// Extract the key tuple for one row. Indices past the end of a short row
/// yield an empty string rather than failing.
pub fn extract_keys(row: &[String], indices: &[usize]) -> KeyTuple {
    indices
        .iter()
        .map(|&idx| row.get(idx).cloned().unwrap_or_default())
        .collect()
}

/// Keep exactly the rows of `primary` whose key tuple appears among the rows
/// of `reference`.
///
/// Key columns are resolved by name against each table independently, so they
/// may sit at different positions in the two files. Reference keys form a set
/// (duplicates collapse); primary rows keep their original order and are never
/// deduplicated.
pub fn filter_matching(
    primary: &Table,
    reference: &Table,
    key_columns: &[String],
) -> Result<Table, TableError> {
    let mut primary_indices = Vec::with_capacity(key_columns.len());
    let mut reference_indices = Vec::with_capacity(key_columns.len());
    for name in key_columns {
        primary_indices.push(primary.column_index(name)?);
        reference_indices.push(reference.column_index(name)?);
    }

    let mut reference_keys: HashSet<KeyTuple> = HashSet::with_capacity(reference.row_count());
    for row in reference.rows() {
        reference_keys.insert(extract_keys(row, &reference_indices));
    }

    let mut result = Table::with_columns_of(primary);
    for row in primary.rows() {
        if reference_keys.contains(&extract_keys(row, &primary_indices)) {
            result.push_row(row.clone());
        }
    }
    Ok(result)
}
