//! Case-insensitive lookups of a single entity or a whole group.

use crate::error::Result;
use crate::model::{Row, Table, Value};
use crate::schema::require_columns;

fn matches_ignore_case(value: Option<&Value>, query: &str) -> bool {
    match value.and_then(Value::as_str) {
        Some(s) => s.to_lowercase() == query.to_lowercase(),
        None => false,
    }
}

/// First row whose `name_column` equals `query`, ignoring case.
/// Duplicate names resolve to the earliest row in table order.
pub fn find_entity_by_name(table: &Table, name_column: &str, query: &str) -> Result<Option<Row>> {
    require_columns(table, &[name_column])?;
    let idx = table.column_index(name_column);

    Ok(table
        .rows()
        .iter()
        .find(|row| matches_ignore_case(idx.and_then(|i| row.get(i)), query))
        .cloned())
}

/// Every row whose `key_column` equals `query`, ignoring case. No match gives
/// an empty table with the same columns.
pub fn find_group_by_key(table: &Table, key_column: &str, query: &str) -> Result<Table> {
    require_columns(table, &[key_column])?;
    let idx = table.column_index(key_column);

    let group = table.filter(|row| matches_ignore_case(idx.and_then(|i| row.get(i)), query));
    log::debug!("{} = '{}': {} rows", key_column, query, group.len());
    Ok(group)
}
