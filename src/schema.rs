//! Column-presence checks run before any query touches row data.

use crate::error::{MissingColumnError, Result, StatsError};
use crate::model::columns::*;
use crate::model::Table;

/// The columns one operation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub operation: &'static str,
    pub columns: &'static [&'static str],
}

impl Requirement {
    pub const fn new(operation: &'static str, columns: &'static [&'static str]) -> Self {
        Self { operation, columns }
    }

    pub fn check(&self, table: &Table) -> std::result::Result<(), MissingColumnError> {
        require_columns(table, self.columns).map_err(|e| {
            log::debug!("{}: missing {:?}", self.operation, e.missing);
            e
        })
    }
}

pub const CLUB_SUMMARY: Requirement =
    Requirement::new("club_summary", &[CLUB, NAME, POSITION, OVERALL]);
pub const NATION_SUMMARY: Requirement =
    Requirement::new("nation_summary", &[NATION, NAME, OVERALL]);
pub const POSITION_COUNT: Requirement = Requirement::new("position_count", &[POSITION, NAME]);
pub const MATCH_RECORDS: Requirement =
    Requirement::new("match_records", &[HOME_TEAM, AWAY_TEAM, HOME_SCORE, AWAY_SCORE]);

/// Names from `required` that are not in `available`, in request order, without repeats
pub fn missing_from<'a, I>(available: I, required: &[&str]) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let available: Vec<&str> = available.into_iter().collect();
    let mut missing: Vec<String> = Vec::new();
    for name in required {
        if !available.contains(name) && !missing.iter().any(|m| m == name) {
            missing.push(name.to_string());
        }
    }
    missing
}

/// Fail with every absent name if any of `columns` is not in the table
pub fn require_columns(table: &Table, columns: &[&str]) -> std::result::Result<(), MissingColumnError> {
    let missing = missing_from(table.column_names(), columns);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingColumnError { missing })
    }
}

/// Index of a column the caller needs
pub fn column_position(table: &Table, column: &str) -> std::result::Result<usize, MissingColumnError> {
    table.column_index(column).ok_or_else(|| MissingColumnError {
        missing: vec![column.to_string()],
    })
}

/// The column must exist and hold numbers
pub fn require_numeric(table: &Table, column: &str) -> Result<()> {
    require_columns(table, &[column])?;
    match table.column(column) {
        Some(c) if c.kind.is_numeric() => Ok(()),
        _ => Err(StatsError::InvalidValue(format!(
            "column '{}' is not numeric",
            column
        ))),
    }
}
