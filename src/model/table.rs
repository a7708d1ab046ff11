use super::value::{ColumnType, Value};
use crate::error::{Result, StatsError};
use std::collections::HashSet;
use std::fmt;

/// A named, typed column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// One record, values aligned with the owning table's columns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read-only record set. Every row carries exactly one value per column and
/// column names are unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(StatsError::InvalidTable(format!(
                    "duplicate column name '{}'",
                    column.name
                )));
            }
        }

        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(StatsError::InvalidTable(format!(
                    "row {} has {} values, expected {}",
                    idx + 1,
                    row.len(),
                    columns.len()
                )));
            }
        }

        Ok(Self { columns, rows })
    }

    /// Rows taken from this table (or built against its columns) under the same schema
    pub(crate) fn with_rows(&self, rows: Vec<Row>) -> Table {
        debug_assert!(rows.iter().all(|r| r.len() == self.columns.len()));
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Column names are matched exactly (case-sensitive)
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Value of `column` in `row`, if the column exists
    pub fn value<'a>(&self, row: &'a Row, column: &str) -> Option<&'a Value> {
        self.column_index(column).and_then(|idx| row.get(idx))
    }

    /// Column name / value pairs of a row, in column order
    pub fn record<'a>(&'a self, row: &'a Row) -> Vec<(&'a str, &'a Value)> {
        self.columns
            .iter()
            .map(|c| c.name.as_str())
            .zip(row.values().iter())
            .collect()
    }

    /// Rows for which `keep` holds, in table order
    pub fn filter<F>(&self, keep: F) -> Table
    where
        F: Fn(&Row) -> bool,
    {
        self.with_rows(self.rows.iter().filter(|r| keep(r)).cloned().collect())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|r| r.values().iter().map(|v| v.to_string()).collect())
            .collect();

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.name.len()).collect();
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", c.name, w = *w))
            .collect();
        writeln!(f, "{}", header.join("  ").trim_end())?;

        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .zip(&self.columns)
                .map(|((cell, w), c)| {
                    if c.kind.is_numeric() {
                        format!("{:>w$}", cell, w = *w)
                    } else {
                        format!("{:<w$}", cell, w = *w)
                    }
                })
                .collect();
            writeln!(f, "{}", line.join("  ").trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec![
                Column::new("Name", ColumnType::Text),
                Column::new("Overall", ColumnType::Integer),
            ],
            vec![
                Row::new(vec!["Alpha".into(), Value::Integer(80)]),
                Row::new(vec!["Beta".into(), Value::Missing]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let err = Table::new(
            vec![
                Column::new("Name", ColumnType::Text),
                Column::new("Name", ColumnType::Text),
            ],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, StatsError::InvalidTable(_)));
    }

    #[test]
    fn test_ragged_row_rejected() {
        let err = Table::new(
            vec![Column::new("Name", ColumnType::Text)],
            vec![Row::new(vec!["a".into(), Value::Integer(1)])],
        )
        .unwrap_err();
        assert!(matches!(err, StatsError::InvalidTable(_)));
    }

    #[test]
    fn test_column_lookup_is_case_sensitive() {
        let table = sample();
        assert_eq!(table.column_index("Overall"), Some(1));
        assert_eq!(table.column_index("overall"), None);
    }

    #[test]
    fn test_record_pairs() {
        let table = sample();
        let record = table.record(&table.rows()[0]);
        assert_eq!(record[0], ("Name", &Value::Text("Alpha".into())));
        assert_eq!(record[1], ("Overall", &Value::Integer(80)));
    }

    #[test]
    fn test_filter_keeps_schema() {
        let table = sample();
        let none = table.filter(|_| false);
        assert!(none.is_empty());
        assert_eq!(none.width(), 2);
    }

    #[test]
    fn test_display_renders_missing_as_blank() {
        let rendered = sample().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name   Overall");
        assert_eq!(lines[1], "Alpha       80");
        assert_eq!(lines[2], "Beta");
    }
}
