use crate::error::{MissingColumnError, Result};
use crate::matches::MatchRecord;
use crate::model::{Column, ColumnType, Row, Table, Value};
use crate::schema::{missing_from, MATCH_RECORDS};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;

lazy_static! {
    /// Headers pandas writes for an exported index: blank or "Unnamed: 0"
    static ref INDEX_COLUMN: Regex = Regex::new(r"^(\s*|Unnamed.*)$").unwrap();
}

/// How delimited input is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl LoadOptions {
    fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder.delimiter(self.delimiter).has_headers(true);
        builder
    }
}

pub fn is_index_column(header: &str) -> bool {
    INDEX_COLUMN.is_match(header)
}

/// Pick the narrowest type every present value fits
fn infer_column_type<'a>(values: impl Iterator<Item = &'a str>) -> ColumnType {
    let present: Vec<&str> = values
        .filter(|v| !Value::is_missing_token(v))
        .map(str::trim)
        .collect();

    if present.is_empty() {
        ColumnType::Text
    } else if present.iter().all(|v| v.parse::<i64>().is_ok()) {
        ColumnType::Integer
    } else if present.iter().all(|v| v.parse::<f64>().is_ok()) {
        ColumnType::Float
    } else {
        ColumnType::Text
    }
}

/// Read a table from delimited text with a header row.
/// Index-like leading columns are dropped before the table is built.
pub fn read_table_from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Table> {
    let mut rdr = options.reader_builder().from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut keep = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if is_index_column(header) {
            log::warn!("Dropping index column {} ('{}')", idx + 1, header);
        } else {
            keep.push(idx);
        }
    }

    let mut raw: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        raw.push(
            keep.iter()
                .map(|&i| record.get(i).unwrap_or("").to_string())
                .collect(),
        );
    }

    let columns: Vec<Column> = keep
        .iter()
        .enumerate()
        .map(|(pos, &idx)| {
            let kind = infer_column_type(raw.iter().map(|r| r[pos].as_str()));
            Column::new(&headers[idx], kind)
        })
        .collect();

    let rows: Vec<Row> = raw
        .iter()
        .map(|fields| {
            Row::new(
                fields
                    .iter()
                    .zip(&columns)
                    .map(|(f, c)| Value::parse(f, c.kind))
                    .collect(),
            )
        })
        .collect();

    log::debug!("Loaded {} rows x {} columns", rows.len(), columns.len());
    Table::new(columns, rows)
}

pub fn read_table_from_str(content: &str, options: &LoadOptions) -> Result<Table> {
    read_table_from_reader(content.as_bytes(), options)
}

/// Read a player table from a file
pub fn read_table(path: &Path, options: &LoadOptions) -> Result<Table> {
    let file = File::open(path)?;
    log::debug!("Reading {}", path.display());
    read_table_from_reader(file, options)
}

/// Read match records. The four score columns must be present; rows that
/// fail to deserialize are skipped with a warning.
pub fn read_matches_from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Vec<MatchRecord>> {
    let mut rdr = options.reader_builder().from_reader(reader);
    let headers = rdr.headers()?.clone();

    let missing = missing_from(headers.iter(), MATCH_RECORDS.columns);
    if !missing.is_empty() {
        return Err(MissingColumnError { missing }.into());
    }

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize::<MatchRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("Row {}: skipping match record: {}", idx + 1, e),
        }
    }
    Ok(records)
}

pub fn read_matches(path: &Path, options: &LoadOptions) -> Result<Vec<MatchRecord>> {
    let file = File::open(path)?;
    read_matches_from_reader(file, options)
}
