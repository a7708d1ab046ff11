//! Per-club, per-nation and per-position summaries.

use crate::error::Result;
use crate::model::columns::*;
use crate::model::position::{is_attacker, is_defender, is_midfielder};
use crate::model::{Column, ColumnType, Row, Table, Value};
use crate::schema::{column_position, require_numeric, CLUB_SUMMARY, NATION_SUMMARY, POSITION_COUNT};
use crate::stats::{mean, round2};
use std::collections::HashMap;

/// Rows sharing one key value
#[derive(Debug)]
pub(crate) struct Group<'a> {
    pub key: Value,
    pub rows: Vec<&'a Row>,
}

/// Partition rows by `key_column` in order of first appearance.
/// Rows with a missing key join no group.
pub(crate) fn group_rows<'a>(table: &'a Table, key_column: &str) -> Vec<Group<'a>> {
    let Some(idx) = table.column_index(key_column) else {
        return Vec::new();
    };

    let mut groups: Vec<Group<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0;

    for row in table.rows() {
        let key = &row.values()[idx];
        if key.is_missing() {
            skipped += 1;
            continue;
        }
        let slot = *index.entry(key.to_string()).or_insert_with(|| {
            groups.push(Group {
                key: key.clone(),
                rows: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].rows.push(row);
    }

    if skipped > 0 {
        log::debug!("{} rows without a {} value left ungrouped", skipped, key_column);
    }
    groups
}

/// Present numeric values of column `idx`
pub(crate) fn numbers(rows: &[&Row], idx: usize) -> Vec<f64> {
    rows.iter().filter_map(|r| r.values()[idx].as_f64()).collect()
}

fn count_present(rows: &[&Row], idx: usize) -> i64 {
    rows.iter().filter(|r| !r.values()[idx].is_missing()).count() as i64
}

/// Rounded mean of `value_idx` over rows whose position passes `rule`
fn position_mean(rows: &[&Row], position_idx: usize, value_idx: usize, rule: fn(&str) -> bool) -> Option<f64> {
    let selected: Vec<&Row> = rows
        .iter()
        .filter(|r| r.values()[position_idx].as_str().is_some_and(rule))
        .copied()
        .collect();
    mean(&numbers(&selected, value_idx)).map(round2)
}

fn key_column(table: &Table, name: &str) -> Column {
    let kind = table.column(name).map(|c| c.kind).unwrap_or(ColumnType::Text);
    Column::new(name, kind)
}

/// Stable descending sort on column `idx`, missing values last
fn sort_desc(rows: &mut [Row], idx: usize) {
    rows.sort_by(|a, b| a.values()[idx].cmp_numeric(&b.values()[idx], true));
}

/// One row per club: player count, attacker/midfield/defense means, overall
/// mean. Means are rounded to 2 decimals; a club with nobody in a category
/// gets a missing value there. Sorted by overall mean, highest first.
pub fn club_summary(table: &Table) -> Result<Table> {
    CLUB_SUMMARY.check(table)?;
    require_numeric(table, OVERALL)?;

    let name = column_position(table, NAME)?;
    let position = column_position(table, POSITION)?;
    let overall = column_position(table, OVERALL)?;

    let mut rows: Vec<Row> = group_rows(table, CLUB)
        .into_iter()
        .map(|g| {
            Row::new(vec![
                g.key,
                Value::Integer(count_present(&g.rows, name)),
                position_mean(&g.rows, position, overall, is_attacker).into(),
                position_mean(&g.rows, position, overall, is_midfielder).into(),
                position_mean(&g.rows, position, overall, is_defender).into(),
                mean(&numbers(&g.rows, overall)).map(round2).into(),
            ])
        })
        .collect();
    sort_desc(&mut rows, 5);

    log::debug!("club summary: {} clubs", rows.len());
    Table::new(
        vec![
            key_column(table, CLUB),
            Column::new(PLAYER_COUNT, ColumnType::Integer),
            Column::new(ATTACK_MEAN, ColumnType::Float),
            Column::new(MIDFIELD_MEAN, ColumnType::Float),
            Column::new(DEFENSE_MEAN, ColumnType::Float),
            Column::new(OVERALL, ColumnType::Float),
        ],
        rows,
    )
}

/// One row per nation: player count and rounded overall mean, in order of
/// first appearance
pub fn nation_summary(table: &Table) -> Result<Table> {
    NATION_SUMMARY.check(table)?;
    require_numeric(table, OVERALL)?;

    let name = column_position(table, NAME)?;
    let overall = column_position(table, OVERALL)?;

    let rows = group_rows(table, NATION)
        .into_iter()
        .map(|g| {
            Row::new(vec![
                g.key,
                Value::Integer(count_present(&g.rows, name)),
                mean(&numbers(&g.rows, overall)).map(round2).into(),
            ])
        })
        .collect();

    Table::new(
        vec![
            key_column(table, NATION),
            Column::new(PLAYER_COUNT, ColumnType::Integer),
            Column::new(OVERALL, ColumnType::Float),
        ],
        rows,
    )
}

/// Number of players per position code, in order of first appearance
pub fn position_count(table: &Table) -> Result<Table> {
    POSITION_COUNT.check(table)?;

    let name = column_position(table, NAME)?;

    let rows = group_rows(table, POSITION)
        .into_iter()
        .map(|g| Row::new(vec![g.key, Value::Integer(count_present(&g.rows, name))]))
        .collect();

    Table::new(
        vec![
            key_column(table, POSITION),
            Column::new(PLAYER_COUNT, ColumnType::Integer),
        ],
        rows,
    )
}
