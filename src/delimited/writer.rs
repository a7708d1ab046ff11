use crate::error::{Result, StatsError};
use crate::model::columns::*;
use crate::model::Table;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column layout of the exported club report
pub const CLUB_SUMMARY_HEADER: [&str; 6] = [
    CLUB,
    PLAYER_COUNT,
    ATTACK_MEAN,
    MIDFIELD_MEAN,
    DEFENSE_MEAN,
    OVERALL,
];

/// Write a table as comma-separated text: header row, then one line per row.
/// Missing cells are written as empty fields.
pub fn write_table_to_writer<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.column_names())?;
    for row in table.rows() {
        wtr.write_record(row.values().iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_table_csv(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_table_to_writer(table, file)?;
    log::debug!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

/// Write a club summary, refusing tables that don't carry the report layout
pub fn write_club_summary_csv(table: &Table, path: &Path) -> Result<()> {
    let names: Vec<&str> = table.column_names().collect();
    if names != CLUB_SUMMARY_HEADER {
        return Err(StatsError::InvalidTable(format!(
            "expected club summary columns {:?}, found {:?}",
            CLUB_SUMMARY_HEADER, names
        )));
    }
    write_table_csv(table, path)
}
