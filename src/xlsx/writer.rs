use crate::error::Result;
use crate::model::{ColumnType, Table, Value};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::Path;

/// Write a single table to an Excel file
pub fn write_table_to_xlsx(table: &Table, sheet_name: &str, path: &Path) -> Result<()> {
    write_tables_to_xlsx(&[(sheet_name, table)], path)
}

/// Write several tables to one workbook, one worksheet each, in order
pub fn write_tables_to_xlsx(sheets: &[(&str, &Table)], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    for (name, table) in sheets {
        let sheet = workbook.add_worksheet();
        write_table_sheet(sheet, name, table)?;
    }

    workbook.save(path)?;
    log::debug!("Wrote {} worksheet(s) to {}", sheets.len(), path.display());
    Ok(())
}

/// Widest rendered cell in a column, header included
fn column_width(table: &Table, col: usize) -> f64 {
    let header = table.columns()[col].name.len();
    let widest = table
        .rows()
        .iter()
        .map(|r| r.values()[col].to_string().len())
        .max()
        .unwrap_or(0);
    (header.max(widest) + 2).clamp(6, 40) as f64
}

/// Write a table to a worksheet: bold header row, then one row per record.
/// Numbers stay numeric; missing cells are left blank.
fn write_table_sheet(sheet: &mut Worksheet, name: &str, table: &Table) -> Result<()> {
    sheet.set_name(name)?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border_bottom(FormatBorder::Thin);

    // Data formats
    let left_format = Format::new().set_align(FormatAlign::Left);
    let int_format = Format::new().set_align(FormatAlign::Right).set_num_format("0");
    let float_format = Format::new().set_align(FormatAlign::Right).set_num_format("0.00");

    for (col_idx, column) in table.columns().iter().enumerate() {
        let col = col_idx as u16;
        sheet.set_column_width(col, column_width(table, col_idx))?;
        sheet.write_string_with_format(0, col, &column.name, &header_format)?;
    }

    for (row_idx, record) in table.rows().iter().enumerate() {
        let row = (row_idx + 1) as u32;

        for (col_idx, (value, column)) in record.values().iter().zip(table.columns()).enumerate() {
            let col = col_idx as u16;
            let number_format = match column.kind {
                ColumnType::Integer => &int_format,
                _ => &float_format,
            };

            match value {
                Value::Missing => {}
                Value::Text(s) => {
                    sheet.write_string_with_format(row, col, s, &left_format)?;
                }
                Value::Integer(i) => {
                    sheet.write_number_with_format(row, col, *i as f64, number_format)?;
                }
                Value::Float(f) if f.is_nan() => {}
                Value::Float(f) => {
                    sheet.write_number_with_format(row, col, *f, number_format)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, Row};

    fn table() -> Table {
        Table::new(
            vec![
                Column::new("Club", ColumnType::Text),
                Column::new("Player", ColumnType::Integer),
                Column::new("Overall", ColumnType::Float),
            ],
            vec![
                Row::new(vec!["Reds".into(), Value::Integer(25), Value::Float(71.25)]),
                Row::new(vec!["Blues".into(), Value::Integer(0), Value::Missing]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_column_width() {
        let t = table();
        assert_eq!(column_width(&t, 0), 7.0);
        assert_eq!(column_width(&t, 2), 9.0);
    }

    #[test]
    fn test_write_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        let t = table();
        write_tables_to_xlsx(&[("Clubs", &t), ("Copy", &t)], &path).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn test_invalid_sheet_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.xlsx");
        assert!(write_table_to_xlsx(&table(), "bad/name", &path).is_err());
    }
}
