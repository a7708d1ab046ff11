//! Leaderboards: top rows by numeric keys, per position category, and top
//! groups by mean.

use crate::aggregate::{group_rows, numbers};
use crate::error::Result;
use crate::model::columns::POSITION;
use crate::model::{Column, ColumnType, PositionCategory, Row, Table};
use crate::schema::{column_position, require_columns, require_numeric};
use crate::stats::mean;
use std::cmp::Ordering;

pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_CATEGORY_TOP_N: usize = 10;

/// Sort rows by numeric `columns`, most significant first. The sort is stable,
/// so rows with equal keys keep their table order. Missing keys go last.
pub fn sort_by_columns(table: &Table, columns: &[&str], descending: bool) -> Result<Table> {
    let mut keys = Vec::with_capacity(columns.len());
    for column in columns {
        require_numeric(table, column)?;
        keys.push(column_position(table, column)?);
    }

    let mut rows: Vec<&Row> = table.rows().iter().collect();
    rows.sort_by(|a, b| {
        keys.iter()
            .map(|&k| a.values()[k].cmp_numeric(&b.values()[k], descending))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });

    Ok(table.with_rows(rows.into_iter().cloned().collect()))
}

/// First `n` rows after sorting on several keys
pub fn top_n_by(table: &Table, columns: &[&str], n: usize, descending: bool) -> Result<Table> {
    let sorted = sort_by_columns(table, columns, descending)?;
    Ok(sorted.with_rows(sorted.rows().iter().take(n).cloned().collect()))
}

/// First `n` rows by `sort_column`. Asking for more rows than exist returns all of them.
pub fn top_n(table: &Table, sort_column: &str, n: usize, descending: bool) -> Result<Table> {
    top_n_by(table, &[sort_column], n, descending)
}

/// Rows whose position code belongs to `category`, in table order
pub fn filter_by_category(table: &Table, category: PositionCategory) -> Result<Table> {
    let position = column_position(table, POSITION)?;
    Ok(table.filter(|row| {
        row.values()[position]
            .as_str()
            .is_some_and(|code| category.matches(code))
    }))
}

/// Best `n` players of a position category, highest first.
/// Goalkeepers rank on goalkeeping rating, then overall.
pub fn top_n_by_position_category(table: &Table, category: PositionCategory, n: usize) -> Result<Table> {
    let mut required = vec![POSITION];
    required.extend_from_slice(category.sort_columns());
    require_columns(table, &required)?;

    let members = filter_by_category(table, category)?;
    log::debug!("{}: {} candidates", category, members.len());
    top_n_by(&members, category.sort_columns(), n, true)
}

/// Leaderboards for every position category
pub fn category_leaderboards(table: &Table, n: usize) -> Result<Vec<(PositionCategory, Table)>> {
    PositionCategory::ALL
        .iter()
        .map(|&category| Ok((category, top_n_by_position_category(table, category, n)?)))
        .collect()
}

/// Groups of `group_column` ranked by the mean of `metric_column`, highest
/// first, as (key, mean) rows. Missing metric values are ignored; a group with
/// none left has a missing mean and ranks last.
pub fn top_n_groups_by_mean(table: &Table, group_column: &str, metric_column: &str, n: usize) -> Result<Table> {
    require_columns(table, &[group_column, metric_column])?;
    require_numeric(table, metric_column)?;
    let metric = column_position(table, metric_column)?;

    let mut rows: Vec<Row> = group_rows(table, group_column)
        .into_iter()
        .map(|g| Row::new(vec![g.key, mean(&numbers(&g.rows, metric)).into()]))
        .collect();
    rows.sort_by(|a, b| a.values()[1].cmp_numeric(&b.values()[1], true));
    rows.truncate(n);

    let key_kind = table
        .column(group_column)
        .map(|c| c.kind)
        .unwrap_or(ColumnType::Text);
    Table::new(
        vec![
            Column::new(group_column, key_kind),
            Column::new(metric_column, ColumnType::Float),
        ],
        rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimited::{read_table_from_str, LoadOptions};
    use crate::error::StatsError;
    use crate::model::Value;

    fn load(csv: &str) -> Table {
        read_table_from_str(csv, &LoadOptions::default()).unwrap()
    }

    fn names(table: &Table) -> Vec<String> {
        let idx = table.column_index("Name").unwrap();
        table.rows().iter().map(|r| r.values()[idx].to_string()).collect()
    }

    const SQUAD: &str = "Name,Club,Position,Overall,GK\n\
                         Striker,Reds,ST,90,10\n\
                         Forward,Blues,CF,85,12\n\
                         Stopper,Reds,CB,99,15\n\
                         Keeper,Blues,GK,80,88\n\
                         Backup,Reds,GK,82,88\n\
                         Wingback,Blues,LWB,77,9\n\
                         Right,Reds,RCB,84,11\n\
                         Playmaker,Blues,CAM,85,8\n";

    #[test]
    fn test_top_n_sorted_and_capped() {
        let table = load(SQUAD);
        let top = top_n(&table, "Overall", 3, true).unwrap();
        assert_eq!(names(&top), vec!["Stopper", "Striker", "Forward"]);
    }

    #[test]
    fn test_top_n_stable_ties() {
        let table = load(SQUAD);
        let top = top_n(&table, "Overall", DEFAULT_TOP_N, true).unwrap();
        // Forward and Playmaker tie on 85; table order is kept
        assert_eq!(names(&top), vec!["Stopper", "Striker", "Forward", "Playmaker", "Right"]);
    }

    #[test]
    fn test_top_n_more_than_rows() {
        let table = load(SQUAD);
        let top = top_n(&table, "Overall", 100, true).unwrap();
        assert_eq!(top.len(), table.len());
    }

    #[test]
    fn test_top_n_ascending() {
        let table = load(SQUAD);
        let bottom = top_n(&table, "Overall", 2, false).unwrap();
        assert_eq!(names(&bottom), vec!["Wingback", "Keeper"]);
    }

    #[test]
    fn test_top_n_missing_values_last() {
        let table = load("Name,Overall\nA,\nB,70\nC,80\n");
        let top = top_n(&table, "Overall", 3, true).unwrap();
        assert_eq!(names(&top), vec!["C", "B", "A"]);
        let bottom = top_n(&table, "Overall", 3, false).unwrap();
        assert_eq!(names(&bottom), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_top_n_missing_column() {
        let table = load(SQUAD);
        let err = top_n(&table, "Rating", 5, true).unwrap_err();
        assert_eq!(err.missing_columns(), Some(&["Rating".to_string()][..]));
    }

    #[test]
    fn test_top_n_text_column_rejected() {
        let table = load(SQUAD);
        assert!(matches!(
            top_n(&table, "Club", 5, true),
            Err(StatsError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_attackers_exclude_defenders() {
        let table = load("Name,Position,Overall\nS,ST,90\nF,CF,85\nD,CB,99\n");
        let top = top_n_by_position_category(&table, PositionCategory::Attackers, 10).unwrap();
        assert_eq!(names(&top), vec!["S", "F"]);
    }

    #[test]
    fn test_defender_splits_overlap() {
        let table = load(SQUAD);
        let defenders = top_n_by_position_category(&table, PositionCategory::Defenders, 10).unwrap();
        assert_eq!(names(&defenders), vec!["Stopper", "Right", "Wingback"]);

        let center = top_n_by_position_category(&table, PositionCategory::CenterDefenders, 10).unwrap();
        assert_eq!(names(&center), vec!["Stopper", "Right"]);

        let right = top_n_by_position_category(&table, PositionCategory::RightDefenders, 10).unwrap();
        assert_eq!(names(&right), vec!["Right"]);

        let left = top_n_by_position_category(&table, PositionCategory::LeftDefenders, 10).unwrap();
        assert_eq!(names(&left), vec!["Wingback"]);
    }

    #[test]
    fn test_midfielders() {
        let table = load(SQUAD);
        let mids = top_n_by_position_category(&table, PositionCategory::Midfielders, 10).unwrap();
        assert_eq!(names(&mids), vec!["Playmaker"]);
    }

    #[test]
    fn test_goalkeepers_rank_on_gk_then_overall() {
        let table = load(SQUAD);
        let keepers = top_n_by_position_category(&table, PositionCategory::Goalkeepers, 10).unwrap();
        assert_eq!(names(&keepers), vec!["Backup", "Keeper"]);
    }

    #[test]
    fn test_goalkeepers_need_gk_column() {
        let table = load("Name,Position,Overall\nK,GK,80\n");
        let err = top_n_by_position_category(&table, PositionCategory::Goalkeepers, 10).unwrap_err();
        assert_eq!(err.missing_columns(), Some(&["GK".to_string()][..]));
        // other categories don't need it
        assert!(top_n_by_position_category(&table, PositionCategory::Attackers, 10).is_ok());
    }

    #[test]
    fn test_category_cap() {
        let mut csv = String::from("Name,Position,Overall\n");
        for i in 0..15 {
            csv.push_str(&format!("P{},ST,{}\n", i, 60 + i));
        }
        let table = load(&csv);
        let top = top_n_by_position_category(&table, PositionCategory::Attackers, DEFAULT_CATEGORY_TOP_N).unwrap();
        assert_eq!(top.len(), 10);
        assert_eq!(names(&top)[0], "P14");
    }

    #[test]
    fn test_category_leaderboards() {
        let table = load(SQUAD);
        let boards = category_leaderboards(&table, 10).unwrap();
        assert_eq!(boards.len(), 7);
        assert_eq!(boards[0].0, PositionCategory::Attackers);
        assert_eq!(boards[0].1.len(), 2);
    }

    #[test]
    fn test_top_groups_by_mean() {
        let table = load(SQUAD);
        let top = top_n_groups_by_mean(&table, "Club", "Overall", 5).unwrap();
        assert_eq!(top.column_names().collect::<Vec<_>>(), vec!["Club", "Overall"]);
        // Reds: (90 + 99 + 82 + 84) / 4 = 88.75, Blues: (85 + 80 + 77 + 85) / 4 = 81.75
        assert_eq!(top.rows()[0].values()[0], Value::Text("Reds".into()));
        assert_eq!(top.rows()[0].values()[1], Value::Float(88.75));
        assert_eq!(top.rows()[1].values()[1], Value::Float(81.75));

        let one = top_n_groups_by_mean(&table, "Club", "Overall", 1).unwrap();
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn test_top_groups_missing_column() {
        let table = load(SQUAD);
        let err = top_n_groups_by_mean(&table, "Nation", "Overall", 5).unwrap_err();
        assert_eq!(err.missing_columns(), Some(&["Nation".to_string()][..]));
    }
}
