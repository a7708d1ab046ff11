//! Attribute vectors for radar charts: one player, or a club average.

use crate::aggregate::numbers;
use crate::error::Result;
use crate::model::{Row, Table};
use crate::schema::{column_position, require_columns, require_numeric};
use crate::stats::{mean, round2};

/// Labelled attribute values ready for plotting. A `None` value is a missing cell
/// (or, for a group mean, an attribute nobody in the group has).
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeProfile {
    pub label: String,
    pub attributes: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl AttributeProfile {
    /// (attribute, value) pairs in chart order
    pub fn pairs(&self) -> Vec<(&str, Option<f64>)> {
        self.attributes
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
            .collect()
    }
}

fn check_columns(table: &Table, group_column: &str, extra: &[&str], attributes: &[&str]) -> Result<Vec<usize>> {
    let mut required = vec![group_column];
    required.extend_from_slice(extra);
    required.extend_from_slice(attributes);
    require_columns(table, &required)?;

    attributes
        .iter()
        .map(|a| {
            require_numeric(table, a)?;
            Ok(column_position(table, a)?)
        })
        .collect()
}

/// Rows whose `column` holds exactly `value` (case-sensitive)
fn rows_equal<'a>(table: &'a Table, column: usize, value: &str) -> Vec<&'a Row> {
    table
        .rows()
        .iter()
        .filter(|r| r.values()[column].as_str() == Some(value))
        .collect()
}

/// Attribute values of the player named `entity_value` within group `group_value`
pub fn entity_attributes(
    table: &Table,
    group_column: &str,
    group_value: &str,
    entity_column: &str,
    entity_value: &str,
    attributes: &[&str],
) -> Result<Option<AttributeProfile>> {
    let attr_idx = check_columns(table, group_column, &[entity_column], attributes)?;
    let group_idx = column_position(table, group_column)?;
    let entity_idx = column_position(table, entity_column)?;

    let Some(row) = rows_equal(table, group_idx, group_value)
        .into_iter()
        .find(|r| r.values()[entity_idx].as_str() == Some(entity_value))
    else {
        log::debug!("'{}' not found in {} '{}'", entity_value, group_column, group_value);
        return Ok(None);
    };

    Ok(Some(AttributeProfile {
        label: entity_value.to_string(),
        attributes: attributes.iter().map(|a| a.to_string()).collect(),
        values: attr_idx.iter().map(|&i| row.values()[i].as_f64()).collect(),
    }))
}

/// Per-attribute mean over the group, rounded to 2 decimals. An empty group
/// has no profile.
pub fn group_mean_attributes(
    table: &Table,
    group_column: &str,
    group_value: &str,
    attributes: &[&str],
) -> Result<Option<AttributeProfile>> {
    let attr_idx = check_columns(table, group_column, &[], attributes)?;
    let group_idx = column_position(table, group_column)?;

    let members = rows_equal(table, group_idx, group_value);
    if members.is_empty() {
        return Ok(None);
    }

    Ok(Some(AttributeProfile {
        label: group_value.to_string(),
        attributes: attributes.iter().map(|a| a.to_string()).collect(),
        values: attr_idx
            .iter()
            .map(|&i| mean(&numbers(&members, i)).map(round2))
            .collect(),
    }))
}

/// Name and position of every member of a group, position codes descending
pub fn group_roster(table: &Table, group_column: &str, group_value: &str, name_column: &str, position_column: &str) -> Result<Vec<(String, String)>> {
    require_columns(table, &[group_column, name_column, position_column])?;
    let group_idx = column_position(table, group_column)?;
    let name_idx = column_position(table, name_column)?;
    let position_idx = column_position(table, position_column)?;

    let mut roster: Vec<(String, String)> = rows_equal(table, group_idx, group_value)
        .into_iter()
        .map(|r| {
            (
                r.values()[name_idx].to_string(),
                r.values()[position_idx].to_string(),
            )
        })
        .collect();
    roster.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimited::{read_table_from_str, LoadOptions};
    use crate::model::columns::{ATTRIBUTES, CLUB, NAME, POSITION};

    const PLAYERS: &str = "Name,Club,Position,Pace,Shooting,Passing,Dribbling,Defending,Physicality\n\
                           Ana,Reds,ST,90,85,70,88,30,70\n\
                           Ben,Reds,CB,60,40,61,55,85,\n\
                           Cat,Blues,CM,70,70,80,75,60,65\n";

    fn players() -> Table {
        read_table_from_str(PLAYERS, &LoadOptions::default()).unwrap()
    }

    #[test]
    fn test_entity_attributes() {
        let table = players();
        let profile = entity_attributes(&table, CLUB, "Reds", NAME, "Ana", &ATTRIBUTES)
            .unwrap()
            .unwrap();
        assert_eq!(profile.label, "Ana");
        assert_eq!(
            profile.values,
            vec![Some(90.0), Some(85.0), Some(70.0), Some(88.0), Some(30.0), Some(70.0)]
        );
        assert_eq!(profile.pairs()[0], ("Pace", Some(90.0)));
    }

    #[test]
    fn test_entity_must_be_in_group() {
        let table = players();
        let missing = entity_attributes(&table, CLUB, "Blues", NAME, "Ana", &ATTRIBUTES).unwrap();
        assert_eq!(missing, None);
    }

    #[test]
    fn test_entity_match_is_case_sensitive() {
        let table = players();
        assert_eq!(entity_attributes(&table, CLUB, "Reds", NAME, "ana", &ATTRIBUTES).unwrap(), None);
        assert_eq!(entity_attributes(&table, CLUB, "reds", NAME, "Ana", &ATTRIBUTES).unwrap(), None);
    }

    #[test]
    fn test_entity_missing_attribute_value() {
        let table = players();
        let profile = entity_attributes(&table, CLUB, "Reds", NAME, "Ben", &ATTRIBUTES)
            .unwrap()
            .unwrap();
        assert_eq!(profile.values[5], None);
    }

    #[test]
    fn test_group_mean_attributes() {
        let table = players();
        let profile = group_mean_attributes(&table, CLUB, "Reds", &ATTRIBUTES).unwrap().unwrap();
        assert_eq!(
            profile.values,
            vec![Some(75.0), Some(62.5), Some(65.5), Some(71.5), Some(57.5), Some(70.0)]
        );
    }

    #[test]
    fn test_group_mean_empty_group_is_none() {
        let table = players();
        assert_eq!(group_mean_attributes(&table, CLUB, "Greens", &ATTRIBUTES).unwrap(), None);
    }

    #[test]
    fn test_missing_attribute_column() {
        let table = players();
        let err = group_mean_attributes(&table, CLUB, "Reds", &["Pace", "Stamina"]).unwrap_err();
        assert_eq!(err.missing_columns(), Some(&["Stamina".to_string()][..]));
    }

    #[test]
    fn test_entity_attributes_names_every_missing_column() {
        let table = read_table_from_str("Name,Overall\nAna,80\n", &LoadOptions::default()).unwrap();
        let err = entity_attributes(&table, CLUB, "Reds", NAME, "Ana", &ATTRIBUTES).unwrap_err();
        let expected: Vec<String> = [CLUB]
            .iter()
            .chain(ATTRIBUTES.iter())
            .map(|c| c.to_string())
            .collect();
        assert_eq!(err.missing_columns(), Some(&expected[..]));
    }

    #[test]
    fn test_group_roster_sorted_by_position_desc() {
        let table = players();
        let roster = group_roster(&table, CLUB, "Reds", NAME, POSITION).unwrap();
        assert_eq!(
            roster,
            vec![
                ("Ana".to_string(), "ST".to_string()),
                ("Ben".to_string(), "CB".to_string())
            ]
        );
    }
}
