//! Match records and the one-hot encoding handed to the outcome predictor.

use crate::error::{Result, StatsError};
use crate::model::columns::{AWAY_TEAM, HOME_TEAM, RESULT};
use crate::model::{Column, ColumnType, Row, Table, Value};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;

/// One played match
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
}

impl MatchRecord {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_scores(self.home_score, self.away_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    HomeWin,
    Draw,
    AwayWin,
}

impl Outcome {
    pub fn from_scores(home: i32, away: i32) -> Self {
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::AwayWin,
        }
    }

    /// Class label: 1 home win, 0 draw, -1 away win
    pub fn code(&self) -> i64 {
        match self {
            Outcome::HomeWin => 1,
            Outcome::Draw => 0,
            Outcome::AwayWin => -1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::HomeWin => write!(f, "home win"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::AwayWin => write!(f, "away win"),
        }
    }
}

/// Tally of outcomes over a set of matches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub home_wins: usize,
    pub draws: usize,
    pub away_wins: usize,
}

pub fn outcome_counts(records: &[MatchRecord]) -> OutcomeCounts {
    let mut counts = OutcomeCounts::default();
    for record in records {
        match record.outcome() {
            Outcome::HomeWin => counts.home_wins += 1,
            Outcome::Draw => counts.draws += 1,
            Outcome::AwayWin => counts.away_wins += 1,
        }
    }
    counts
}

/// Every team name, home sides first, each once in order of appearance
pub fn teams(records: &[MatchRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    let names = records
        .iter()
        .map(|r| &r.home_team)
        .chain(records.iter().map(|r| &r.away_team));
    for name in names {
        if !seen.contains(name) {
            seen.push(name.clone());
        }
    }
    seen
}

fn dummy_name(prefix: &str, team: &str) -> String {
    format!("{}_{}", prefix, team)
}

/// One-hot encode home and away teams. Columns are `home_team_<name>` for
/// every home side, then `away_team_<name>` for every away side (names sorted),
/// then the `result` label.
pub fn encode(records: &[MatchRecord]) -> Result<Table> {
    let home: BTreeSet<&str> = records.iter().map(|r| r.home_team.as_str()).collect();
    let away: BTreeSet<&str> = records.iter().map(|r| r.away_team.as_str()).collect();

    let mut columns: Vec<Column> = home
        .iter()
        .map(|t| Column::new(dummy_name(HOME_TEAM, t), ColumnType::Integer))
        .chain(
            away.iter()
                .map(|t| Column::new(dummy_name(AWAY_TEAM, t), ColumnType::Integer)),
        )
        .collect();
    columns.push(Column::new(RESULT, ColumnType::Integer));

    let rows = records
        .iter()
        .map(|r| {
            let mut values: Vec<Value> = home
                .iter()
                .map(|t| Value::Integer((*t == r.home_team) as i64))
                .chain(away.iter().map(|t| Value::Integer((*t == r.away_team) as i64)))
                .collect();
            values.push(Value::Integer(r.outcome().code()));
            Row::new(values)
        })
        .collect();

    log::debug!("Encoded {} matches into {} features", records.len(), columns.len() - 1);
    Table::new(columns, rows)
}

/// Feature columns of an encoded table (everything but the label)
pub fn feature_columns(encoded: &Table) -> Vec<String> {
    encoded
        .column_names()
        .filter(|n| *n != RESULT)
        .map(String::from)
        .collect()
}

/// Feature row for one fixture, aligned with `columns`. Teams never seen on
/// that side encode as all zeros.
pub fn encode_fixture(home: &str, away: &str, columns: &[String]) -> Result<Vec<i64>> {
    if home.is_empty() || away.is_empty() {
        return Err(StatsError::InvalidValue(
            "both home and away team are required".to_string(),
        ));
    }
    if home == away {
        return Err(StatsError::InvalidValue(format!(
            "home and away team must differ (got '{}' twice)",
            home
        )));
    }

    let home_col = dummy_name(HOME_TEAM, home);
    let away_col = dummy_name(AWAY_TEAM, away);
    Ok(columns
        .iter()
        .map(|c| (*c == home_col || *c == away_col) as i64)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(home: &str, away: &str, hs: i32, as_: i32) -> MatchRecord {
        MatchRecord {
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: hs,
            away_score: as_,
        }
    }

    fn fixtures() -> Vec<MatchRecord> {
        vec![
            record("Reds", "Blues", 2, 1),
            record("Blues", "Greens", 0, 0),
            record("Greens", "Reds", 1, 3),
        ]
    }

    #[test]
    fn test_outcome_from_scores() {
        assert_eq!(Outcome::from_scores(2, 1), Outcome::HomeWin);
        assert_eq!(Outcome::from_scores(1, 1), Outcome::Draw);
        assert_eq!(Outcome::from_scores(0, 4), Outcome::AwayWin);
        assert_eq!(Outcome::AwayWin.code(), -1);
    }

    #[test]
    fn test_outcome_counts() {
        let counts = outcome_counts(&fixtures());
        assert_eq!(
            counts,
            OutcomeCounts {
                home_wins: 1,
                draws: 1,
                away_wins: 1
            }
        );
    }

    #[test]
    fn test_teams_discovery_order() {
        assert_eq!(teams(&fixtures()), vec!["Reds", "Blues", "Greens"]);
    }

    #[test]
    fn test_encode_layout() {
        let encoded = encode(&fixtures()).unwrap();
        let names: Vec<&str> = encoded.column_names().collect();
        assert_eq!(
            names,
            vec![
                "home_team_Blues",
                "home_team_Greens",
                "home_team_Reds",
                "away_team_Blues",
                "away_team_Greens",
                "away_team_Reds",
                "result"
            ]
        );
        let first: Vec<i64> = encoded.rows()[0]
            .values()
            .iter()
            .map(|v| v.as_f64().unwrap() as i64)
            .collect();
        assert_eq!(first, vec![0, 0, 1, 1, 0, 0, 1]);
        assert_eq!(encoded.rows()[2].values()[6], Value::Integer(-1));
    }

    #[test]
    fn test_encode_fixture() {
        let encoded = encode(&fixtures()).unwrap();
        let columns = feature_columns(&encoded);
        assert_eq!(columns.len(), 6);
        let row = encode_fixture("Greens", "Blues", &columns).unwrap();
        assert_eq!(row, vec![0, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_encode_fixture_rejects_same_team() {
        let columns = feature_columns(&encode(&fixtures()).unwrap());
        assert!(matches!(
            encode_fixture("Reds", "Reds", &columns),
            Err(StatsError::InvalidValue(_))
        ));
        assert!(encode_fixture("", "Reds", &columns).is_err());
    }
}
