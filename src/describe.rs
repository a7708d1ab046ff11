//! Per-column descriptive statistics for numeric columns.

use crate::error::{Result, StatsError};
use crate::model::{Column, ColumnType, Row, Table, Value};
use crate::schema::{column_position, require_numeric};
use crate::stats::{mean, quantile_sorted, sample_std};

/// Name of the label column in a summary table
pub const STATISTIC: &str = "statistic";

/// Row labels of a summary table, in order
pub const STATISTICS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Statistics of one numeric column. Everything except `count` is `None`
/// when the column has no values.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnSummary {
    pub fn from_values(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        Self {
            count: sorted.len(),
            mean: mean(&sorted),
            std: sample_std(&sorted),
            min: sorted.first().copied(),
            q25: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q75: quantile_sorted(&sorted, 0.75),
            max: sorted.last().copied(),
        }
    }

    /// Values in `STATISTICS` order
    fn cells(&self) -> [Value; 8] {
        [
            Value::Float(self.count as f64),
            self.mean.into(),
            self.std.into(),
            self.min.into(),
            self.q25.into(),
            self.median.into(),
            self.q75.into(),
            self.max.into(),
        ]
    }
}

/// Present values of a numeric column in table order (distribution plot input)
pub fn column_values(table: &Table, column: &str) -> Result<Vec<f64>> {
    require_numeric(table, column)?;
    let idx = column_position(table, column)?;
    Ok(table
        .rows()
        .iter()
        .filter_map(|r| r.values()[idx].as_f64())
        .collect())
}

/// Equal-width bins over `values` as (lower edge, count) pairs. The maximum
/// lands in the last bin; no values gives no bins.
pub fn histogram(values: &[f64], bins: usize) -> Result<Vec<(f64, usize)>> {
    if bins == 0 {
        return Err(StatsError::InvalidValue(
            "histogram needs at least one bin".to_string(),
        ));
    }
    let (Some(min), Some(max)) = (
        values.iter().copied().reduce(f64::min),
        values.iter().copied().reduce(f64::max),
    ) else {
        return Ok(Vec::new());
    };

    let width = ((max - min) / bins as f64).max(f64::EPSILON);
    let mut counts = vec![0usize; bins];
    for v in values {
        let bin = (((v - min) / width) as usize).min(bins - 1);
        counts[bin] += 1;
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (min + width * i as f64, count))
        .collect())
}

/// Summaries of every numeric column, keyed by column name
pub fn column_summaries(table: &Table) -> Vec<(String, ColumnSummary)> {
    table
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.kind.is_numeric())
        .map(|(idx, c)| {
            let values: Vec<f64> = table
                .rows()
                .iter()
                .filter_map(|r| r.values()[idx].as_f64())
                .collect();
            (c.name.clone(), ColumnSummary::from_values(&values))
        })
        .collect()
}

/// Describe table: a `statistic` label column followed by one column per
/// numeric input column. Text columns are left out; a table without numeric
/// columns gives an empty table.
pub fn summary(table: &Table) -> Result<Table> {
    let summaries = column_summaries(table);
    if summaries.is_empty() {
        return Ok(Table::default());
    }

    let mut columns = vec![Column::new(STATISTIC, ColumnType::Text)];
    columns.extend(
        summaries
            .iter()
            .map(|(name, _)| Column::new(name.as_str(), ColumnType::Float)),
    );

    let cells: Vec<[Value; 8]> = summaries.iter().map(|(_, s)| s.cells()).collect();
    let rows = STATISTICS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let mut values = vec![Value::from(*label)];
            values.extend(cells.iter().map(|c| c[i].clone()));
            Row::new(values)
        })
        .collect();

    Table::new(columns, rows)
}
