use thiserror::Error;

/// One or more columns an operation needs are absent from the table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing column(s): {}", .missing.join(", "))]
pub struct MissingColumnError {
    pub missing: Vec<String>,
}

#[derive(Error, Debug)]
pub enum StatsError {
    #[error(transparent)]
    MissingColumn(#[from] MissingColumnError),

    #[error("Invalid table: {0}")]
    InvalidTable(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

impl StatsError {
    /// Names of the absent columns when this is a schema failure
    pub fn missing_columns(&self) -> Option<&[String]> {
        match self {
            StatsError::MissingColumn(e) => Some(&e.missing),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let err = StatsError::from(MissingColumnError {
            missing: vec!["Club".to_string(), "Overall".to_string()],
        });
        assert_eq!(err.to_string(), "Missing column(s): Club, Overall");
        assert_eq!(
            err.missing_columns(),
            Some(&["Club".to_string(), "Overall".to_string()][..])
        );
    }
}
