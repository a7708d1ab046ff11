use std::cmp::Ordering;
use std::fmt;

/// Declared logical type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    Float,
}

impl ColumnType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Text => "text",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single cell. `Missing` is never coerced to zero or an empty string.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Missing,
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Value {
    /// Tokens read as a missing cell (compared after trimming)
    pub const MISSING_TOKENS: [&'static str; 8] =
        ["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

    pub fn is_missing(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Numeric view of the cell; text and missing cells have none
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) if !f.is_nan() => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing_token(raw: &str) -> bool {
        Self::MISSING_TOKENS.contains(&raw.trim())
    }

    /// Convert a raw field into a cell of the given type.
    /// Fields that don't fit the type become `Missing`.
    pub fn parse(raw: &str, kind: ColumnType) -> Value {
        if Self::is_missing_token(raw) {
            return Value::Missing;
        }
        let trimmed = raw.trim();
        match kind {
            ColumnType::Text => Value::Text(raw.to_string()),
            ColumnType::Integer => trimmed
                .parse::<i64>()
                .map(Value::Integer)
                .unwrap_or(Value::Missing),
            ColumnType::Float => trimmed
                .parse::<f64>()
                .map(Value::from)
                .unwrap_or(Value::Missing),
        }
    }

    /// Ordering on the numeric view. Missing and non-numeric cells sort after
    /// every number in both directions.
    pub fn cmp_numeric(&self, other: &Value, descending: bool) -> Ordering {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => {
                if descending {
                    b.total_cmp(&a)
                } else {
                    a.total_cmp(&b)
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        if f.is_nan() {
            Value::Missing
        } else {
            Value::Float(f)
        }
    }
}

impl From<Option<f64>> for Value {
    fn from(f: Option<f64>) -> Self {
        f.map(Value::from).unwrap_or(Value::Missing)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Text(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) if x.is_nan() => Ok(()),
            // Debug keeps the decimal point on whole numbers (75.0)
            Value::Float(x) => write!(f, "{:?}", x),
        }
    }
}
