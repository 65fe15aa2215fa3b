//! Typed dataset model produced by the CSV parser.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Semantic kind of a CSV column, inferred once from its first classifiable
/// value and held fixed for the rest of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnType {
    /// Numeric values, plotted on a linear scale.
    Number,
    /// ISO-8601 date-times, stored as unix seconds.
    Time,
    /// Anything else; kept as the original string.
    Category,
}

impl ColumnType {
    /// Returns the axis scale paired with this column type.
    pub fn scale(&self) -> ColumnScale {
        match self {
            ColumnType::Time => ColumnScale::Time,
            ColumnType::Number | ColumnType::Category => ColumnScale::Linear,
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Number => write!(f, "NUMBER"),
            ColumnType::Time => write!(f, "TIME"),
            ColumnType::Category => write!(f, "CATEGORY"),
        }
    }
}

/// Axis rendering hint assigned jointly with [`ColumnType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnScale {
    /// Plain linear axis.
    Linear,
    /// Time axis.
    Time,
}

impl std::fmt::Display for ColumnScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnScale::Linear => write!(f, "LINEAR"),
            ColumnScale::Time => write!(f, "TIME"),
        }
    }
}

/// A single coerced cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A coerced numeric value.
    Number(f64),
    /// A unix-seconds timestamp.
    Time(i64),
    /// The original string, kept verbatim.
    Text(String),
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Time(t) => write!(f, "{}", t),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One CSV data row: column name to coerced value.
///
/// Column order is carried once on [`ParsedDataset::headers`].
pub type Row = HashMap<String, CellValue>;

/// The structured result of parsing a CSV artifact.
///
/// Invariant: every row has exactly the header's column set, and `types`
/// and `scales` carry one entry per header column for the dataset's
/// lifetime (empty only when the artifact had no data rows).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedDataset {
    /// Column names in CSV header order.
    pub headers: Vec<String>,
    /// Data rows in CSV row order.
    pub rows: Vec<Row>,
    /// Inferred column types.
    pub types: HashMap<String, ColumnType>,
    /// Axis scales paired with the types.
    pub scales: HashMap<String, ColumnScale>,
}

impl ParsedDataset {
    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the inferred type for a column, if any.
    pub fn column_type(&self, column: &str) -> Option<ColumnType> {
        self.types.get(column).copied()
    }

    /// Returns true if a column holds unix timestamps.
    pub fn is_time_column(&self, column: &str) -> bool {
        self.column_type(column) == Some(ColumnType::Time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_scale_pairing() {
        assert_eq!(ColumnType::Number.scale(), ColumnScale::Linear);
        assert_eq!(ColumnType::Time.scale(), ColumnScale::Time);
        assert_eq!(ColumnType::Category.scale(), ColumnScale::Linear);
    }

    #[test]
    fn test_column_type_display() {
        assert_eq!(ColumnType::Number.to_string(), "NUMBER");
        assert_eq!(ColumnType::Category.to_string(), "CATEGORY");
        assert_eq!(ColumnScale::Time.to_string(), "TIME");
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Number(3.5).to_string(), "3.5");
        assert_eq!(CellValue::Number(1700000000.0).to_string(), "1700000000");
        assert_eq!(CellValue::Time(1700000000).to_string(), "1700000000");
        assert_eq!(CellValue::Text("red".to_string()).to_string(), "red");
    }

    #[test]
    fn test_cell_value_serializes_untagged() {
        let json = serde_json::to_string(&CellValue::Number(2.5)).expect("serializes");
        assert_eq!(json, "2.5");
        let json = serde_json::to_string(&CellValue::Text("a".into())).expect("serializes");
        assert_eq!(json, "\"a\"");
    }
}
