//! Typed CSV parsing with per-column type inference.
//!
//! The first classifiable (non-empty) value observed in a column decides
//! its [`ColumnType`] and [`ColumnScale`]; every later value only attempts
//! that same coercion. A cell that no longer matches its column's type is
//! kept as its raw string and logged, never reclassified mid-stream.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;
use tracing::warn;

use crate::error::DatasetError;

use super::types::{CellValue, ColumnScale, ColumnType, ParsedDataset, Row};

/// Numeric cell values: optional sign, optional decimal part (dot or
/// comma), optional exponent.
static NUMERIC_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d+([,.]\d+)?(e[+-]\d+)?$").expect("numeric pattern compiles")
});

/// Parses a CSV artifact into a typed dataset.
///
/// The heavy lifting runs on a blocking worker so large artifacts do not
/// stall the runtime. Any malformed record fails the whole parse; no
/// partial dataset is returned.
pub async fn parse(csv_text: String) -> Result<ParsedDataset, DatasetError> {
    tokio::task::spawn_blocking(move || parse_sync(&csv_text))
        .await
        .map_err(|_| DatasetError::TaskAborted)?
}

/// Synchronous core of [`parse`].
pub fn parse_sync(csv_text: &str) -> Result<ParsedDataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let mut classifier = ColumnClassifier::default();
    let mut rows: Vec<Row> = Vec::new();

    for record in reader.records() {
        let record = record?;
        let mut row = Row::with_capacity(headers.len());
        for (column, raw) in headers.iter().zip(record.iter()) {
            row.insert(column.clone(), classifier.coerce(column, raw));
        }
        rows.push(row);
    }

    let (mut types, mut scales) = classifier.into_maps();

    // Columns that never produced a classifiable value fall back to
    // CATEGORY so the one-entry-per-header invariant holds.
    if !rows.is_empty() {
        for column in &headers {
            types.entry(column.clone()).or_insert(ColumnType::Category);
            scales.entry(column.clone()).or_insert(ColumnScale::Linear);
        }
    }

    Ok(ParsedDataset {
        headers,
        rows,
        types,
        scales,
    })
}

/// Per-column classifier state, initialized on the first non-empty
/// observation and immutable thereafter.
#[derive(Debug, Default)]
struct ColumnClassifier {
    types: HashMap<String, ColumnType>,
    scales: HashMap<String, ColumnScale>,
}

impl ColumnClassifier {
    /// Coerces one cell, classifying the column if it has no type yet.
    fn coerce(&mut self, column: &str, raw: &str) -> CellValue {
        match self.types.get(column).copied() {
            Some(column_type) => self.coerce_established(column, column_type, raw),
            None => self.classify(column, raw),
        }
    }

    /// First classifiable value wins: number, then date-time, then
    /// category. Empty cells defer classification to a later row.
    fn classify(&mut self, column: &str, raw: &str) -> CellValue {
        if raw.is_empty() {
            return CellValue::Text(String::new());
        }

        if NUMERIC_VALUE.is_match(raw) {
            if let Some(number) = parse_number(raw) {
                self.record(column, ColumnType::Number);
                return CellValue::Number(number);
            }
        }

        if let Some(unix) = parse_timestamp(raw) {
            self.record(column, ColumnType::Time);
            return CellValue::Time(unix);
        }

        self.record(column, ColumnType::Category);
        CellValue::Text(raw.to_string())
    }

    /// Re-applies the column's established coercion. Mismatches keep the
    /// raw string; the column type never changes.
    fn coerce_established(&self, column: &str, column_type: ColumnType, raw: &str) -> CellValue {
        match column_type {
            ColumnType::Number => {
                if NUMERIC_VALUE.is_match(raw) {
                    if let Some(number) = parse_number(raw) {
                        return CellValue::Number(number);
                    }
                }
                if !raw.is_empty() {
                    warn!(column, value = raw, "cell does not match NUMBER column");
                }
                CellValue::Text(raw.to_string())
            }
            ColumnType::Time => match parse_timestamp(raw) {
                Some(unix) => CellValue::Time(unix),
                None => {
                    if !raw.is_empty() {
                        warn!(column, value = raw, "cell does not match TIME column");
                    }
                    CellValue::Text(raw.to_string())
                }
            },
            ColumnType::Category => CellValue::Text(raw.to_string()),
        }
    }

    fn record(&mut self, column: &str, column_type: ColumnType) {
        self.types.insert(column.to_string(), column_type);
        self.scales.insert(column.to_string(), column_type.scale());
    }

    fn into_maps(self) -> (HashMap<String, ColumnType>, HashMap<String, ColumnScale>) {
        (self.types, self.scales)
    }
}

/// Parses a value already matched by [`NUMERIC_VALUE`]. A decimal comma is
/// normalized to a dot first.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse::<f64>().ok()
}

/// Parses a strict `YYYY-MM-DDTHH:mm:ss` date-time with a mandatory
/// explicit offset (`Z` or `±hh:mm`) into unix seconds. Fractional
/// seconds are rejected.
pub(crate) fn parse_timestamp(raw: &str) -> Option<i64> {
    if raw.len() < 20 || raw.as_bytes().get(19) == Some(&b'.') {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|instant| instant.timestamp())
}
