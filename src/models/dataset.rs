//! Wire types for the upstream dataset responses relayed by the proxy.
//!
//! The provider answers every dataset query with rows shaped as JSON arrays:
//! element 0 is the observation date, subsequent elements are numeric value
//! columns. A column may carry a missing-value sentinel (`null`, `"."`, or
//! an empty string) but is never absent as a gap in the array.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::models::Observation;

/// Top-level proxy response envelope.
#[derive(Debug, Deserialize)]
pub struct DatasetResponse {
    pub dataset: Dataset,
}

/// The dataset payload; unknown metadata fields are ignored.
#[derive(Debug, Deserialize)]
pub struct Dataset {
    pub data: Vec<Row>,
}

/// One raw data row: `[date, col1, col2, ...]`.
pub type Row = Vec<Value>;

/// Parses one value cell, treating the missing-value sentinel as absent.
///
/// Accepts JSON numbers and numeric strings (some datasets quote their
/// values). `null`, `"."`, empty strings, and non-finite numbers all read
/// as missing.
pub fn parse_cell(cell: &Value) -> Option<f64> {
    let v = match cell {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed == "." || trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    if v.is_finite() { Some(v) } else { None }
}

/// Selects the configured value column from a row.
///
/// Row width is validated first: a row too short for the configured column
/// reads as missing rather than panicking, so an upstream schema change
/// degrades to "no data" instead of taking the process down.
pub fn select_value(row: &[Value], column: usize) -> Option<f64> {
    if column == 0 || row.len() <= column {
        return None;
    }
    parse_cell(&row[column])
}

/// Parses the date in element 0 of a row (`YYYY-MM-DD`).
pub fn row_date(row: &[Value]) -> Option<NaiveDate> {
    let raw = row.first()?.as_str()?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Normalizes one row into an [`Observation`], or `None` if the date is
/// unparseable or the selected value is missing.
pub fn row_observation(row: &[Value], column: usize) -> Option<Observation> {
    let date = row_date(row)?;
    let value = select_value(row, column)?;
    Some(Observation::new(date, value))
}
