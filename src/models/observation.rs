use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated rate reading, in percent.
///
/// An observation only exists for dates where the upstream actually reported
/// a value; missing-value sentinel rows are dropped during normalization and
/// never become zero-valued observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}
