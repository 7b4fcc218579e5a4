use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The latest observation for one registered series, enriched with its
/// display title.
///
/// Snapshots are query-scoped: the whole set is replaced on every refresh
/// and individual snapshots are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    pub series_key: String,
    pub title: String,
    pub date: NaiveDate,
    pub value: f64,
}
