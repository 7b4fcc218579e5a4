//! Monthly downsampling for sparkline markers.
//!
//! The sparkline draws the full daily history as its line; markers are
//! placed only on one representative point per calendar month, the
//! chronologically last observation of that month.

use chrono::Datelike;

use crate::models::{MonthlySeries, Observation, RateHistory};

/// Groups observations by `(year, month)` and keeps the last observation of
/// each group, emitting groups ascending by date.
///
/// The input history is already ascending and duplicate-free, so "last of
/// the month" is simply the final entry seen for each `(year, month)` key
/// and the output inherits the input's ordering. Empty input yields an
/// empty series.
pub fn downsample_monthly(history: &RateHistory) -> MonthlySeries {
    let mut monthly: Vec<Observation> = Vec::new();

    for obs in history.as_slice() {
        let key = (obs.date.year(), obs.date.month());
        match monthly.last_mut() {
            Some(last) if (last.date.year(), last.date.month()) == key => *last = *obs,
            _ => monthly.push(*obs),
        }
    }

    MonthlySeries::new(monthly)
}
