//! Ordered rate series and their monthly downsample.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Observation, RateSnapshot};

/// An ascending, duplicate-free sequence of observations for one series.
///
/// The ordering and uniqueness invariants are enforced at construction, so
/// downstream consumers (the resampler, the geometry mapper) can rely on
/// them without re-checking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateHistory(Vec<Observation>);

impl RateHistory {
    /// Builds a history from raw observations, sorting ascending by date and
    /// collapsing duplicate dates (the later input wins).
    pub fn from_observations(mut observations: Vec<Observation>) -> Self {
        observations.sort_by_key(|o| o.date);
        observations.dedup_by(|next, prev| {
            if next.date == prev.date {
                // dedup_by removes `next`; keep its value in the survivor.
                prev.value = next.value;
                true
            } else {
                false
            }
        });
        Self(observations)
    }

    pub fn as_slice(&self) -> &[Observation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.0.last()
    }

    /// Position of an exact date within the history.
    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        self.0.binary_search_by_key(&date, |o| o.date).ok()
    }

    /// Forces the last entry's value to equal the live snapshot's value.
    ///
    /// The history endpoint can lag the latest endpoint near the boundary;
    /// this post-processing step reconciles the two so the sparkline's final
    /// point always matches the displayed rate. No-op on an empty history.
    pub fn reconcile_latest(&mut self, snapshot: &RateSnapshot) {
        if let Some(last) = self.0.last_mut() {
            last.value = snapshot.value;
        }
    }
}

/// One observation per calendar month, the chronologically last of each
/// month, ascending. Produced by the resampler and used only for marker
/// placement on the sparkline, never for the line itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries(Vec<Observation>);

impl MonthlySeries {
    pub(crate) fn new(observations: Vec<Observation>) -> Self {
        Self(observations)
    }

    pub fn as_slice(&self) -> &[Observation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
