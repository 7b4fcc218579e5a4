//! Central application state for the rate dashboard.
//!
//! Owns the current snapshot set and the per-series history lifecycle. All
//! state lives in plain per-series slots keyed by series key; each slot is
//! written by exactly one in-flight fetch at a time, so no locking is
//! needed under the single-threaded cooperative model.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{Days, NaiveDate, Utc};
use futures_util::future::join_all;
use tracing::{debug, info};

use crate::client::RateSource;
use crate::geometry::{SparklineGeometry, map_to_canvas};
use crate::models::{MonthlySeries, RateHistory, RateSnapshot};
use crate::resample::downsample_monthly;

/// Lifecycle of one series' history fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryState {
    /// No fetch attempted yet.
    NotStarted,
    /// A fetch is in flight; no new fetch is started for this series.
    Pending,
    /// History arrived, reconciled against the live snapshot and
    /// downsampled for marker placement.
    Ready {
        history: RateHistory,
        monthly: MonthlySeries,
    },
    /// The fetch failed or returned no rows; retried on the next refresh.
    Failed,
}

/// Snapshot set plus per-series sparkline state.
pub struct Dashboard<S> {
    source: S,
    history_days: u64,
    snapshots: Vec<RateSnapshot>,
    histories: HashMap<String, HistoryState>,
}

impl<S: RateSource> Dashboard<S> {
    pub fn new(source: S, history_days: u64) -> Self {
        Self {
            source,
            history_days,
            snapshots: Vec::new(),
            histories: HashMap::new(),
        }
    }

    /// Current snapshots, in registry order of the successful fetches.
    /// Series with no snapshot are simply absent.
    pub fn snapshots(&self) -> &[RateSnapshot] {
        &self.snapshots
    }

    /// History lifecycle for a series.
    pub fn history_state(&self, key: &str) -> &HistoryState {
        static NOT_STARTED: HistoryState = HistoryState::NotStarted;
        self.histories.get(key).unwrap_or(&NOT_STARTED)
    }

    /// Render-ready sparkline geometry for a series, or `None` while its
    /// history is not ready (the row shows a loading indicator instead).
    pub fn sparkline(&self, key: &str, width: f64, height: f64) -> Option<SparklineGeometry> {
        match self.histories.get(key)? {
            HistoryState::Ready { history, monthly } => {
                Some(map_to_canvas(history, monthly, width, height))
            }
            _ => None,
        }
    }

    /// One refresh cycle: replace the snapshot set wholesale, fan out
    /// history fetches for series that need one, and reconcile every ready
    /// history against its fresh snapshot.
    ///
    /// Histories are only fetched for series that produced a snapshot this
    /// cycle, over a window of `history_days` ending at `today`. A slot in
    /// `Pending` is left alone; `Failed` slots are retried here, which makes
    /// the scheduled refresh double as the retry policy.
    pub async fn refresh(&mut self, today: NaiveDate) {
        self.snapshots = self.source.fetch_all_latest().await;

        let start = today
            .checked_sub_days(Days::new(self.history_days))
            .unwrap_or(NaiveDate::MIN);

        let mut wanted: Vec<String> = Vec::new();
        for snapshot in &self.snapshots {
            let state = self
                .histories
                .entry(snapshot.series_key.clone())
                .or_insert(HistoryState::NotStarted);
            if matches!(state, HistoryState::NotStarted | HistoryState::Failed) {
                *state = HistoryState::Pending;
                wanted.push(snapshot.series_key.clone());
            }
        }

        let fetches = wanted
            .iter()
            .map(|key| self.source.fetch_history(key, start, today));
        let results = join_all(fetches).await;

        for (key, history) in wanted.into_iter().zip(results) {
            let state = if history.is_empty() {
                debug!(series = key, "history fetch produced no rows");
                HistoryState::Failed
            } else {
                let monthly = downsample_monthly(&history);
                HistoryState::Ready { history, monthly }
            };
            self.histories.insert(key, state);
        }

        for snapshot in &self.snapshots {
            if let Some(HistoryState::Ready { history, monthly }) =
                self.histories.get_mut(&snapshot.series_key)
            {
                history.reconcile_latest(snapshot);
                *monthly = downsample_monthly(history);
            }
        }
    }

    /// Runs the periodic refresh loop; the first cycle fires immediately.
    /// This is the only recurring scheduled operation in the system.
    pub async fn run(&mut self, refresh_interval: Duration) {
        let mut ticker = tokio::time::interval(refresh_interval);
        loop {
            ticker.tick().await;
            let today = Utc::now().date_naive();
            self.refresh(today).await;
            info!(rows = self.snapshots.len(), "snapshot set refreshed");
        }
    }
}
