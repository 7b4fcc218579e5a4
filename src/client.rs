//! Rate fetching and normalization against the dataset proxy.
//!
//! [`RatesClient`] turns heterogeneous upstream rows (simple two-column
//! series and multi-tenor yield-curve tables) into uniform observations.
//! Every failure mode — network, non-success status, malformed body, zero
//! rows, missing-value sentinel, unknown key — is absorbed here and
//! surfaces as "no snapshot" / "empty history"; callers never need to
//! distinguish why data is missing, and one series failing never prevents
//! the others from rendering.

use chrono::NaiveDate;
use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::Result;
use crate::config::ProxyConfig;
use crate::error::RatewatchError;
use crate::models::dataset::{DatasetResponse, row_observation};
use crate::models::{RateHistory, RateSnapshot};
use crate::registry::{RateSeriesDescriptor, SeriesRegistry};

/// Source of rate snapshots and histories.
///
/// The production implementation is [`RatesClient`]; the consuming layer is
/// generic over this trait so tests can substitute an in-memory source.
pub trait RateSource {
    /// Latest observation for a series, or `None` when unavailable.
    fn fetch_latest(&self, key: &str) -> impl Future<Output = Option<RateSnapshot>>;

    /// Observations in `[start, end]`, ascending; empty on any failure.
    fn fetch_history(
        &self,
        key: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = RateHistory>;

    /// Latest observations for every registered series, concurrently;
    /// only the successful results are returned.
    fn fetch_all_latest(&self) -> impl Future<Output = Vec<RateSnapshot>>;
}

/// HTTP client for the same-origin dataset proxy.
///
/// The proxy injects the provider credential server-side; this client only
/// ever sends the dataset identifier and pass-through query parameters.
pub struct RatesClient {
    http: reqwest::Client,
    base_url: String,
    registry: SeriesRegistry,
}

impl RatesClient {
    /// Builds a client with the configured request timeout applied to every
    /// request. Timeout expiry is treated as a normal fetch failure.
    pub fn new(config: &ProxyConfig, registry: SeriesRegistry) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            registry,
        })
    }

    pub fn registry(&self) -> &SeriesRegistry {
        &self.registry
    }

    /// Issues one dataset query through the proxy.
    async fn query(&self, dataset: &str, params: &[(&str, String)]) -> Result<DatasetResponse> {
        debug!(dataset, ?params, "querying dataset proxy");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("dataset", dataset)])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RatewatchError::Status(status));
        }

        Ok(response.json().await?)
    }

    async fn try_fetch_latest(
        &self,
        descriptor: &RateSeriesDescriptor,
    ) -> Result<Option<RateSnapshot>> {
        let body = self
            .query(
                &descriptor.dataset,
                &[("limit", "1".to_string()), ("order", "desc".to_string())],
            )
            .await?;

        let snapshot = body
            .dataset
            .data
            .first()
            .and_then(|row| row_observation(row, descriptor.column))
            .map(|obs| RateSnapshot {
                series_key: descriptor.key.clone(),
                title: descriptor.title.clone(),
                date: obs.date,
                value: obs.value,
            });

        Ok(snapshot)
    }

    async fn try_fetch_history(
        &self,
        descriptor: &RateSeriesDescriptor,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RateHistory> {
        let body = self
            .query(
                &descriptor.dataset,
                &[
                    ("start_date", start.to_string()),
                    ("end_date", end.to_string()),
                    ("order", "asc".to_string()),
                ],
            )
            .await?;

        let observations = body
            .dataset
            .data
            .iter()
            .filter_map(|row| row_observation(row, descriptor.column))
            .collect();

        Ok(RateHistory::from_observations(observations))
    }
}

impl RateSource for RatesClient {
    async fn fetch_latest(&self, key: &str) -> Option<RateSnapshot> {
        let Some(descriptor) = self.registry.get(key) else {
            warn!(series = key, "latest fetch for unregistered series");
            return None;
        };

        match self.try_fetch_latest(descriptor).await {
            Ok(Some(snapshot)) => Some(snapshot),
            Ok(None) => {
                debug!(series = key, "no current observation for series");
                None
            }
            Err(e) => {
                warn!(series = key, error = %e, "latest fetch failed");
                None
            }
        }
    }

    async fn fetch_history(&self, key: &str, start: NaiveDate, end: NaiveDate) -> RateHistory {
        let Some(descriptor) = self.registry.get(key) else {
            warn!(series = key, "history fetch for unregistered series");
            return RateHistory::default();
        };

        match self.try_fetch_history(descriptor, start, end).await {
            Ok(history) => history,
            Err(e) => {
                warn!(series = key, error = %e, "history fetch failed");
                RateHistory::default()
            }
        }
    }

    async fn fetch_all_latest(&self) -> Vec<RateSnapshot> {
        let fetches = self.registry.iter().map(|d| self.fetch_latest(&d.key));

        // join_all preserves registry order and lets one series fail
        // without cancelling its siblings.
        join_all(fetches).await.into_iter().flatten().collect()
    }
}
