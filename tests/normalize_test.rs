//! Normalization tests over captured proxy response fixtures.

use chrono::NaiveDate;

use ratewatch::models::RateHistory;
use ratewatch::models::dataset::{DatasetResponse, row_observation};

const PRIME_LATEST_JSON: &str = include_str!("fixtures/prime_latest.json");
const PRIME_HISTORY_JSON: &str = include_str!("fixtures/prime_history.json");
const YIELD_LATEST_JSON: &str = include_str!("fixtures/yield_latest.json");
const EMPTY_JSON: &str = include_str!("fixtures/empty.json");
const SOFR_MISSING_JSON: &str = include_str!("fixtures/sofr_latest_missing.json");

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn simple_series_latest_row_normalizes() {
    let response: DatasetResponse =
        serde_json::from_str(PRIME_LATEST_JSON).expect("Failed to deserialize prime response");

    let row = response.dataset.data.first().expect("expected one row");
    let obs = row_observation(row, 1).expect("expected a value");
    assert_eq!(obs.date, date(2024, 6, 28));
    assert_eq!(obs.value, 8.5);
}

#[test]
fn sentinel_rows_are_dropped_from_history() {
    let response: DatasetResponse =
        serde_json::from_str(PRIME_HISTORY_JSON).expect("Failed to deserialize history response");

    let history = RateHistory::from_observations(
        response
            .dataset
            .data
            .iter()
            .filter_map(|row| row_observation(row, 1))
            .collect(),
    );

    assert_eq!(history.len(), 2);
    assert_eq!(history.as_slice()[0].date, date(2024, 1, 1));
    assert_eq!(history.as_slice()[0].value, 4.5);
    assert_eq!(history.as_slice()[1].date, date(2024, 1, 3));
    assert_eq!(history.as_slice()[1].value, 4.6);
}

#[test]
fn yield_curve_row_selects_configured_tenor() {
    let response: DatasetResponse =
        serde_json::from_str(YIELD_LATEST_JSON).expect("Failed to deserialize yield response");

    let row = response.dataset.data.first().expect("expected one row");

    let six_month = row_observation(row, 4).expect("expected a value in column 4");
    assert_eq!(six_month.value, 5.3);

    let two_year = row_observation(row, 6).expect("expected a value in column 6");
    assert_eq!(two_year.value, 5.5);

    // Column past the row's width reads as missing, not a panic.
    assert!(row_observation(row, 10).is_none());
}

#[test]
fn empty_dataset_yields_no_observations() {
    let response: DatasetResponse =
        serde_json::from_str(EMPTY_JSON).expect("Failed to deserialize empty response");
    assert!(response.dataset.data.is_empty());
}

#[test]
fn null_sentinel_latest_reads_as_absent() {
    let response: DatasetResponse =
        serde_json::from_str(SOFR_MISSING_JSON).expect("Failed to deserialize sofr response");

    let row = response.dataset.data.first().expect("expected one row");
    assert!(row_observation(row, 1).is_none());
}
