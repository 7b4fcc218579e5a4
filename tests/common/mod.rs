//! Shared test helpers.

use chrono::NaiveDate;

use ratewatch::models::{Observation, RateSnapshot};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn obs(y: i32, m: u32, d: u32, value: f64) -> Observation {
    Observation::new(date(y, m, d), value)
}

pub fn snapshot(key: &str, title: &str, y: i32, m: u32, d: u32, value: f64) -> RateSnapshot {
    RateSnapshot {
        series_key: key.to_string(),
        title: title.to_string(),
        date: date(y, m, d),
        value,
    }
}
