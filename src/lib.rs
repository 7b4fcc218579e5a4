//! Benchmark rate watcher library.
//!
//! Fetches current benchmark interest rates (Prime, Treasury yields, SOFR)
//! through a same-origin dataset proxy, normalizes the heterogeneous
//! upstream rows into uniform time series, and produces render-ready
//! monthly-downsampled sparkline geometry for a one-year trend.

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod geometry;
pub mod models;
pub mod registry;
pub mod resample;

pub use error::{RatewatchError, Result};
