//! Shared models for the rate pipeline.
//!
//! Contains the domain types ([`Observation`], [`RateSnapshot`],
//! [`RateHistory`], [`MonthlySeries`]) and the wire types for the upstream
//! dataset responses relayed by the proxy.

pub mod dataset;
pub mod history;
pub mod observation;
pub mod snapshot;

pub use history::{MonthlySeries, RateHistory};
pub use observation::Observation;
pub use snapshot::RateSnapshot;
