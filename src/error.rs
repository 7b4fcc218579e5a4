//! Crate-level error types.
//!
//! [`RatewatchError`] unifies every error source (configuration, HTTP,
//! JSON, series lookup) behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator for easy
//! propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RatewatchError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum RatewatchError {
    /// A configuration value is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// An HTTP request to the rate proxy failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The proxy answered with a non-success status.
    #[error("proxy returned status {0}")]
    Status(reqwest::StatusCode),

    /// A series key is not present in the registry.
    #[error("unknown series: {0}")]
    UnknownSeries(String),
}
