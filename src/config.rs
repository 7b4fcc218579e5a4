//! Application configuration loaded from environment variables.
//!
//! The proxy endpoint **must** be provided via environment variable:
//! - `RATEWATCH_PROXY_URL` — base URL of the same-origin dataset proxy
//!
//! Optional overrides:
//! - `RATEWATCH_REFRESH_SECS` — snapshot refresh interval (default 3600)
//! - `RATEWATCH_TIMEOUT_SECS` — per-request timeout (default 10)
//! - `RATEWATCH_HISTORY_DAYS` — sparkline history window (default 365)

use std::time::Duration;

/// Default snapshot refresh interval (hourly).
const DEFAULT_REFRESH_SECS: u64 = 3600;

/// Default per-request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default history window for the one-year sparkline trend.
const DEFAULT_HISTORY_DAYS: u64 = 365;

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub proxy: ProxyConfig,
    /// How often the full snapshot set is re-fetched.
    pub refresh_interval: Duration,
    /// Number of days of history requested for each sparkline.
    pub history_days: u64,
}

/// Proxy-specific configuration values.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`RatewatchError::Config`](crate::RatewatchError::Config) if
/// `RATEWATCH_PROXY_URL` is unset or empty, or if a numeric override
/// cannot be parsed.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url = non_empty_var("RATEWATCH_PROXY_URL").ok_or_else(|| {
        crate::RatewatchError::Config("RATEWATCH_PROXY_URL is not set".to_string())
    })?;

    let refresh_secs = parse_var("RATEWATCH_REFRESH_SECS", DEFAULT_REFRESH_SECS)?;
    let timeout_secs = parse_var("RATEWATCH_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
    let history_days = parse_var("RATEWATCH_HISTORY_DAYS", DEFAULT_HISTORY_DAYS)?;

    Ok(AppConfig {
        proxy: ProxyConfig {
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
        },
        refresh_interval: Duration::from_secs(refresh_secs),
        history_days,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Parses a numeric environment variable, falling back to `default` when unset.
fn parse_var(name: &str, default: u64) -> crate::Result<u64> {
    match non_empty_var(name) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| crate::RatewatchError::Config(format!("{name} is not a number: {raw}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    ///
    /// # Safety
    ///
    /// Tests using this helper must run with `--test-threads=1` or otherwise
    /// ensure no other threads read these env vars concurrently.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: config tests run single-threaded (see test runner config).
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values, same single-threaded context.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_with_proxy_url_only() {
        with_env(
            &[
                ("RATEWATCH_PROXY_URL", Some("http://localhost:3000/api/proxy")),
                ("RATEWATCH_REFRESH_SECS", None),
                ("RATEWATCH_TIMEOUT_SECS", None),
                ("RATEWATCH_HISTORY_DAYS", None),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.proxy.base_url, "http://localhost:3000/api/proxy");
                assert_eq!(config.refresh_interval, Duration::from_secs(3600));
                assert_eq!(config.proxy.request_timeout, Duration::from_secs(10));
                assert_eq!(config.history_days, 365);
            },
        );
    }

    #[test]
    fn rejects_missing_proxy_url() {
        with_env(&[("RATEWATCH_PROXY_URL", None)], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("RATEWATCH_PROXY_URL"));
        });
    }

    #[test]
    fn empty_proxy_url_treated_as_absent() {
        with_env(&[("RATEWATCH_PROXY_URL", Some(""))], || {
            assert!(fetch_config().is_err());
        });
    }

    #[test]
    fn overrides_from_env() {
        with_env(
            &[
                ("RATEWATCH_PROXY_URL", Some("https://rates.example.com/api")),
                ("RATEWATCH_REFRESH_SECS", Some("60")),
                ("RATEWATCH_TIMEOUT_SECS", Some("5")),
                ("RATEWATCH_HISTORY_DAYS", Some("90")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.refresh_interval, Duration::from_secs(60));
                assert_eq!(config.proxy.request_timeout, Duration::from_secs(5));
                assert_eq!(config.history_days, 90);
            },
        );
    }

    #[test]
    fn rejects_malformed_number() {
        with_env(
            &[
                ("RATEWATCH_PROXY_URL", Some("https://rates.example.com/api")),
                ("RATEWATCH_REFRESH_SECS", Some("hourly")),
            ],
            || {
                let err = fetch_config().unwrap_err();
                assert!(err.to_string().contains("RATEWATCH_REFRESH_SECS"));
            },
        );
    }
}
