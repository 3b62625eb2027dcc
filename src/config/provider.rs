//! Provider Configuration
//!
//! Quote source endpoint, book depth and batch throttling settings.

use crate::error::ProviderError;
use crate::orderbook::rate_limiter::{DEFAULT_INTERVAL_MS, DEFAULT_QUEUE_TIMEOUT_SECS};
use crate::quotes::client::DEFAULT_BASE_URL;
use std::time::Duration;

/// Default number of price levels per side
pub const DEFAULT_DEPTH: usize = 10;

/// Largest accepted depth
pub const MAX_DEPTH: usize = 100;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Provider configuration
///
/// ## Environment Variables
///
/// - `ORDERFLOW_QUOTE_URL`: Quote API base URL (default: https://query1.finance.yahoo.com)
/// - `ORDERFLOW_TIMEOUT_SECS`: HTTP request timeout (default: 10)
/// - `ORDERFLOW_DEPTH`: Price levels per side (default: 10, valid 1-100)
/// - `ORDERFLOW_BATCH_INTERVAL_MS`: Minimum spacing between quote requests (default: 500)
/// - `ORDERFLOW_QUEUE_TIMEOUT_SECS`: Max wait for a rate-limit permit (default: 30)
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    /// Quote API base URL
    pub quote_base_url: String,

    /// HTTP request timeout
    pub request_timeout: Duration,

    /// Price levels per side
    pub depth: usize,

    /// Minimum spacing between quote requests (zero disables throttling)
    pub batch_interval: Duration,

    /// Max wait for a rate-limit permit
    pub queue_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            quote_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            depth: DEFAULT_DEPTH,
            batch_interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            queue_timeout: Duration::from_secs(DEFAULT_QUEUE_TIMEOUT_SECS),
        }
    }
}

impl ProviderConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Config` if a variable does not parse or the depth is out of range
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let quote_base_url = lookup("ORDERFLOW_QUOTE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.quote_base_url);

        let timeout_secs: u64 = parse_var(&lookup, "ORDERFLOW_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let depth: usize = parse_var(&lookup, "ORDERFLOW_DEPTH", DEFAULT_DEPTH)?;
        let interval_ms: u64 =
            parse_var(&lookup, "ORDERFLOW_BATCH_INTERVAL_MS", DEFAULT_INTERVAL_MS)?;
        let queue_timeout_secs: u64 = parse_var(
            &lookup,
            "ORDERFLOW_QUEUE_TIMEOUT_SECS",
            DEFAULT_QUEUE_TIMEOUT_SECS,
        )?;

        let config = Self {
            quote_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            depth,
            batch_interval: Duration::from_millis(interval_ms),
            queue_timeout: Duration::from_secs(queue_timeout_secs),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    ///
    /// - `depth`: must be between 1 and 100
    /// - `request_timeout`: must be non-zero
    pub fn validate(&self) -> Result<(), ProviderError> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ProviderError::Config(format!(
                "depth must be between 1 and {}, got {}",
                MAX_DEPTH, self.depth
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(ProviderError::Config(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ProviderError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| ProviderError::Config(format!("{} ({:?}): {}", key, raw, e))),
    }
}
