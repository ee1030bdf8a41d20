//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Calculator web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Artificial latency added to every stub estimate.
    pub estimate_delay: Duration,
    /// Upper bound on a single estimate.
    pub estimate_timeout: Duration,
    /// Refuse to save history for anonymous users.
    pub history_require_auth: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `CALCULATOR_ADDR` | Server bind address | `127.0.0.1:8790` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:calculator.db?mode=rwc` |
    /// | `ESTIMATE_DELAY_MS` | Stub estimator latency | `0` |
    /// | `ESTIMATE_TIMEOUT_SECS` | Estimate timeout | `10` |
    /// | `HISTORY_REQUIRE_AUTH` | Refuse anonymous history writes | `false` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup("CALCULATOR_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8790".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = lookup("SQLITE_PATH")
            .unwrap_or_else(|| "sqlite:calculator.db?mode=rwc".to_string());

        let estimate_delay = match lookup("ESTIMATE_DELAY_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber("ESTIMATE_DELAY_MS"))?,
            ),
            None => Duration::ZERO,
        };

        let estimate_timeout = match lookup("ESTIMATE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber("ESTIMATE_TIMEOUT_SECS"))?;
                if secs == 0 {
                    return Err(ConfigError::InvalidNumber("ESTIMATE_TIMEOUT_SECS"));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(10),
        };

        let history_require_auth = match lookup("HISTORY_REQUIRE_AUTH") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool("HISTORY_REQUIRE_AUTH"))?,
            None => false,
        };

        Ok(Self {
            addr,
            database_url,
            estimate_delay,
            estimate_timeout,
            history_require_auth,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid CALCULATOR_ADDR format")]
    InvalidAddr,

    #[error("{0} is not a valid number")]
    InvalidNumber(&'static str),

    #[error("{0} must be true or false")]
    InvalidBool(&'static str),
}
