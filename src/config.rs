//! Startup configuration.
//!
//! Read once from the environment in `main` and then passed around by value.
//! Nothing reads `std::env` after this.
//!
//! | Variable | Default |
//! |---|---|
//! | `SWAPI_URL` | unset |
//! | `BIND_ADDR` | `0.0.0.0:8000` |
//! | `SWAPI_TIMEOUT_SECS` | unset (no timeout) |
//! | `LOG_FORMAT` | `compact` |

use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BIND_ADDR `{0}` is not a valid host:port address")]
    BindAddr(String),

    #[error("SWAPI_TIMEOUT_SECS `{0}` must be a positive number of seconds")]
    Timeout(String),

    #[error("LOG_FORMAT `{0}` must be `compact` or `json`")]
    LogFormat(String),
}

/// Output format of the tracing subscriber.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::LogFormat(s.to_owned())),
        }
    }
}

/// Loads `path` into the process environment without overriding variables
/// that are already set.
///
/// Returns `Ok(false)` when the file does not exist. Any other failure, a
/// syntax error in the file included, is returned.
pub fn load_env_file(path: &Path) -> Result<bool, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Upstream base URL. `None` makes `/people` answer `500` without
    /// touching the network; it is not a startup error.
    pub swapi_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub upstream_timeout: Option<Duration>,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads the process environment. Call [`load_env_file`] first if a
    /// `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key → value source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let bind_addr: SocketAddr = match get("BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::BindAddr(raw))?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::BindAddr(DEFAULT_BIND_ADDR.to_owned()))?,
        };

        let upstream_timeout = match get("SWAPI_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => return Err(ConfigError::Timeout(raw)),
            },
            None => None,
        };

        let log_format = match get("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            swapi_url: get("SWAPI_URL"),
            bind_addr,
            upstream_timeout,
            log_format,
        })
    }
}
