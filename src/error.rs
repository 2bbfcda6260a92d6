//! Process-level error type.

use thiserror::Error;

use crate::config::ConfigError;

/// The error type returned by swapi-proxy's fallible startup and serving
/// operations.
///
/// Request-level failures (bad page, upstream down, etc.) never show up here.
/// They are HTTP [`Response`](crate::Response) values built from
/// [`ProxyError`](crate::swapi::ProxyError). This type covers what can stop
/// the process: reading the configuration, building the upstream client,
/// binding the listener.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("http client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
