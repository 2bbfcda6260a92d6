use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// Why a `/people` request failed.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("SWAPI_URL is not set")]
    MissingUpstreamUrl,

    #[error("invalid page `{0}`: expected an integer >= 1")]
    InvalidPage(String),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("upstream answered {0}")]
    UpstreamStatus(http::StatusCode),

    #[error("malformed upstream payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("person at index {index} has no string `name`")]
    MissingName { index: usize },
}

#[derive(Serialize)]
struct Detail<'a> {
    detail: &'a str,
}

impl ProxyError {
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidPage(_) => Status::BadRequest,
            Self::Upstream(_) | Self::UpstreamStatus(_) => Status::BadGateway,
            Self::MissingUpstreamUrl | Self::Malformed(_) | Self::MissingName { .. } => {
                Status::InternalServerError
            }
        }
    }

    /// Client-facing message. Upstream and parsing details stay in the logs.
    pub fn detail(&self) -> String {
        match self {
            Self::MissingUpstreamUrl => "Internal server error: SWAPI_URL is not set".to_owned(),
            Self::InvalidPage(raw) => format!("Invalid page `{raw}`: expected an integer >= 1"),
            Self::Upstream(_) | Self::UpstreamStatus(_) => {
                "Bad Gateway: Error fetching data from SWAPI".to_owned()
            }
            Self::Malformed(_) | Self::MissingName { .. } => "Internal Server Error".to_owned(),
        }
    }

    /// Logs at `warn` for client mistakes, `error` for everything else.
    pub fn log(&self) {
        match self {
            Self::InvalidPage(_) => warn!("rejecting request: {self}"),
            Self::MissingUpstreamUrl => error!("{self}"),
            Self::Upstream(_) | Self::UpstreamStatus(_) => {
                error!("error fetching data from SWAPI: {self}")
            }
            Self::Malformed(_) | Self::MissingName { .. } => error!("unexpected error: {self}"),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let detail = self.detail();
        match serde_json::to_vec(&Detail { detail: &detail }) {
            Ok(body) => Response::builder().status(self.status()).json(body),
            Err(_) => Response::status(self.status()),
        }
    }
}
