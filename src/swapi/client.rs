use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use super::{PeoplePage, ProxyError};

/// Client for the upstream Star Wars API.
///
/// Holds a pooled [`reqwest::Client`]; clone it freely. The base URL is
/// optional so a missing `SWAPI_URL` surfaces per request instead of at
/// startup.
#[derive(Clone, Debug)]
pub struct SwapiClient {
    http: Client,
    base_url: Option<String>,
}

impl SwapiClient {
    /// `timeout` bounds each upstream request end to end. `None` waits
    /// indefinitely.
    pub fn new(base_url: Option<String>, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.map(|url| url.trim_end_matches('/').to_owned()),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// Base URL of the upstream. Used in checks before any request is sent.
    pub fn base_url(&self) -> Result<&str, ProxyError> {
        self.base_url.as_deref().ok_or(ProxyError::MissingUpstreamUrl)
    }

    /// Fetches one page of people.
    ///
    /// A transport failure or non-2xx answer is a gateway error. A body that
    /// arrives intact but is not a people page is a malformed-payload error.
    pub async fn people(&self, page: u64) -> Result<PeoplePage, ProxyError> {
        let url = format!("{}/people", self.base_url()?);
        debug!(%url, page, "requesting people from SWAPI");

        let response = self.http.get(&url).query(&[("page", page)]).send().await?;

        let status = response.status();
        debug!(%status, "SWAPI responded");
        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let client = SwapiClient::new(Some("https://swapi.dev/api/".into()), None).unwrap();
        assert_eq!(client.base_url().unwrap(), "https://swapi.dev/api");
    }

    #[tokio::test]
    async fn unconfigured_client_fails_before_sending() {
        let client = SwapiClient::new(None, None).unwrap();
        assert!(!client.is_configured());
        assert!(matches!(client.people(1).await, Err(ProxyError::MissingUpstreamUrl)));
    }
}
