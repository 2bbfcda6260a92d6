//! Route handlers and the application router.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::error::Error;
use crate::health;
use crate::method::Method;
use crate::request::Request;
use crate::response::Json;
use crate::router::Router;
use crate::swapi::{PeopleSortedByName, ProxyError, SwapiClient, parse_page, sort_by_name};

/// State shared by every request. Built once in `main`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub swapi: SwapiClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, Error> {
        let swapi = SwapiClient::new(config.swapi_url.clone(), config.upstream_timeout)?;
        Ok(Self { config, swapi })
    }
}

/// Builds the full router around `state`.
pub fn app(state: AppState) -> Router<AppState> {
    Router::with_state(state)
        .on(Method::Get, "/", root)
        .on(Method::Get, "/people", people)
        .on(Method::Get, "/healthz", health::liveness)
        .on(Method::Get, "/readyz", health::readiness)
}

#[derive(Serialize)]
pub struct Welcome {
    pub message: &'static str,
}

/// `GET /`
pub async fn root(_state: Arc<AppState>, _req: Request) -> Json<Welcome> {
    info!("root endpoint called");
    Json(Welcome { message: "Welcome to the SWAPI API!" })
}

/// `GET /people?page=N`
pub async fn people(
    state: Arc<AppState>,
    req: Request,
) -> Result<Json<PeopleSortedByName>, ProxyError> {
    info!("fetching people data from SWAPI");

    match fetch_sorted(&state.swapi, &req).await {
        Ok(envelope) => {
            info!(count = envelope.people_sorted_by_name.len(), "fetched and sorted people data");
            Ok(Json(envelope))
        }
        Err(e) => {
            e.log();
            Err(e)
        }
    }
}

async fn fetch_sorted(swapi: &SwapiClient, req: &Request) -> Result<PeopleSortedByName, ProxyError> {
    swapi.base_url()?;
    let page = parse_page(req.query("page").as_deref())?;
    let upstream = swapi.people(page).await?;
    Ok(PeopleSortedByName { people_sorted_by_name: sort_by_name(upstream.results)? })
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use httpmock::prelude::*;
    use serde_json::json;
    use tracing::subscriber::DefaultGuard;

    use super::*;
    use crate::request::request;
    use crate::{IntoResponse, Status};

    /// In-memory sink for the fmt subscriber.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn capture_logs() -> (Captured, DefaultGuard) {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        (logs, tracing::subscriber::set_default(subscriber))
    }

    fn line<'a>(logs: &'a str, message: &str) -> &'a str {
        logs.lines()
            .find(|l| l.contains(message))
            .unwrap_or_else(|| panic!("no log line containing {message:?} in:\n{logs}"))
    }

    fn state(swapi_url: Option<String>) -> Arc<AppState> {
        let config = Config::from_lookup(|key| match key {
            "SWAPI_URL" => swapi_url.clone(),
            _ => None,
        })
        .unwrap();
        Arc::new(AppState::new(config).unwrap())
    }

    #[tokio::test]
    async fn success_logs_receipt_and_count() {
        let upstream = MockServer::start_async().await;
        upstream
            .mock_async(|when, then| {
                when.method(GET).path("/people");
                then.status(200).json_body(json!({
                    "results": [{ "name": "Luke" }, { "name": "Leia" }]
                }));
            })
            .await;

        let (logs, _guard) = capture_logs();
        let res = people(state(Some(upstream.base_url())), request("/people"))
            .await
            .into_response();
        assert_eq!(res.status_code(), Status::Ok);

        let logs = logs.text();
        assert!(line(&logs, "fetching people data from SWAPI").contains("INFO"));
        let done = line(&logs, "fetched and sorted people data");
        assert!(done.contains("INFO"));
        assert!(done.contains("count=2"), "{done}");
    }

    #[tokio::test]
    async fn upstream_failure_logs_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let (logs, _guard) = capture_logs();
        let res = people(state(Some(format!("http://127.0.0.1:{port}"))), request("/people"))
            .await
            .into_response();
        assert_eq!(res.status_code(), Status::BadGateway);

        let logs = logs.text();
        assert!(line(&logs, "error fetching data from SWAPI").contains("ERROR"));
    }

    #[tokio::test]
    async fn invalid_page_logs_warning_only() {
        let (logs, _guard) = capture_logs();
        let res = people(state(Some("http://127.0.0.1:1".into())), request("/people?page=0"))
            .await
            .into_response();
        assert_eq!(res.status_code(), Status::BadRequest);

        let logs = logs.text();
        assert!(line(&logs, "rejecting request").contains("WARN"));
        assert!(!logs.contains("ERROR"), "{logs}");
    }

    #[tokio::test]
    async fn missing_url_logs_error() {
        let (logs, _guard) = capture_logs();
        let res = people(state(None), request("/people")).await.into_response();
        assert_eq!(res.status_code(), Status::InternalServerError);

        let logs = logs.text();
        assert!(line(&logs, "SWAPI_URL is not set").contains("ERROR"));
    }
}
