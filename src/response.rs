//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Handlers build a [`Response`] (or anything that converts into one) and
//! return it. The server turns it into a hyper response at the edge.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http_body_util::Full;
use serde::Serialize;
use tracing::error;

use crate::status::Status;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

/// An outgoing HTTP response.
///
/// ```rust
/// use swapi_proxy::{Response, Status};
///
/// Response::json(br#"{"id":1}"#.to_vec());
/// Response::text("ok");
/// Response::status(Status::NotFound);
///
/// Response::builder()
///     .status(Status::BadGateway)
///     .json(br#"{"detail":"upstream down"}"#.to_vec());
/// ```
#[derive(Debug)]
pub struct Response {
    pub(crate) body: Vec<u8>,
    pub(crate) content_type: Option<&'static str>,
    pub(crate) status: Status,
}

impl Response {
    /// `200 OK` with `application/json`.
    pub fn json(body: Vec<u8>) -> Self {
        Self::builder().json(body)
    }

    /// `200 OK` with `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::builder().text(body)
    }

    /// Response with no body.
    pub fn status(code: Status) -> Self {
        Self { body: Vec::new(), content_type: None, status: code }
    }

    /// Builder for responses with a body and a non-200 status.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { status: Status::Ok }
    }

    pub fn status_code(&self) -> Status {
        self.status
    }

    /// Converts into the hyper response written to the wire.
    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(Bytes::from(self.body)));
        *res.status_mut() = self.status.into();
        if let Some(content_type) = self.content_type {
            res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        res
    }
}

/// Fluent builder for [`Response`]. Defaults to `Status::Ok` (200).
pub struct ResponseBuilder {
    status: Status,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code;
        self
    }

    /// Terminate with a JSON body (`application/json`).
    pub fn json(self, body: Vec<u8>) -> Response {
        self.finish(JSON, body)
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(self, body: impl Into<String>) -> Response {
        self.finish(TEXT, body.into().into_bytes())
    }

    fn finish(self, content_type: &'static str, body: Vec<u8>) -> Response {
        Response { body, content_type: Some(content_type), status: self.status }
    }
}

/// Serialises `T` with serde_json into a `200 OK` JSON response.
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => Response::json(bytes),
            Err(e) => {
                error!("failed to serialise response body: {e}");
                Response::status(Status::InternalServerError)
            }
        }
    }
}

/// Conversion into an HTTP [`Response`].
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

/// Lets handlers use `?` and return `Result<Json<_>, SomeError>`.
impl<T: IntoResponse, E: IntoResponse> IntoResponse for Result<T, E> {
    fn into_response(self) -> Response {
        match self {
            Ok(v) => v.into_response(),
            Err(e) => e.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_wrapper_sets_content_type() {
        let res = Json(serde_json::json!({ "a": 1 })).into_response().into_inner();
        assert_eq!(res.status(), http::StatusCode::OK);
        assert_eq!(res.headers()["content-type"], "application/json");
    }

    #[test]
    fn builder_keeps_status() {
        let res = Response::builder().status(Status::BadGateway).text("down").into_inner();
        assert_eq!(res.status(), http::StatusCode::BAD_GATEWAY);
        assert_eq!(res.headers()["content-type"], "text/plain; charset=utf-8");
    }

    #[test]
    fn bodyless_status_has_no_content_type() {
        let res = Response::status(Status::NotFound).into_inner();
        assert_eq!(res.status(), http::StatusCode::NOT_FOUND);
        assert!(res.headers().get("content-type").is_none());
    }

    #[test]
    fn result_maps_both_arms() {
        let ok: Result<Response, Response> = Ok(Response::text("fine"));
        let err: Result<Response, Response> = Err(Response::status(Status::BadRequest));
        assert_eq!(ok.into_response().status_code(), Status::Ok);
        assert_eq!(err.into_response().status_code(), Status::BadRequest);
    }
}
