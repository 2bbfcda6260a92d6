//! HTTP status codes the proxy can answer with.
//!
//! Use [`Status`] anywhere a status code is accepted: `Response::status()`,
//! `Response::builder().status()`, or as a bare handler return value.
//!
//! ```rust
//! use swapi_proxy::{Response, Status};
//!
//! Response::status(Status::NotFound);
//!
//! Response::builder()
//!     .status(Status::BadGateway)
//!     .json(br#"{"detail":"upstream down"}"#.to_vec());
//! ```

/// The subset of IANA status codes this service produces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                  // 200

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,          // 400
    NotFound,            // 404
    MethodNotAllowed,    // 405

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError, // 500
    BadGateway,          // 502
    ServiceUnavailable,  // 503
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> http::StatusCode {
        match s {
            Status::Ok => http::StatusCode::OK,
            Status::BadRequest => http::StatusCode::BAD_REQUEST,
            Status::NotFound => http::StatusCode::NOT_FOUND,
            Status::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            Status::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
            Status::BadGateway => http::StatusCode::BAD_GATEWAY,
            Status::ServiceUnavailable => http::StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}
