//! # swapi-proxy
//!
//! A small HTTP proxy in front of the Star Wars API.
//!
//! ## What it serves
//!
//! | Route | Answer |
//! |---|---|
//! | `GET /` | a static welcome message |
//! | `GET /people?page=N` | one upstream page of people, sorted by `name` |
//! | `GET /healthz` | liveness check |
//! | `GET /readyz` | readiness check, `503` until `SWAPI_URL` is configured |
//!
//! The upstream base URL comes from `SWAPI_URL`. Everything else the proxy
//! needs is read once at startup into a [`Config`] and shared with the
//! handlers through [`AppState`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use swapi_proxy::{AppState, Config, Server, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), swapi_proxy::Error> {
//!     let config = Config::from_env()?;
//!     let addr = config.bind_addr;
//!     let state = AppState::new(config)?;
//!
//!     Server::bind(addr).serve(app(state)).await
//! }
//! ```
//!
//! ## Errors
//!
//! Failures on `/people` are values of [`swapi::ProxyError`]. Each variant
//! maps to exactly one status code:
//!
//! - missing `SWAPI_URL` → `500`
//! - invalid `page` → `400`
//! - network failure or non-2xx upstream → `502`
//! - unparseable upstream payload → `500`

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod config;
pub mod handlers;
pub mod health;
pub mod logger;
pub mod swapi;

pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use handlers::{AppState, app};
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Json, Response};
pub use router::Router;
pub use server::Server;
pub use status::Status;
