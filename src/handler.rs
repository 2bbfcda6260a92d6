//! Route handlers.
//!
//! A handler is any async fn shaped like
//!
//! ```text
//! async fn people(state: Arc<AppState>, req: Request) -> impl IntoResponse
//! ```
//!
//! The router owns the state and hands each call its own `Arc` clone, so
//! handlers never capture anything themselves.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Stored form of a handler inside the router.
pub(crate) type BoxedHandler<S> = Arc<dyn Handler<S>>;

/// A request handler over shared state `S`.
///
/// Implemented for every `Fn(Arc<S>, Request) -> impl Future<Output = impl IntoResponse>`.
pub trait Handler<S>: Send + Sync + 'static {
    fn call(&self, state: Arc<S>, req: Request) -> BoxFuture;
}

impl<S, F, Fut, R> Handler<S> for F
where
    S: Send + Sync + 'static,
    F: Fn(Arc<S>, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, state: Arc<S>, req: Request) -> BoxFuture {
        let fut = self(state, req);
        Box::pin(async move { fut.await.into_response() })
    }
}
