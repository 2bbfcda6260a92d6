//! Radix-tree request router.
//!
//! One tree per HTTP method. A path registered under some other method is a
//! `405`, a path registered nowhere is a `404`.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;

/// The application router, owning the state every handler receives.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router<S> {
    state: Arc<S>,
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
}

/// Outcome of a route lookup.
pub(crate) enum Route<S> {
    Found(BoxedHandler<S>),
    MethodNotAllowed,
    NotFound,
}

impl<S: Send + Sync + 'static> Router<S> {
    pub fn with_state(state: S) -> Self {
        Self { state: Arc::new(state), routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// # Panics
    ///
    /// Panics if `path` is malformed or already registered for `method`.
    /// Routes are fixed at startup, so this is a programming error.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use swapi_proxy::{Method, Request, Response, Router};
    /// async fn root(_state: Arc<()>, _req: Request) -> Response { Response::text("hi") }
    ///
    /// Router::with_state(()).on(Method::Get, "/", root);
    /// ```
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        let handler: BoxedHandler<S> = Arc::new(handler);
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn state(&self) -> Arc<S> {
        Arc::clone(&self.state)
    }

    pub(crate) fn lookup(&self, method: Method, path: &str) -> Route<S> {
        if let Some(matched) = self.routes.get(&method).and_then(|t| t.at(path).ok()) {
            return Route::Found(Arc::clone(matched.value));
        }

        if self.routes.values().any(|t| t.at(path).is_ok()) {
            Route::MethodNotAllowed
        } else {
            Route::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Request, Response};

    async fn ok(_state: Arc<()>, _req: Request) -> Response {
        Response::text("ok")
    }

    fn router() -> Router<()> {
        Router::with_state(())
            .on(Method::Get, "/", ok)
            .on(Method::Get, "/people", ok)
    }

    #[test]
    fn finds_registered_route() {
        assert!(matches!(router().lookup(Method::Get, "/people"), Route::Found(_)));
    }

    #[test]
    fn wrong_method_is_not_allowed() {
        assert!(matches!(router().lookup(Method::Post, "/people"), Route::MethodNotAllowed));
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert!(matches!(router().lookup(Method::Get, "/planets"), Route::NotFound));
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn duplicate_route_panics() {
        let _ = router().on(Method::Get, "/", ok);
    }
}
