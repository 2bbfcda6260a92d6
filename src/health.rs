//! Health-check handlers for orchestrators.
//!
//! | Check | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can the proxy serve `/people`? Failure → pulled from the load balancer. |

use std::sync::Arc;

use tracing::warn;

use crate::handlers::AppState;
use crate::{Request, Response, Status};

/// Always `200 OK` with body `"ok"`. No dependencies.
pub async fn liveness(_state: Arc<AppState>, _req: Request) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"` once `SWAPI_URL` is configured,
/// `503 Service Unavailable` otherwise.
///
/// The upstream itself is not contacted.
pub async fn readiness(state: Arc<AppState>, _req: Request) -> Response {
    if state.swapi.is_configured() {
        Response::text("ready")
    } else {
        warn!("not ready: SWAPI_URL is not set");
        Response::builder()
            .status(Status::ServiceUnavailable)
            .text("SWAPI_URL is not set")
    }
}
