//! Health and status probe endpoints served under `/_status`.

pub mod liveness;
pub mod readiness;
pub mod version;

use axum::routing::get;
use axum::Router;

use crate::service_state::State as ServiceState;

pub fn router() -> Router<ServiceState> {
    Router::new()
        .route("/livez", get(liveness::handler))
        .route("/readyz", get(readiness::handler))
        .route("/version", get(version::handler))
}
