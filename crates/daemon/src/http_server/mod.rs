//! HTTP surface of the daemon.
//!
//! Routing, request marshaling and error-status propagation are delegated to
//! axum; each endpoint lives in its own module with its request/response
//! types, handler, and typed client request.

pub mod api;
pub mod health;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::service_state::State as ServiceState;

pub fn app(state: ServiceState) -> Router {
    Router::new()
        .nest("/_status", health::router())
        .nest("/api/v0/share", api::v0::share::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
