//! Share lifecycle API endpoints
//!
//! Provides REST endpoints for the managed share:
//! - Mount, unmount and trim operations
//! - Current share state

use axum::routing::{get, post};
use axum::Router;

use crate::ServiceState;

mod mount;
mod status;
mod trim;
mod unmount;

// Re-export request/response types for use by the CLI and other clients
pub use mount::{MountRequest, MountResponse};
pub use status::{StatusRequest, StatusResponse};
pub use trim::{TrimRequest, TrimResponse};
pub use unmount::{UnmountRequest, UnmountResponse};

pub fn router() -> Router<ServiceState> {
    Router::new()
        .route("/", get(status::handler))
        .route("/mount", post(mount::handler))
        .route("/unmount", post(unmount::handler))
        .route("/trim", post(trim::handler))
}
