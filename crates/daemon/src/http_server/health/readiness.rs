use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::http_server::api::client::ApiRequest;
use crate::share::ShareStatus;
use crate::ServiceState;

/// Request type for the readiness probe endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyzRequest {}

/// Response type for the readiness probe endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyzResponse {
    pub status: String,
    pub share: ShareStatus,
}

impl ApiRequest for ReadyzRequest {
    type Response = ReadyzResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/_status/readyz").unwrap();
        client.get(full_url)
    }
}

/// Reports whether the share manager is serving, along with the current
/// share status. The manager is constructed before the listener binds, so a
/// reachable daemon is always ready; the share status tells callers whether
/// the export is actually usable.
#[tracing::instrument(skip(state))]
pub async fn handler(State(state): State<ServiceState>) -> Response {
    let share = state.manager().state().await;
    (
        StatusCode::OK,
        Json(ReadyzResponse {
            status: "ok".to_string(),
            share: share.status,
        }),
    )
        .into_response()
}
