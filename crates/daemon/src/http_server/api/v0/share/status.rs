//! Share status API endpoint

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::http_server::api::client::ApiRequest;
use crate::share::ShareState;
use crate::ServiceState;

/// Request for the current share state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRequest {}

/// Response containing the share state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub share: ShareState,
}

#[tracing::instrument(skip(state))]
pub async fn handler(State(state): State<ServiceState>) -> Response {
    let share = state.manager().state().await;
    (http::StatusCode::OK, Json(StatusResponse { share })).into_response()
}

// Client implementation - builds request for this operation
impl ApiRequest for StatusRequest {
    type Response = StatusResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/share").unwrap();
        client.get(full_url)
    }
}
