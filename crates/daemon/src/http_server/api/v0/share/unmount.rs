//! Unmount share API endpoint

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::http_server::api::client::ApiRequest;
use crate::share::ShareError;
use crate::ServiceState;

/// Request to unmount the managed share
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmountRequest {}

/// Response indicating the share was unmounted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmountResponse {
    pub unmounted: bool,
}

#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<ServiceState>,
) -> Result<Response, UnmountShareError> {
    state.manager().unmount().await?;

    Ok((
        http::StatusCode::OK,
        Json(UnmountResponse { unmounted: true }),
    )
        .into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum UnmountShareError {
    #[error("Share error: {0}")]
    Share(#[from] ShareError),
}

impl IntoResponse for UnmountShareError {
    fn into_response(self) -> Response {
        let UnmountShareError::Share(e) = self;
        match e {
            ShareError::NotMounted => (http::StatusCode::CONFLICT, e.to_string()).into_response(),
            _ => (http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        }
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for UnmountRequest {
    type Response = UnmountResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/share/unmount").unwrap();
        client.post(full_url).json(&self)
    }
}
