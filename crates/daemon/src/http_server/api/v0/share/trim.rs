//! Filesystem trim API endpoint

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::http_server::api::client::ApiRequest;
use crate::share::ShareError;
use crate::ServiceState;

/// Request to trim the filesystem of the managed share
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrimRequest {
    /// Name of the volume to trim; must be the volume this daemon manages.
    pub volume: String,
}

/// Response indicating the filesystem was trimmed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrimResponse {
    pub trimmed: bool,
}

#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<ServiceState>,
    Json(request): Json<TrimRequest>,
) -> Result<Response, TrimShareError> {
    state.manager().trim(&request.volume).await?;

    Ok((http::StatusCode::OK, Json(TrimResponse { trimmed: true })).into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum TrimShareError {
    #[error("Share error: {0}")]
    Share(#[from] ShareError),
}

impl IntoResponse for TrimShareError {
    fn into_response(self) -> Response {
        let TrimShareError::Share(e) = self;
        match e {
            ShareError::NotMounted => (http::StatusCode::CONFLICT, e.to_string()).into_response(),
            ShareError::UnknownVolume(_) => {
                (http::StatusCode::NOT_FOUND, e.to_string()).into_response()
            }
            _ => (http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        }
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for TrimRequest {
    type Response = TrimResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/share/trim").unwrap();
        client.post(full_url).json(&self)
    }
}
