//! Mount share API endpoint

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::http_server::api::client::ApiRequest;
use crate::share::ShareError;
use crate::ServiceState;

/// Request to mount the managed share
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountRequest {}

/// Response indicating the share was mounted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountResponse {
    pub mounted: bool,
    pub mount_path: PathBuf,
}

#[tracing::instrument(skip(state))]
pub async fn handler(
    State(state): State<ServiceState>,
) -> Result<Response, MountShareError> {
    let mount_path = state.manager().mount().await?;

    Ok((
        http::StatusCode::OK,
        Json(MountResponse {
            mounted: true,
            mount_path,
        }),
    )
        .into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum MountShareError {
    #[error("Share error: {0}")]
    Share(#[from] ShareError),
}

impl IntoResponse for MountShareError {
    fn into_response(self) -> Response {
        let MountShareError::Share(e) = self;
        match e {
            ShareError::AlreadyMounted => {
                (http::StatusCode::CONFLICT, e.to_string()).into_response()
            }
            _ => (http::StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        }
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for MountRequest {
    type Response = MountResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/share/mount").unwrap();
        client.post(full_url).json(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stub_state;

    #[tokio::test]
    async fn test_mount_then_remount_conflicts() {
        let state = stub_state();

        let response = handler(State(state.clone())).await.unwrap().into_response();
        assert_eq!(response.status(), http::StatusCode::OK);

        let err = handler(State(state)).await.unwrap_err();
        assert_eq!(
            err.into_response().status(),
            http::StatusCode::CONFLICT
        );
    }
}
