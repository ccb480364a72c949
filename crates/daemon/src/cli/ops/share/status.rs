use clap::Args;

use crate::cli::op::{Op, OpContext};
use crate::http_server::api::client::ApiError;
use crate::http_server::api::v0::share::StatusRequest;

#[derive(Args, Debug, Clone)]
pub struct Status {}

#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("failed to render share state: {0}")]
    Render(#[from] serde_json::Error),
}

#[async_trait::async_trait]
impl Op for Status {
    type Error = StatusError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let response = ctx.client.call(StatusRequest {}).await?;
        Ok(serde_json::to_string_pretty(&response.share)?)
    }
}
