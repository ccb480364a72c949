use clap::Args;

use crate::cli::op::{Op, OpContext};
use crate::http_server::api::client::ApiError;
use crate::http_server::api::v0::share::UnmountRequest;

#[derive(Args, Debug, Clone)]
pub struct Unmount {}

#[derive(Debug, thiserror::Error)]
pub enum UnmountError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl Op for Unmount {
    type Error = UnmountError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        ctx.client.call(UnmountRequest {}).await?;
        Ok("Share unmounted".to_string())
    }
}
