use clap::Args;

use crate::cli::op::{Op, OpContext};
use crate::http_server::api::client::ApiError;
use crate::http_server::api::v0::share::MountRequest;

#[derive(Args, Debug, Clone)]
pub struct Mount {}

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl Op for Mount {
    type Error = MountError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let response = ctx.client.call(MountRequest {}).await?;
        Ok(format!(
            "Share mounted at {}",
            response.mount_path.display()
        ))
    }
}
