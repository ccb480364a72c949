use clap::Args;

use crate::cli::op::{Op, OpContext};
use crate::http_server::api::client::ApiError;
use crate::http_server::api::v0::share::TrimRequest;

#[derive(Args, Debug, Clone)]
pub struct Trim {
    /// Name of the volume to trim
    #[arg(long)]
    pub volume: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TrimError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

#[async_trait::async_trait]
impl Op for Trim {
    type Error = TrimError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        ctx.client
            .call(TrimRequest {
                volume: self.volume.clone(),
            })
            .await?;
        Ok(format!("Trimmed filesystem of volume {}", self.volume))
    }
}
