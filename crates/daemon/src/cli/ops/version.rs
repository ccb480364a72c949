use clap::Args;

use crate::cli::op::{Op, OpContext};
use crate::version::BuildInfo;

#[derive(Args, Debug, Clone)]
pub struct Version {}

#[derive(Debug, thiserror::Error)]
pub enum VersionError {}

#[async_trait::async_trait]
impl Op for Version {
    type Error = VersionError;
    type Output = String;

    async fn execute(&self, _ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(BuildInfo::new().to_string())
    }
}
