use clap::{Args, Subcommand};

pub mod mount;
pub mod status;
pub mod trim;
pub mod unmount;

use crate::cli::op::{Op, OpContext};

#[derive(Subcommand, Debug, Clone)]
pub enum ShareCommand {
    /// Mount the managed share
    Mount(mount::Mount),
    /// Unmount the managed share
    Unmount(unmount::Unmount),
    /// Trim the filesystem of the managed share
    Trim(trim::Trim),
    /// Show the current share state
    Status(status::Status),
}

#[derive(Args, Debug, Clone)]
pub struct Share {
    #[command(subcommand)]
    pub command: ShareCommand,
}

#[derive(Debug, thiserror::Error)]
pub enum ShareOpError {
    #[error(transparent)]
    Mount(#[from] mount::MountError),
    #[error(transparent)]
    Unmount(#[from] unmount::UnmountError),
    #[error(transparent)]
    Trim(#[from] trim::TrimError),
    #[error(transparent)]
    Status(#[from] status::StatusError),
}

#[async_trait::async_trait]
impl Op for Share {
    type Error = ShareOpError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(match &self.command {
            ShareCommand::Mount(op) => op.execute(ctx).await?,
            ShareCommand::Unmount(op) => op.execute(ctx).await?,
            ShareCommand::Trim(op) => op.execute(ctx).await?,
            ShareCommand::Status(op) => op.execute(ctx).await?,
        })
    }
}
