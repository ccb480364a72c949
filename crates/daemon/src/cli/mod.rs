//! Command line interface for the share-manager daemon and its client ops.

pub mod op;
pub mod ops;

use clap::{Parser, Subcommand};
use url::Url;

use crate::http_server::api::client::ApiClient;
use op::{Op, OpContext};

#[derive(Parser, Debug)]
#[command(name = "share-manager", version, about)]
pub struct Cli {
    /// Base URL of a running share-manager daemon (client commands only)
    #[arg(
        long,
        global = true,
        env = "SHARE_MANAGER_URL",
        default_value = "http://127.0.0.1:9600"
    )]
    pub url: Url,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the share-manager daemon
    Daemon(ops::daemon::Daemon),
    /// Operate on the managed share of a running daemon
    Share(ops::share::Share),
    /// Print build information
    Version(ops::version::Version),
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = ApiClient::new(&self.url)?;
        let ctx = OpContext { client };

        let output = match self.command {
            Command::Daemon(op) => op.execute(&ctx).await?,
            Command::Share(op) => op.execute(&ctx).await?,
            Command::Version(op) => op.execute(&ctx).await?,
        };

        if !output.is_empty() {
            println!("{}", output);
        }
        Ok(())
    }
}
