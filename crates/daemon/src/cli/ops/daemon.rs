use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Args;

use crate::cli::op::{Op, OpContext};
use crate::service_config::Config;
use crate::volume::Volume;

#[derive(Args, Debug, Clone)]
pub struct Daemon {
    /// The volume to export
    #[arg(long, required = true)]
    pub volume: String,

    /// Block device backing the volume (default: /dev/longhorn/<volume>)
    #[arg(long)]
    pub device: Option<PathBuf>,

    /// The filesystem to use for the volume
    #[arg(long, default_value = "ext4")]
    pub fs: String,

    /// Additional mount options (repeatable)
    #[arg(long)]
    pub mount: Vec<String>,

    /// Directory under which the volume is exported
    #[arg(long, default_value = crate::volume::DEFAULT_EXPORT_DIR)]
    pub export_dir: PathBuf,

    /// Address for the HTTP API to listen on
    #[arg(long, default_value = "0.0.0.0:9600")]
    pub listen: SocketAddr,

    /// Seconds between mount health checks
    #[arg(long, default_value_t = 10)]
    pub health_check_interval: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    #[error("daemon failed: {0}")]
    Failed(String),
}

#[async_trait::async_trait]
impl Op for Daemon {
    type Error = DaemonError;
    type Output = String;

    async fn execute(&self, _ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let mut volume = Volume::new(&self.volume);
        if let Some(device) = &self.device {
            volume.device_path = device.clone();
        }
        volume.fs_type = self.fs.clone();
        volume.mount_options = self.mount.clone();

        let mut config = Config::new(volume);
        config.export_dir = self.export_dir.clone();
        config.api_listen_addr = self.listen;
        config.health_check_interval_secs = self.health_check_interval;

        crate::process::start_service(&config)
            .await
            .map_err(|e| DaemonError::Failed(e.to_string()))?;
        Ok("daemon ended".to_string())
    }
}
