use std::net::SocketAddr;
use std::path::PathBuf;

use crate::volume::Volume;

/// Configuration for a running share-manager service.
#[derive(Debug, Clone)]
pub struct Config {
    /// The volume exported by this daemon.
    pub volume: Volume,
    /// Directory under which the volume is mounted, as `<export_dir>/<name>`.
    pub export_dir: PathBuf,
    /// Address the HTTP API listens on.
    pub api_listen_addr: SocketAddr,
    /// Interval in seconds between mount health checks.
    pub health_check_interval_secs: u64,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn new(volume: Volume) -> Self {
        Self {
            volume,
            export_dir: PathBuf::from(crate::volume::DEFAULT_EXPORT_DIR),
            api_listen_addr: "0.0.0.0:9600".parse().expect("valid listen address"),
            health_check_interval_secs: 10,
            log_level: tracing::Level::INFO,
        }
    }
}
