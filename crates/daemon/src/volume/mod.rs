//! Volume configuration and the OS mount backend.
//!
//! The daemon manages exactly one volume. `Volume` carries the static
//! description supplied on the command line; `Mounter` is the seam over the
//! actual mount/umount/fstrim system calls so the lifecycle manager can be
//! tested without root privileges.

mod system;

pub use system::{SystemMounter, DEFAULT_COMMAND_TIMEOUT};

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default directory under which volumes are exported.
pub const DEFAULT_EXPORT_DIR: &str = "/export";

/// Default directory where volume block devices appear.
pub const DEFAULT_DEVICE_DIR: &str = "/dev/longhorn";

/// Static configuration for the managed volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volume {
    pub name: String,
    pub device_path: PathBuf,
    pub fs_type: String,
    pub mount_options: Vec<String>,
}

impl Volume {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let device_path = Path::new(DEFAULT_DEVICE_DIR).join(&name);
        Self {
            name,
            device_path,
            fs_type: "ext4".to_string(),
            mount_options: Vec::new(),
        }
    }

    /// The path this volume is exported at once mounted.
    pub fn mount_path(&self, export_dir: &Path) -> PathBuf {
        export_dir.join(&self.name)
    }
}

/// Error from the underlying mount backend. Carries the stderr of the failed
/// command so operators can see the OS-level cause.
#[derive(Debug, thiserror::Error)]
pub enum MounterError {
    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
    #[error("{command} timed out after {seconds}s")]
    Timeout { command: String, seconds: u64 },
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("invalid device {0}")]
    InvalidDevice(PathBuf),
    #[error("failed to create mount point {path}: {source}")]
    CreateMountPoint {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Seam over OS-level filesystem operations.
///
/// All methods may block on syscalls or child processes for an unbounded
/// amount of time (bounded only by the backend's own command timeout); the
/// caller must treat them as blocking I/O.
#[async_trait]
pub trait Mounter: Send + Sync {
    /// Mount `volume` at `mount_path`, creating the mount point if needed.
    async fn mount(&self, volume: &Volume, mount_path: &Path) -> Result<(), MounterError>;

    /// Unmount the filesystem at `mount_path`.
    async fn unmount(&self, mount_path: &Path) -> Result<(), MounterError>;

    /// Discard unused blocks of the filesystem mounted at `mount_path`.
    async fn trim(&self, mount_path: &Path) -> Result<(), MounterError>;

    /// Whether `path` is currently a mount point.
    async fn is_mount_point(&self, path: &Path) -> bool;
}
