//! Mount backend that shells out to the system `mount`, `umount` and
//! `fstrim` binaries.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use super::{Mounter, MounterError, Volume};

/// Upper bound on a single mount/umount/fstrim invocation. Trim of a large
/// filesystem can take minutes, so this is deliberately generous.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct SystemMounter {
    command_timeout: Duration,
}

impl SystemMounter {
    pub fn new() -> Self {
        Self {
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    pub fn with_timeout(command_timeout: Duration) -> Self {
        Self { command_timeout }
    }

    async fn run(&self, mut cmd: Command, name: &str) -> Result<(), MounterError> {
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

        let output = timeout(self.command_timeout, cmd.output())
            .await
            .map_err(|_| MounterError::Timeout {
                command: name.to_string(),
                seconds: self.command_timeout.as_secs(),
            })?
            .map_err(|source| MounterError::Spawn {
                command: name.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(MounterError::CommandFailed {
                command: name.to_string(),
                stderr,
            });
        }

        Ok(())
    }
}

impl Default for SystemMounter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mounter for SystemMounter {
    async fn mount(&self, volume: &Volume, mount_path: &Path) -> Result<(), MounterError> {
        if !volume.device_path.exists() {
            return Err(MounterError::InvalidDevice(volume.device_path.clone()));
        }

        // Mounting an already-mounted path is a no-op; the manager relies on
        // this for idempotence after a crash.
        if self.is_mount_point(mount_path).await {
            return Ok(());
        }

        tokio::fs::create_dir_all(mount_path)
            .await
            .map_err(|source| MounterError::CreateMountPoint {
                path: mount_path.to_path_buf(),
                source,
            })?;

        let mut cmd = Command::new("mount");
        cmd.arg("-t").arg(&volume.fs_type);
        if !volume.mount_options.is_empty() {
            cmd.arg("-o").arg(volume.mount_options.join(","));
        }
        cmd.arg(&volume.device_path).arg(mount_path);

        self.run(cmd, "mount").await
    }

    async fn unmount(&self, mount_path: &Path) -> Result<(), MounterError> {
        let mut cmd = Command::new("umount");
        cmd.arg(mount_path);
        self.run(cmd, "umount").await
    }

    async fn trim(&self, mount_path: &Path) -> Result<(), MounterError> {
        let mut cmd = Command::new("fstrim");
        cmd.arg(mount_path);
        self.run(cmd, "fstrim").await
    }

    async fn is_mount_point(&self, path: &Path) -> bool {
        let mut cmd = Command::new("mountpoint");
        cmd.arg("-q").arg(path);
        cmd.stdout(Stdio::null()).stderr(Stdio::null());
        matches!(cmd.status().await, Ok(status) if status.success())
    }
}
