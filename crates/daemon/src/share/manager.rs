use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::volume::{Mounter, Volume};

use super::ShareStatus;

/// Failure kinds surfaced to RPC callers. None of these are retried
/// internally; callers decide on retry policy based on the kind.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("share is already mounted")]
    AlreadyMounted,
    #[error("share is not mounted")]
    NotMounted,
    #[error("unknown volume: {0}")]
    UnknownVolume(String),
    #[error("mount failed: {0}")]
    MountFailed(String),
    #[error("unmount failed: {0}")]
    UnmountFailed(String),
    #[error("filesystem trim failed: {0}")]
    TrimFailed(String),
}

/// Mutable state of the managed share.
///
/// `mount_path` is `Some` if and only if `status` is `Mounted`; every
/// transition below maintains that together with the status update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareState {
    pub volume: String,
    pub status: ShareStatus,
    pub mount_path: Option<PathBuf>,
    pub last_error: Option<String>,
}

/// Owns the mount state of one filesystem share and executes lifecycle
/// transitions against the mount backend.
///
/// All three operations hold the state lock for their full duration, so at
/// most one lifecycle-affecting operation (including trim) runs at a time.
/// `state()` takes the same lock and therefore observes only consistent
/// snapshots, never a half-applied transition.
pub struct ShareManager {
    volume: Volume,
    export_dir: PathBuf,
    mounter: Arc<dyn Mounter>,
    state: Mutex<ShareState>,
}

impl ShareManager {
    pub fn new(volume: Volume, export_dir: PathBuf, mounter: Arc<dyn Mounter>) -> Self {
        let state = ShareState {
            volume: volume.name.clone(),
            status: ShareStatus::Unmounted,
            mount_path: None,
            last_error: None,
        };
        Self {
            volume,
            export_dir,
            mounter,
            state: Mutex::new(state),
        }
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    /// Mount the share. Fails with `AlreadyMounted` unless the share is
    /// currently unmounted; a failed mount reverts to `Unmounted` so the
    /// caller can retry.
    pub async fn mount(&self) -> Result<PathBuf, ShareError> {
        let mut state = self.state.lock().await;
        if state.status != ShareStatus::Unmounted {
            return Err(ShareError::AlreadyMounted);
        }

        state.status = ShareStatus::Mounting;
        let mount_path = self.volume.mount_path(&self.export_dir);
        tracing::info!(volume = %self.volume.name, path = %mount_path.display(), "mounting share");

        match self.mounter.mount(&self.volume, &mount_path).await {
            Ok(()) => {
                state.status = ShareStatus::Mounted;
                state.mount_path = Some(mount_path.clone());
                state.last_error = None;
                tracing::info!(volume = %self.volume.name, "share mounted");
                Ok(mount_path)
            }
            Err(e) => {
                state.status = ShareStatus::Unmounted;
                state.mount_path = None;
                state.last_error = Some(e.to_string());
                tracing::error!(volume = %self.volume.name, error = %e, "mount failed");
                Err(ShareError::MountFailed(e.to_string()))
            }
        }
    }

    /// Unmount the share. Fails with `NotMounted` unless the share is
    /// currently mounted; a failed unmount leaves the share mounted.
    pub async fn unmount(&self) -> Result<(), ShareError> {
        let mut state = self.state.lock().await;
        if state.status != ShareStatus::Mounted {
            return Err(ShareError::NotMounted);
        }

        // Invariant check: Mounted implies a recorded mount path.
        let mount_path = state
            .mount_path
            .clone()
            .expect("mounted share has a mount path");

        state.status = ShareStatus::Unmounting;
        tracing::info!(volume = %self.volume.name, path = %mount_path.display(), "unmounting share");

        match self.mounter.unmount(&mount_path).await {
            Ok(()) => {
                state.status = ShareStatus::Unmounted;
                state.mount_path = None;
                state.last_error = None;
                tracing::info!(volume = %self.volume.name, "share unmounted");
                Ok(())
            }
            Err(e) => {
                state.status = ShareStatus::Mounted;
                state.mount_path = Some(mount_path);
                state.last_error = Some(e.to_string());
                tracing::error!(volume = %self.volume.name, error = %e, "unmount failed");
                Err(ShareError::UnmountFailed(e.to_string()))
            }
        }
    }

    /// Discard unused filesystem blocks of the mounted share. Does not
    /// change the share status. `volume_name` must identify the managed
    /// volume; requests naming anything else are rejected.
    pub async fn trim(&self, volume_name: &str) -> Result<(), ShareError> {
        let mut state = self.state.lock().await;
        if volume_name != self.volume.name {
            return Err(ShareError::UnknownVolume(volume_name.to_string()));
        }
        if state.status != ShareStatus::Mounted {
            return Err(ShareError::NotMounted);
        }

        let mount_path = state
            .mount_path
            .clone()
            .expect("mounted share has a mount path");
        tracing::info!(volume = %self.volume.name, path = %mount_path.display(), "trimming filesystem");

        match self.mounter.trim(&mount_path).await {
            Ok(()) => {
                tracing::info!(volume = %self.volume.name, "filesystem trim complete");
                Ok(())
            }
            Err(e) => {
                state.last_error = Some(e.to_string());
                tracing::error!(volume = %self.volume.name, error = %e, "filesystem trim failed");
                Err(ShareError::TrimFailed(e.to_string()))
            }
        }
    }

    /// Consistent snapshot of the share state.
    pub async fn state(&self) -> ShareState {
        self.state.lock().await.clone()
    }

    /// Best-effort unmount for process teardown. Errors are logged, not
    /// returned; the process is exiting either way.
    pub async fn shutdown(&self) {
        match self.unmount().await {
            Ok(()) | Err(ShareError::NotMounted) => {}
            Err(e) => {
                tracing::warn!(volume = %self.volume.name, error = %e, "shutdown unmount failed");
            }
        }
    }

    /// Whether the recorded mount path is still an active mount point.
    /// Used by the health watcher; only meaningful while mounted.
    pub async fn mount_is_healthy(&self) -> bool {
        let mount_path = {
            let state = self.state.lock().await;
            match (&state.status, &state.mount_path) {
                (ShareStatus::Mounted, Some(path)) => path.clone(),
                _ => return true,
            }
        };
        self.mounter.is_mount_point(&mount_path).await
    }

    /// Record a health observation without changing the lifecycle status.
    pub async fn record_error(&self, message: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.last_error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubMounter;

    fn manager() -> ShareManager {
        ShareManager::new(
            Volume::new("pvc-test"),
            PathBuf::from("/export"),
            Arc::new(StubMounter),
        )
    }

    #[tokio::test]
    async fn test_initial_state_is_unmounted() {
        let m = manager();
        let state = m.state().await;
        assert_eq!(state.status, ShareStatus::Unmounted);
        assert!(state.mount_path.is_none());
        assert!(state.last_error.is_none());
    }

    #[tokio::test]
    async fn test_mount_path_set_iff_mounted() {
        let m = manager();
        m.mount().await.unwrap();
        let state = m.state().await;
        assert_eq!(state.status, ShareStatus::Mounted);
        assert_eq!(state.mount_path, Some(PathBuf::from("/export/pvc-test")));

        m.unmount().await.unwrap();
        let state = m.state().await;
        assert_eq!(state.status, ShareStatus::Unmounted);
        assert!(state.mount_path.is_none());
    }

    #[tokio::test]
    async fn test_trim_rejects_unknown_volume() {
        let m = manager();
        m.mount().await.unwrap();
        let err = m.trim("some-other-volume").await.unwrap_err();
        assert!(matches!(err, ShareError::UnknownVolume(_)));
    }

    #[tokio::test]
    async fn test_shutdown_on_unmounted_share_is_quiet() {
        let m = manager();
        m.shutdown().await;
        assert_eq!(m.state().await.status, ShareStatus::Unmounted);
    }
}
