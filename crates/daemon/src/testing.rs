//! Test doubles shared by the unit tests. Integration tests under `tests/`
//! carry their own recording mounter.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::service_state::State as ServiceState;
use crate::share::ShareManager;
use crate::volume::{Mounter, MounterError, Volume};

/// Mount backend that succeeds at everything and touches nothing.
pub(crate) struct StubMounter;

#[async_trait]
impl Mounter for StubMounter {
    async fn mount(&self, _volume: &Volume, _mount_path: &Path) -> Result<(), MounterError> {
        Ok(())
    }

    async fn unmount(&self, _mount_path: &Path) -> Result<(), MounterError> {
        Ok(())
    }

    async fn trim(&self, _mount_path: &Path) -> Result<(), MounterError> {
        Ok(())
    }

    async fn is_mount_point(&self, _path: &Path) -> bool {
        true
    }
}

/// Service state managing the volume "pvc-test" over a stub backend.
pub(crate) fn stub_state() -> ServiceState {
    let manager = ShareManager::new(
        Volume::new("pvc-test"),
        PathBuf::from("/export"),
        Arc::new(StubMounter),
    );
    ServiceState::with_manager(Arc::new(manager))
}
