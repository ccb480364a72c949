use std::path::PathBuf;
use std::sync::Arc;

use crate::service_config::Config;
use crate::share::ShareManager;
use crate::volume::{Mounter, SystemMounter};

/// Main service state shared with every request handler.
///
/// The share manager is the single mutable resource of the process; it is
/// constructed once here and injected wherever it is needed, never reached
/// through a global.
#[derive(Clone)]
pub struct State {
    manager: Arc<ShareManager>,
}

#[derive(Debug, thiserror::Error)]
pub enum StateSetupError {
    #[error("failed to create export directory {path}: {source}")]
    ExportDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl State {
    pub async fn from_config(config: &Config) -> Result<Self, StateSetupError> {
        tokio::fs::create_dir_all(&config.export_dir)
            .await
            .map_err(|source| StateSetupError::ExportDir {
                path: config.export_dir.clone(),
                source,
            })?;

        let mounter: Arc<dyn Mounter> = Arc::new(SystemMounter::new());
        let manager = Arc::new(ShareManager::new(
            config.volume.clone(),
            config.export_dir.clone(),
            mounter,
        ));
        tracing::info!(volume = %config.volume.name, export_dir = %config.export_dir.display(), "share manager initialized");

        Ok(Self { manager })
    }

    /// Build a state around an existing manager. Used by tests to inject a
    /// mount backend double.
    pub fn with_manager(manager: Arc<ShareManager>) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &Arc<ShareManager> {
        &self.manager
    }
}
