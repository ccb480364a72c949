// Service modules (daemon functionality)
pub mod http_server;
pub mod process;
pub mod service_config;
pub mod service_state;
pub mod share;
pub mod version;
pub mod volume;

// CLI
pub mod cli;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for consumers
pub use process::start_service;
pub use service_config::Config as ServiceConfig;
pub use service_state::State as ServiceState;
pub use share::{ShareError, ShareManager, ShareState, ShareStatus};
pub use volume::{Mounter, MounterError, SystemMounter, Volume};
