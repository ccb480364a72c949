pub mod daemon;
pub mod share;
pub mod version;

pub use daemon::Daemon;
pub use share::Share;
pub use version::Version;
