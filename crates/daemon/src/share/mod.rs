//! Share lifecycle management.
//!
//! A share is the managed volume exported by this daemon. The
//! `ShareManager` owns the share's state and serializes every
//! lifecycle-affecting operation behind a single lock.

mod manager;
mod status;

pub use manager::{ShareError, ShareManager, ShareState};
pub use status::ShareStatus;
