//! Contracts for the content-sync collaborator.
//!
//! The sync engine refreshes a local cache from the remote CMS; the store reads
//! from that cache. Both live outside this workspace's concern, so only their
//! shape is defined here.

mod error;
mod traits;
mod types;

pub use error::{Result, SyncError};
pub use traits::{ContentStore, SyncClient};
pub use types::{SyncClientConfig, SyncMode};
