//! Sync client construction and store backends.
//!
//! Every caller asks the [`SyncClientFactory`] for a client configured for
//! preview or live content. Production uses the file-system cache written by
//! the sync engine; tests and `--demo` use the in-memory backend.

mod filesystem;
mod inmemory;

use std::sync::Arc;

use pageprops_core::sync::{SyncClient, SyncMode};

pub use filesystem::FileSystemSyncFactory;
pub use inmemory::{InMemoryContent, InMemorySyncFactory};

/// Builds sync clients for a mode and API key.
pub trait SyncClientFactory: Send + Sync {
    fn client(&self, mode: SyncMode, api_key: &str) -> Arc<dyn SyncClient>;
}
