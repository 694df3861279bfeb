//! Static path enumeration.

use std::sync::Arc;

use pageprops_core::sync::{Result, SyncMode};

use crate::config::Config;
use crate::sync::SyncClientFactory;

/// Lists every path in the live sitemap, for static generation.
pub struct PathEnumerator {
    config: Arc<Config>,
    factory: Arc<dyn SyncClientFactory>,
}

impl PathEnumerator {
    pub fn new(config: Arc<Config>, factory: Arc<dyn SyncClientFactory>) -> Self {
        Self { config, factory }
    }

    /// Syncs live content, then returns the sitemap's paths in sitemap order.
    pub async fn paths(&self) -> Result<Vec<String>> {
        tracing::info!("Fetching sitemap for static paths");

        let mode = SyncMode::Live;
        let client = self.factory.client(mode, self.config.api_key(false));

        tracing::info!(mode = %mode, "Syncing content");
        client.run_sync().await?;

        let sitemap = client
            .store()
            .get_sitemap(&self.config.channel_name, &self.config.language_code)
            .await?;

        let paths = sitemap
            .map(|sitemap| sitemap.into_keys().collect())
            .unwrap_or_default();
        Ok(paths)
    }
}
