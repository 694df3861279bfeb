//! In-memory sync backend for tests and demos.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pageprops_core::content::{ContentItem, Sitemap, StoredPage};
use pageprops_core::sync::{ContentStore, Result, SyncClient, SyncClientConfig, SyncError, SyncMode};

use super::SyncClientFactory;

/// Content held by an [`InMemoryStore`], keyed like the file-system cache.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContent {
    sitemaps: HashMap<(String, String), Sitemap>,
    pages: HashMap<(i64, String), StoredPage>,
    items: HashMap<(i64, String), ContentItem>,
    lists: HashMap<(String, String), Vec<ContentItem>>,
}

impl InMemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sitemap(
        mut self,
        channel_name: &str,
        language_code: &str,
        sitemap: Sitemap,
    ) -> Self {
        let key = (channel_name.to_string(), language_code.to_string());
        self.sitemaps.insert(key, sitemap);
        self
    }

    pub fn with_page(mut self, language_code: &str, page: StoredPage) -> Self {
        self.pages
            .insert((page.page_id, language_code.to_string()), page);
        self
    }

    /// Adds an item. Items without a `contentID` are ignored.
    pub fn with_item(mut self, language_code: &str, item: ContentItem) -> Self {
        if let Some(id) = item.content_id {
            self.items.insert((id, language_code.to_string()), item);
        }
        self
    }

    pub fn with_list(
        mut self,
        reference_name: &str,
        language_code: &str,
        items: Vec<ContentItem>,
    ) -> Self {
        let key = (reference_name.to_string(), language_code.to_string());
        self.lists.insert(key, items);
        self
    }
}

/// In-memory content store.
///
/// Uses `Arc<RwLock<_>>` so every client of a mode shares the same content.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    content: Arc<RwLock<InMemoryContent>>,
}

impl InMemoryStore {
    pub fn new(content: InMemoryContent) -> Self {
        Self {
            content: Arc::new(RwLock::new(content)),
        }
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    async fn get_sitemap(
        &self,
        channel_name: &str,
        language_code: &str,
    ) -> Result<Option<Sitemap>> {
        let content = self.content.read().await;
        Ok(content
            .sitemaps
            .get(&(channel_name.to_string(), language_code.to_string()))
            .cloned())
    }

    async fn get_page(&self, page_id: i64, language_code: &str) -> Result<Option<StoredPage>> {
        let content = self.content.read().await;
        Ok(content
            .pages
            .get(&(page_id, language_code.to_string()))
            .cloned())
    }

    async fn get_content_item(
        &self,
        content_id: i64,
        language_code: &str,
    ) -> Result<Option<ContentItem>> {
        let content = self.content.read().await;
        Ok(content
            .items
            .get(&(content_id, language_code.to_string()))
            .cloned())
    }

    async fn get_content_list(
        &self,
        reference_name: &str,
        language_code: &str,
    ) -> Result<Vec<ContentItem>> {
        let content = self.content.read().await;
        Ok(content
            .lists
            .get(&(reference_name.to_string(), language_code.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

/// Sync client over an [`InMemoryStore`] that counts sync runs.
#[derive(Debug)]
pub struct InMemorySyncClient {
    config: SyncClientConfig,
    store: InMemoryStore,
    syncs: Arc<AtomicUsize>,
    fail_sync: bool,
}

#[async_trait]
impl SyncClient for InMemorySyncClient {
    async fn run_sync(&self) -> Result<()> {
        self.syncs.fetch_add(1, Ordering::SeqCst);
        if self.fail_sync {
            return Err(SyncError::SyncFailed(format!(
                "{} sync unavailable",
                self.config.mode
            )));
        }
        Ok(())
    }

    fn store(&self) -> &dyn ContentStore {
        &self.store
    }

    fn config(&self) -> &SyncClientConfig {
        &self.config
    }
}

/// Factory handing out clients over one store per mode.
#[derive(Debug, Clone)]
pub struct InMemorySyncFactory {
    preview: InMemoryStore,
    live: InMemoryStore,
    preview_syncs: Arc<AtomicUsize>,
    live_syncs: Arc<AtomicUsize>,
    /// API key of the latest client built for each mode.
    #[cfg(test)]
    last_keys: Arc<std::sync::Mutex<HashMap<SyncMode, String>>>,
    fail_sync: bool,
}

impl InMemorySyncFactory {
    pub fn new(preview: InMemoryContent, live: InMemoryContent) -> Self {
        Self {
            preview: InMemoryStore::new(preview),
            live: InMemoryStore::new(live),
            preview_syncs: Arc::new(AtomicUsize::new(0)),
            live_syncs: Arc::new(AtomicUsize::new(0)),
            #[cfg(test)]
            last_keys: Arc::default(),
            fail_sync: false,
        }
    }

    /// Same content for preview and live.
    pub fn shared(content: InMemoryContent) -> Self {
        Self::new(content.clone(), content)
    }

    fn store(&self, mode: SyncMode) -> &InMemoryStore {
        match mode {
            SyncMode::Preview => &self.preview,
            SyncMode::Live => &self.live,
        }
    }
}

#[cfg(test)]
impl InMemorySyncFactory {
    fn record_key(&self, mode: SyncMode, api_key: &str) {
        if let Ok(mut keys) = self.last_keys.lock() {
            keys.insert(mode, api_key.to_string());
        }
    }

    /// Makes every `run_sync` fail.
    pub fn failing_sync(mut self) -> Self {
        self.fail_sync = true;
        self
    }

    /// Number of `run_sync` calls made by clients of a mode.
    pub fn sync_count(&self, mode: SyncMode) -> usize {
        match mode {
            SyncMode::Preview => self.preview_syncs.load(Ordering::SeqCst),
            SyncMode::Live => self.live_syncs.load(Ordering::SeqCst),
        }
    }

    /// API key of the latest client built for a mode.
    pub fn last_key(&self, mode: SyncMode) -> Option<String> {
        self.last_keys
            .lock()
            .ok()
            .and_then(|keys| keys.get(&mode).cloned())
    }

    /// Number of modes a key has been recorded for.
    pub fn recorded_keys(&self) -> usize {
        self.last_keys.lock().map(|keys| keys.len()).unwrap_or(0)
    }
}

#[cfg(not(test))]
impl InMemorySyncFactory {
    fn record_key(&self, _mode: SyncMode, _api_key: &str) {}
}

impl SyncClientFactory for InMemorySyncFactory {
    fn client(&self, mode: SyncMode, api_key: &str) -> Arc<dyn SyncClient> {
        self.record_key(mode, api_key);

        let syncs = match mode {
            SyncMode::Preview => self.preview_syncs.clone(),
            SyncMode::Live => self.live_syncs.clone(),
        };

        Arc::new(InMemorySyncClient {
            config: SyncClientConfig::new(
                "in-memory",
                api_key,
                mode,
                "",
                "",
                std::path::Path::new("memory"),
            ),
            store: self.store(mode).clone(),
            syncs,
            fail_sync: self.fail_sync,
        })
    }
}
