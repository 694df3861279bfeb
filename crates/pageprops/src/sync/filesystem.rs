//! File-system backed sync client.
//!
//! The sync engine writes one JSON document per object under the cache
//! namespace for its mode:
//!
//! ```text
//! <cache_root>/<preview|live>/<lang>/sitemap/<channel>.json
//! <cache_root>/<preview|live>/<lang>/page/<pageID>.json
//! <cache_root>/<preview|live>/<lang>/item/<contentID>.json
//! <cache_root>/<preview|live>/<lang>/list/<referenceName>.json
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use pageprops_core::content::{ContentItem, Sitemap, StoredPage};
use pageprops_core::sync::{ContentStore, Result, SyncClient, SyncClientConfig, SyncError, SyncMode};

use super::SyncClientFactory;
use crate::config::Config;

/// Reads synced content from a cache namespace directory.
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    root: PathBuf,
}

impl FileSystemStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, language_code: &str, kind: &str, id: &str) -> Result<PathBuf> {
        for part in [language_code, id] {
            if part.is_empty() || part == "." || part == ".." || part.contains(['/', '\\']) {
                return Err(SyncError::Io(format!("invalid cache key: {part:?}")));
            }
        }
        Ok(self
            .root
            .join(language_code)
            .join(kind)
            .join(format!("{id}.json")))
    }

    /// Reads and parses a cached object. A missing file is `None`.
    async fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Cache object not found");
                return Ok(None);
            }
            Err(e) => return Err(SyncError::Io(format!("{}: {e}", path.display()))),
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => Err(SyncError::Serialization(format!("{}: {e}", path.display()))),
        }
    }
}

#[async_trait]
impl ContentStore for FileSystemStore {
    async fn get_sitemap(
        &self,
        channel_name: &str,
        language_code: &str,
    ) -> Result<Option<Sitemap>> {
        let path = self.object_path(language_code, "sitemap", channel_name)?;
        self.read_json(&path).await
    }

    async fn get_page(&self, page_id: i64, language_code: &str) -> Result<Option<StoredPage>> {
        let id = page_id.to_string();
        let path = self.object_path(language_code, "page", &id)?;
        self.read_json(&path).await
    }

    async fn get_content_item(
        &self,
        content_id: i64,
        language_code: &str,
    ) -> Result<Option<ContentItem>> {
        let id = content_id.to_string();
        let path = self.object_path(language_code, "item", &id)?;
        self.read_json(&path).await
    }

    async fn get_content_list(
        &self,
        reference_name: &str,
        language_code: &str,
    ) -> Result<Vec<ContentItem>> {
        let path = self.object_path(language_code, "list", reference_name)?;
        Ok(self.read_json(&path).await?.unwrap_or_default())
    }
}

/// Sync client over a file-system cache namespace.
///
/// Refreshing the cache from the remote CMS is the sync engine's job; this
/// client only prepares the namespace it reads from.
#[derive(Debug)]
pub struct FileSystemSyncClient {
    config: SyncClientConfig,
    store: FileSystemStore,
}

impl FileSystemSyncClient {
    pub fn new(config: SyncClientConfig) -> Self {
        let store = FileSystemStore::new(config.cache_path.clone());
        Self { config, store }
    }
}

#[async_trait]
impl SyncClient for FileSystemSyncClient {
    async fn run_sync(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.config.cache_path)
            .await
            .map_err(|e| {
                SyncError::SyncFailed(format!("{}: {e}", self.config.cache_path.display()))
            })?;

        tracing::debug!(
            guid = %self.config.guid,
            mode = %self.config.mode,
            cache = %self.config.cache_path.display(),
            "Cache namespace ready"
        );
        Ok(())
    }

    fn store(&self) -> &dyn ContentStore {
        &self.store
    }

    fn config(&self) -> &SyncClientConfig {
        &self.config
    }
}

/// Builds [`FileSystemSyncClient`]s rooted at the configured cache directory.
#[derive(Debug, Clone)]
pub struct FileSystemSyncFactory {
    guid: String,
    language_code: String,
    channel_name: String,
    cache_root: PathBuf,
}

impl FileSystemSyncFactory {
    pub fn new(config: &Config) -> Self {
        Self {
            guid: config.guid.clone(),
            language_code: config.language_code.clone(),
            channel_name: config.channel_name.clone(),
            cache_root: config.cache_root.clone(),
        }
    }
}

impl SyncClientFactory for FileSystemSyncFactory {
    fn client(&self, mode: SyncMode, api_key: &str) -> Arc<dyn SyncClient> {
        let config = SyncClientConfig::new(
            &self.guid,
            api_key,
            mode,
            &self.language_code,
            &self.channel_name,
            &self.cache_root,
        );
        Arc::new(FileSystemSyncClient::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn test_reads_sitemap_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "en-us/sitemap/website.json",
            r#"{"/home": {"pageID": 2}, "/about": {"pageID": 3}, "/blog": {"pageID": 4}}"#,
        );

        let store = FileSystemStore::new(dir.path());
        let sitemap = store.get_sitemap("website", "en-us").await.unwrap();
        let sitemap = sitemap.unwrap();
        let keys: Vec<&str> = sitemap.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/home", "/about", "/blog"]);
    }

    #[tokio::test]
    async fn test_reads_page() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "en-us/page/2.json",
            r#"{
                "pageID": 2,
                "templateName": "Main",
                "zones": {"Main": [{"module": "Hero", "item": {}}]}
            }"#,
        );

        let store = FileSystemStore::new(dir.path());
        let page = store.get_page(2, "en-us").await.unwrap().unwrap();
        assert_eq!(page.template_name, "Main");
        assert_eq!(page.zones.get("Main").unwrap()[0].module, "Hero");
    }

    #[tokio::test]
    async fn test_missing_objects_are_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());

        let sitemap = store.get_sitemap("website", "en-us").await.unwrap();
        assert!(sitemap.is_none());
        assert!(store.get_page(9, "en-us").await.unwrap().is_none());
        assert!(store.get_content_item(9, "en-us").await.unwrap().is_none());
        let posts = store.get_content_list("posts", "en-us").await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "en-us/item/7.json", "{not json");

        let store = FileSystemStore::new(dir.path());
        let result = store.get_content_item(7, "en-us").await;
        assert!(matches!(result, Err(SyncError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_rejects_traversal_in_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());

        let result = store.get_content_list("../secrets", "en-us").await;
        assert!(matches!(result, Err(SyncError::Io(_))));
        let result = store.get_sitemap("website", "..").await;
        assert!(matches!(result, Err(SyncError::Io(_))));
    }

    #[tokio::test]
    async fn test_reads_content_list() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "en-us/list/posts.json",
            r#"[
                {"contentID": 1, "fields": {"title": "One"}},
                {"contentID": 2, "fields": {"title": "Two"}}
            ]"#,
        );

        let store = FileSystemStore::new(dir.path());
        let posts = store.get_content_list("posts", "en-us").await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].field_str("title"), Some("Two"));
    }

    #[tokio::test]
    async fn test_factory_isolates_modes() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config();
        config.cache_root = dir.path().to_path_buf();
        let factory = FileSystemSyncFactory::new(&config);

        let preview = factory.client(SyncMode::Preview, "preview-key");
        let live = factory.client(SyncMode::Live, "fetch-key");

        assert_eq!(preview.config().cache_path, dir.path().join("preview"));
        assert_eq!(live.config().cache_path, dir.path().join("live"));
        assert_eq!(preview.config().api_key, "preview-key");
        assert_eq!(live.config().languages, vec!["en-us".to_string()]);
        assert_eq!(live.config().channels, vec!["website".to_string()]);
    }

    #[tokio::test]
    async fn test_run_sync_creates_namespace() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config();
        config.cache_root = dir.path().to_path_buf();
        let factory = FileSystemSyncFactory::new(&config);

        let client = factory.client(SyncMode::Live, "fetch-key");
        client.run_sync().await.unwrap();
        assert!(dir.path().join("live").is_dir());
        assert!(!dir.path().join("preview").exists());
    }
}
