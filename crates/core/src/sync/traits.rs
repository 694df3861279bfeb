use async_trait::async_trait;

use crate::content::{ContentItem, Sitemap, StoredPage};

use super::{Result, SyncClientConfig};

/// Read access to the synced content cache.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Gets the flat sitemap for a channel and language.
    async fn get_sitemap(&self, channel_name: &str, language_code: &str) -> Result<Option<Sitemap>>;

    /// Gets a page by its id.
    async fn get_page(&self, page_id: i64, language_code: &str) -> Result<Option<StoredPage>>;

    /// Gets a single content item by its id.
    async fn get_content_item(
        &self,
        content_id: i64,
        language_code: &str,
    ) -> Result<Option<ContentItem>>;

    /// Gets every item of a content list. A missing list is empty.
    async fn get_content_list(
        &self,
        reference_name: &str,
        language_code: &str,
    ) -> Result<Vec<ContentItem>>;
}

/// A configured handle to the content-sync engine.
#[async_trait]
pub trait SyncClient: Send + Sync {
    /// Refreshes the local cache. May do nothing if it is already current.
    async fn run_sync(&self) -> Result<()>;

    /// The store backed by this client's cache.
    fn store(&self) -> &dyn ContentStore;

    /// The settings this client was built with.
    fn config(&self) -> &SyncClientConfig;
}
