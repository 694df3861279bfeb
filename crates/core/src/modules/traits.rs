use async_trait::async_trait;
use serde_json::Value;

use crate::content::{ContentItem, SitemapEntry};
use crate::sync::{ContentStore, Result};

/// Everything a custom-props hook may read.
#[derive(Clone, Copy)]
pub struct CustomPropsContext<'a> {
    /// The module's content item. `None` for shared components like the header.
    pub item: Option<&'a ContentItem>,
    pub store: &'a dyn ContentStore,
    pub language_code: &'a str,
    pub channel_name: &'a str,
    /// The sitemap node of the page being resolved, when there is one.
    pub page_in_sitemap: Option<&'a SitemapEntry>,
}

/// Loads additional data for a module before it is rendered.
#[async_trait]
pub trait CustomPropsHook: Send + Sync {
    /// Returns the data to attach as `customData`, or `None` to attach nothing.
    async fn custom_props(&self, ctx: CustomPropsContext<'_>) -> Result<Option<Value>>;
}
