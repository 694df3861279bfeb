use async_trait::async_trait;
use serde_json::{json, Value};

use pageprops_core::modules::{CustomPropsContext, CustomPropsHook};
use pageprops_core::sync::Result;

/// Content list holding the site's header item.
const GLOBAL_HEADER_LIST: &str = "globalheader";

/// Shared header data: the header content item and the menu links.
///
/// Runs once per page, independent of the page's zones.
#[derive(Debug, Clone, Copy)]
pub struct GlobalHeader;

#[async_trait]
impl CustomPropsHook for GlobalHeader {
    async fn custom_props(&self, ctx: CustomPropsContext<'_>) -> Result<Option<Value>> {
        let header = ctx
            .store
            .get_content_list(GLOBAL_HEADER_LIST, ctx.language_code)
            .await?
            .into_iter()
            .next();

        if header.is_none() {
            tracing::warn!(list = GLOBAL_HEADER_LIST, "Global header item not found");
        }

        let links: Vec<Value> = ctx
            .store
            .get_sitemap(ctx.channel_name, ctx.language_code)
            .await?
            .map(|sitemap| {
                sitemap
                    .iter()
                    .filter(|(_, node)| node.visible.menu)
                    .map(|(path, node)| {
                        json!({
                            "path": path,
                            "menuText": node.menu_text.as_deref().or(node.title.as_deref()),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Some(json!({
            "globalHeader": header,
            "links": links,
        })))
    }
}

#[cfg(test)]
mod tests {
    use pageprops_core::content::{ContentItem, Sitemap, SitemapEntry, Visibility};
    use pageprops_core::sync::SyncMode;

    use super::*;
    use crate::sync::{InMemoryContent, InMemorySyncFactory, SyncClientFactory};

    fn node(id: i64, menu: bool, menu_text: &str) -> SitemapEntry {
        let mut entry = SitemapEntry::new(id);
        entry.visible = Visibility {
            menu,
            sitemap: true,
        };
        entry.menu_text = Some(menu_text.to_string());
        entry
    }

    async fn run(content: InMemoryContent) -> Value {
        let factory = InMemorySyncFactory::shared(content);
        let client = factory.client(SyncMode::Live, "key");
        let ctx = CustomPropsContext {
            item: None,
            store: client.store(),
            language_code: "en-us",
            channel_name: "website",
            page_in_sitemap: None,
        };
        GlobalHeader.custom_props(ctx).await.unwrap().unwrap()
    }

    #[tokio::test]
    async fn test_header_and_menu_links() {
        let sitemap = Sitemap::from([
            ("/home".to_string(), node(1, true, "Home")),
            ("/hidden".to_string(), node(2, false, "Hidden")),
            ("/blog".to_string(), node(3, true, "Blog")),
        ]);

        let mut header = ContentItem {
            content_id: Some(100),
            ..Default::default()
        };
        header
            .fields
            .insert("siteName".to_string(), json!("Example"));

        let content = InMemoryContent::new()
            .with_sitemap("website", "en-us", sitemap)
            .with_list("globalheader", "en-us", vec![header]);
        let data = run(content).await;

        assert_eq!(data["globalHeader"]["fields"]["siteName"], "Example");
        let links = data["links"].as_array().unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], json!({"path": "/home", "menuText": "Home"}));
        assert_eq!(links[1]["path"], "/blog");
    }

    #[tokio::test]
    async fn test_menu_text_falls_back_to_title() {
        let mut titled = node(1, true, "unused");
        titled.menu_text = None;
        titled.title = Some("Blog".to_string());

        let mut bare = node(2, true, "unused");
        bare.menu_text = None;

        let sitemap = Sitemap::from([("/blog".to_string(), titled), ("/bare".to_string(), bare)]);
        let content = InMemoryContent::new()
            .with_sitemap("website", "en-us", sitemap);

        let data = run(content).await;

        let links = data["links"].as_array().unwrap();
        assert_eq!(links[0], json!({"path": "/blog", "menuText": "Blog"}));
        assert_eq!(links[1]["path"], "/bare");
        assert!(links[1]["menuText"].is_null());
        assert!(links[1].as_object().unwrap().contains_key("menuText"));
    }

    #[tokio::test]
    async fn test_missing_header_content() {
        let data = run(InMemoryContent::new()).await;
        assert!(data["globalHeader"].is_null());
        assert_eq!(data["links"], json!([]));
    }
}
