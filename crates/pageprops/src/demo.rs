//! Sample site served by `--demo`.
//!
//! A home page, a blog listing and two dynamic post pages. Preview content
//! holds an extra draft page that live content does not.

use serde_json::{json, Map, Value};

use pageprops_core::content::{
    ContentItem, IndexMap, ModuleItem, Page, Sitemap, SitemapEntry, StoredPage, Visibility,
};

use crate::sync::{InMemoryContent, InMemorySyncFactory};

const LANGUAGE: &str = "en-us";
const CHANNEL: &str = "website";

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn item(content_id: i64, value: Value) -> ContentItem {
    ContentItem {
        content_id: Some(content_id),
        fields: fields(value),
        ..Default::default()
    }
}

fn node(page_id: i64, title: &str, path: &str, menu: bool) -> SitemapEntry {
    let mut entry = SitemapEntry::new(page_id);
    entry.title = Some(title.to_string());
    entry.menu_text = Some(title.to_string());
    entry.path = Some(path.to_string());
    entry.visible = Visibility {
        menu,
        sitemap: true,
    };
    entry
}

fn page(page_id: i64, title: &str, template: &str, modules: Vec<ModuleItem>) -> StoredPage {
    Page {
        page_id,
        name: Some(title.to_lowercase()),
        title: Some(title.to_string()),
        menu_text: Some(title.to_string()),
        template_name: template.to_string(),
        zones: IndexMap::from([("MainContentZone".to_string(), modules)]),
        metadata: Map::new(),
    }
}

fn module(name: &str, item: ContentItem) -> ModuleItem {
    ModuleItem {
        module: name.to_string(),
        item,
    }
}

fn posts() -> Vec<ContentItem> {
    vec![
        item(
            101,
            json!({"title": "Hello, world", "slug": "hello-world", "date": "2026-01-12"}),
        ),
        item(
            102,
            json!({"title": "Second post", "slug": "second-post", "date": "2026-02-03"}),
        ),
    ]
}

fn live_sitemap() -> Sitemap {
    let mut sitemap = Sitemap::new();
    for (page_id, title, path) in [(1, "Home", "/home"), (2, "Blog", "/blog")] {
        let entry = node(page_id, title, path, true);
        sitemap.insert(path.to_string(), entry);
    }

    for post in posts() {
        let slug = post.field_str("slug").unwrap_or_default();
        let path = format!("/blog/{slug}");
        let title = post.field_str("title").unwrap_or_default();
        let mut entry = node(3, title, &path, false);
        entry.content_id = post.content_id;
        sitemap.insert(path, entry);
    }

    sitemap
}

fn live_content() -> InMemoryContent {
    let hero = json!({
        "heading": "Welcome",
        "cta": {"href": "/blog", "text": "Read the blog"}
    });
    let intro = json!({"textblob": "<p>A demo site.</p>"});
    let home = page(
        1,
        "Home",
        "One Column Template",
        vec![
            module("Hero", item(10, hero)),
            module("RichTextArea", item(11, intro)),
        ],
    );
    let blog = page(
        2,
        "Blog",
        "One Column Template",
        vec![module(
            "PostsListing",
            item(12, json!({"posts": {"referencename": "posts"}})),
        )],
    );
    let post = page(
        3,
        "Post",
        "Post Details Template",
        vec![module("PostDetails", item(13, json!({})))],
    );

    let mut content = InMemoryContent::new()
        .with_sitemap(CHANNEL, LANGUAGE, live_sitemap())
        .with_page(LANGUAGE, home)
        .with_page(LANGUAGE, blog)
        .with_page(LANGUAGE, post)
        .with_list("posts", LANGUAGE, posts())
        .with_list(
            "globalheader",
            LANGUAGE,
            vec![item(1, json!({"siteName": "Demo Site"}))],
        );

    for post in posts() {
        content = content.with_item(LANGUAGE, post);
    }
    content
}

fn preview_content() -> InMemoryContent {
    let mut sitemap = live_sitemap();
    let draft_node = node(4, "Draft", "/draft", true);
    sitemap.insert("/draft".to_string(), draft_node);

    let draft = page(
        4,
        "Draft",
        "One Column Template",
        vec![module(
            "RichTextArea",
            item(14, json!({"textblob": "<p>Not published yet.</p>"})),
        )],
    );

    live_content()
        .with_sitemap(CHANNEL, LANGUAGE, sitemap)
        .with_page(LANGUAGE, draft)
}

/// Sync factory over the sample site.
pub fn demo_factory() -> InMemorySyncFactory {
    InMemorySyncFactory::new(preview_content(), live_content())
}

#[cfg(test)]
mod tests {
    use pageprops_core::sync::SyncMode;

    use super::*;
    use crate::sync::SyncClientFactory;

    #[tokio::test]
    async fn test_live_sitemap_paths() {
        let client = demo_factory().client(SyncMode::Live, "key");
        let sitemap = client.store().get_sitemap(CHANNEL, LANGUAGE).await;
        let sitemap = sitemap.unwrap().unwrap();
        let paths: Vec<&str> = sitemap.keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            vec!["/home", "/blog", "/blog/hello-world", "/blog/second-post"]
        );
        let second = sitemap.get("/blog/second-post").unwrap();
        assert_eq!(second.content_id, Some(102));
    }

    #[tokio::test]
    async fn test_draft_only_in_preview() {
        let factory = demo_factory();
        let preview = factory.client(SyncMode::Preview, "key");
        let live = factory.client(SyncMode::Live, "key");

        let preview_map = preview.store().get_sitemap(CHANNEL, LANGUAGE).await;
        let live_map = live.store().get_sitemap(CHANNEL, LANGUAGE).await;
        assert!(preview_map.unwrap().unwrap().contains_key("/draft"));
        assert!(!live_map.unwrap().unwrap().contains_key("/draft"));

        let preview_draft = preview.store().get_page(4, LANGUAGE).await;
        let live_draft = live.store().get_page(4, LANGUAGE).await;
        assert!(preview_draft.unwrap().is_some());
        assert!(live_draft.unwrap().is_none());
    }
}
