use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use indexmap::IndexMap;

/// Sitemap for a channel and language, keyed by normalized path (`/blog/post`).
pub type Sitemap = IndexMap<String, SitemapEntry>;

/// A page as stored by the sync client, zones still holding raw module items.
pub type StoredPage = Page<ModuleItem>;

/// A page whose zones only contain modules with a resolved renderer.
pub type ResolvedPage = Page<ZoneModule>;

/// Menu and sitemap visibility flags of a sitemap node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    #[serde(default)]
    pub menu: bool,
    #[serde(default)]
    pub sitemap: bool,
}

/// A page stub in the flat sitemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    #[serde(rename = "pageID")]
    pub page_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub menu_text: Option<String>,
    #[serde(default)]
    pub visible: Visibility,
    /// Set on dynamic pages generated from a content list.
    #[serde(rename = "contentID", default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Value>,
    #[serde(default)]
    pub is_folder: bool,
    /// Any other node metadata, passed through untouched.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl SitemapEntry {
    /// Creates a minimal entry for a page id.
    pub fn new(page_id: i64) -> Self {
        Self {
            page_id,
            title: None,
            name: None,
            path: None,
            menu_text: None,
            visible: Visibility::default(),
            content_id: None,
            redirect: None,
            is_folder: false,
            metadata: Map::new(),
        }
    }
}

/// An opaque content item. Only the fields the pipeline touches are typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(rename = "contentID", default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<i64>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub fields: Map<String, Value>,
    /// Data attached by a module's custom-props hook.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<Value>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl ContentItem {
    /// Returns a string field, if present.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// A module placed in a zone, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleItem {
    /// Module type name, used to look up the renderer.
    pub module: String,
    #[serde(default)]
    pub item: ContentItem,
}

/// A module in a resolved zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneModule {
    pub module_name: String,
    pub item: ContentItem,
}

/// A page and its content zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<Z> {
    #[serde(rename = "pageID")]
    pub page_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub menu_text: Option<String>,
    #[serde(default)]
    pub template_name: String,
    #[serde(default = "IndexMap::new")]
    pub zones: IndexMap<String, Vec<Z>>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl<Z> Page<Z> {
    /// Swaps the zones for `zones`, returning the rebuilt page and the old zones.
    pub fn replace_zones<N>(
        self,
        zones: IndexMap<String, Vec<N>>,
    ) -> (Page<N>, IndexMap<String, Vec<Z>>) {
        let page = Page {
            page_id: self.page_id,
            name: self.name,
            title: self.title,
            menu_text: self.menu_text,
            template_name: self.template_name,
            zones,
            metadata: self.metadata,
        };
        (page, self.zones)
    }
}

/// Props handed to the page template renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageProps {
    pub sitemap_node: Option<SitemapEntry>,
    pub page: Option<ResolvedPage>,
    pub page_template_name: Option<String>,
    pub global_header_props: Option<Value>,
    pub language_code: String,
    pub channel_name: String,
    pub is_preview: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_JSON: &str = r#"{
        "pageID": 2,
        "name": "home",
        "title": "Home",
        "menuText": "Home",
        "templateName": "One Column Template",
        "seo": { "metaDescription": "welcome" },
        "zones": {
            "MainContentZone": [
                {
                    "module": "RichTextArea",
                    "item": { "contentID": 10, "fields": { "textblob": "<p>hi</p>" } }
                },
                {
                    "module": "PostsListing",
                    "item": { "contentID": 11, "properties": { "state": 2 } }
                }
            ],
            "Sidebar": []
        }
    }"#;

    #[test]
    fn test_page_deserialize() {
        let page: StoredPage = serde_json::from_str(PAGE_JSON).unwrap();
        assert_eq!(page.page_id, 2);
        assert_eq!(page.template_name, "One Column Template");
        let zone_names: Vec<&str> = page.zones.keys().map(String::as_str).collect();
        assert_eq!(zone_names, vec!["MainContentZone", "Sidebar"]);

        let main = page.zones.get("MainContentZone").unwrap();
        assert_eq!(main[0].module, "RichTextArea");
        assert_eq!(main[0].item.content_id, Some(10));
        assert_eq!(main[0].item.field_str("textblob"), Some("<p>hi</p>"));
        assert!(page.metadata.contains_key("seo"));
    }

    #[test]
    fn test_sitemap_keeps_document_order() {
        let json = r#"{"/zeta": {"pageID": 1}, "/alpha": {"pageID": 2}, "/mid": {"pageID": 3}}"#;
        let sitemap: Sitemap = serde_json::from_str(json).unwrap();
        let paths: Vec<&str> = sitemap.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["/zeta", "/alpha", "/mid"]);
        assert_eq!(sitemap.first().map(|(_, node)| node.page_id), Some(1));

        let json = serde_json::to_string(&sitemap).unwrap();
        let round: Sitemap = serde_json::from_str(&json).unwrap();
        let paths: Vec<&str> = round.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["/zeta", "/alpha", "/mid"]);
    }

    #[test]
    fn test_zones_default_to_empty() {
        let page: StoredPage = serde_json::from_str(r#"{"pageID": 9}"#).unwrap();
        assert!(page.zones.is_empty());
        assert_eq!(page.template_name, "");
    }

    #[test]
    fn test_sitemap_entry_keeps_unknown_metadata() {
        let json = r#"{
            "pageID": 5,
            "title": "Post",
            "path": "/blog/post",
            "contentID": 42,
            "visible": {"menu": true, "sitemap": true},
            "isFolder": false,
            "custom": "x"
        }"#;
        let entry: SitemapEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.page_id, 5);
        assert_eq!(entry.content_id, Some(42));
        assert!(entry.visible.menu);
        assert_eq!(entry.metadata.get("custom"), Some(&Value::from("x")));

        let round = serde_json::to_value(&entry).unwrap();
        assert_eq!(round["custom"], "x");
        assert_eq!(round["pageID"], 5);
    }

    #[test]
    fn test_custom_data_omitted_when_unset() {
        let item = ContentItem {
            content_id: Some(1),
            ..Default::default()
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("customData").is_none());

        let item = ContentItem {
            custom_data: Some(serde_json::json!({"foo": 1})),
            ..item
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["customData"]["foo"], 1);
    }

    #[test]
    fn test_replace_zones_keeps_page_header() {
        let page: StoredPage = serde_json::from_str(PAGE_JSON).unwrap();
        let (resolved, old): (ResolvedPage, _) = page.replace_zones(IndexMap::new());
        assert_eq!(resolved.page_id, 2);
        assert_eq!(resolved.title.as_deref(), Some("Home"));
        assert!(resolved.zones.is_empty());
        assert_eq!(old.len(), 2);
    }

    #[test]
    fn test_page_props_serializes_camel_case() {
        let props = PageProps {
            sitemap_node: None,
            page: None,
            page_template_name: None,
            global_header_props: None,
            language_code: "en-us".to_string(),
            channel_name: "website".to_string(),
            is_preview: true,
        };
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["languageCode"], "en-us");
        assert_eq!(json["channelName"], "website");
        assert_eq!(json["isPreview"], true);
        assert!(json["sitemapNode"].is_null());
        assert!(json["page"].is_null());
    }
}
