//! Content shapes produced by the sync store and consumed by renderers.
//!
//! Sitemaps and page zones arrive as JSON objects whose key order carries
//! meaning: the first sitemap entry is the home page, and zones render in the
//! order the CMS lists them. Both are held in an [`IndexMap`] so that order
//! survives a deserialize/serialize cycle.

mod types;

pub use indexmap::IndexMap;
pub use types::{
    ContentItem, ModuleItem, Page, PageProps, ResolvedPage, Sitemap, SitemapEntry, StoredPage,
    Visibility, ZoneModule,
};
