//! Page-props resolution.
//!
//! Turns a request path into the props a page template renders with:
//! sitemap lookup, page fetch, per-module data hooks, then the shared header.
//! Missing content degrades the result and is logged; failures of the sync
//! client, the store or a hook are returned to the caller.

use std::sync::Arc;

use pageprops_core::content::{
    IndexMap, ModuleItem, PageProps, ResolvedPage, SitemapEntry, StoredPage, ZoneModule,
};
use pageprops_core::modules::{CustomPropsContext, CustomPropsHook, ModuleRegistry};
use pageprops_core::paths::{build_request_path, sanitize_template_name, ROOT_PATH};
use pageprops_core::sync::{ContentStore, Result, SyncMode};

use crate::config::Config;
use crate::sync::SyncClientFactory;

/// A page request: the catch-all slug and whether preview was asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub slug: Option<Vec<String>>,
    pub preview: bool,
}

/// Resolves page requests into [`PageProps`].
pub struct PagePropsResolver {
    config: Arc<Config>,
    factory: Arc<dyn SyncClientFactory>,
    registry: Arc<ModuleRegistry>,
    global_header: Arc<dyn CustomPropsHook>,
}

impl PagePropsResolver {
    pub fn new(
        config: Arc<Config>,
        factory: Arc<dyn SyncClientFactory>,
        registry: Arc<ModuleRegistry>,
        global_header: Arc<dyn CustomPropsHook>,
    ) -> Self {
        Self {
            config,
            factory,
            registry,
            global_header,
        }
    }

    /// Module types this resolver can render.
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Resolves the props for a request.
    ///
    /// Preview requests, and every request in development mode, sync before
    /// reading so drafts are current. Live requests read the cache as is.
    pub async fn resolve(&self, request: &PageRequest) -> Result<PageProps> {
        let is_preview = request.preview || self.config.dev_mode;
        let mode = SyncMode::from_preview(is_preview);
        let client = self.factory.client(mode, self.config.api_key(is_preview));

        let path = build_request_path(request.slug.as_deref());

        if is_preview {
            tracing::info!(mode = %mode, "Syncing content");
            client.run_sync().await?;
        }

        tracing::info!(path = %path, "Getting page props");

        let store = client.store();
        let language_code = self.config.language_code.as_str();
        let channel_name = self.config.channel_name.as_str();

        let sitemap = match store.get_sitemap(channel_name, language_code).await? {
            Some(sitemap) => sitemap,
            None => {
                tracing::error!(
                    channel = %channel_name,
                    language = %language_code,
                    "Sitemap not found"
                );
                IndexMap::new()
            }
        };

        // `/` is the first page of the sitemap, not a dedicated entry.
        let page_in_sitemap = if path == ROOT_PATH {
            sitemap.first().map(|(_, node)| node.clone())
        } else {
            sitemap.get(&path).cloned()
        };

        let page = match &page_in_sitemap {
            Some(node) => {
                let page = store.get_page(node.page_id, language_code).await?;
                if page.is_none() {
                    tracing::error!(
                        path = %path,
                        page_id = node.page_id,
                        "Page not found in store"
                    );
                }
                page
            }
            None => {
                tracing::error!(path = %path, "Page not found in sitemap");
                None
            }
        };

        let (page, page_template_name) = match page {
            Some(page) => {
                let template_name = sanitize_template_name(&page.template_name);
                let page = self
                    .resolve_zones(page, store, page_in_sitemap.as_ref())
                    .await?;
                (Some(page), Some(template_name))
            }
            None => (None, None),
        };

        let global_header_props = self
            .global_header
            .custom_props(CustomPropsContext {
                item: None,
                store,
                language_code,
                channel_name,
                page_in_sitemap: None,
            })
            .await?;

        Ok(PageProps {
            sitemap_node: page_in_sitemap,
            page,
            page_template_name,
            global_header_props,
            language_code: self.config.language_code.clone(),
            channel_name: self.config.channel_name.clone(),
            is_preview: request.preview,
        })
    }

    /// Rewrites every zone to the modules that have a renderer, in order,
    /// attaching hook data as `customData`.
    async fn resolve_zones(
        &self,
        page: StoredPage,
        store: &dyn ContentStore,
        page_in_sitemap: Option<&SitemapEntry>,
    ) -> Result<ResolvedPage> {
        let (mut resolved, zones) = page.replace_zones(IndexMap::new());

        for (zone_name, modules) in zones {
            let mut rendered = Vec::with_capacity(modules.len());

            for ModuleItem { module, mut item } in modules {
                let Some(descriptor) = self.registry.resolve(&module) else {
                    tracing::error!(
                        module = %module,
                        zone = %zone_name,
                        "No renderer found for module, cannot render"
                    );
                    continue;
                };

                if let Some(hook) = descriptor.custom_props() {
                    tracing::debug!(module = %module, "Fetching custom props");
                    let data = hook
                        .custom_props(CustomPropsContext {
                            item: Some(&item),
                            store,
                            language_code: &self.config.language_code,
                            channel_name: &self.config.channel_name,
                            page_in_sitemap,
                        })
                        .await?;

                    if let Some(data) = data.filter(|data| !data.is_null()) {
                        item.custom_data = Some(data);
                    }
                }

                rendered.push(ZoneModule {
                    module_name: module,
                    item,
                });
            }

            resolved.zones.insert(zone_name, rendered);
        }

        Ok(resolved)
    }
}
