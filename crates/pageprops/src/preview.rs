//! Preview request validation.

use std::sync::Arc;

use pageprops_core::paths::ROOT_PATH;
use pageprops_core::preview::{
    generate_preview_key, validate_preview_key, PreviewError, PreviewValidation, Result,
};
use pageprops_core::sync::SyncMode;

use crate::config::Config;
use crate::sync::SyncClientFactory;

/// How preview slugs are checked once the key is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugPolicy {
    /// Any slug is accepted.
    AllowAll,
    /// The slug must be a sitemap path (or `/`), checked against fresh
    /// preview content.
    RequireSitemapEntry,
}

/// Validates preview requests against the derived preview key.
pub struct PreviewValidator {
    config: Arc<Config>,
    factory: Arc<dyn SyncClientFactory>,
    preview_key: String,
    slug_policy: SlugPolicy,
}

impl PreviewValidator {
    pub fn new(config: Arc<Config>, factory: Arc<dyn SyncClientFactory>) -> Self {
        let preview_key = generate_preview_key(&config.security_key);
        let slug_policy = if config.validate_preview_slug {
            SlugPolicy::RequireSitemapEntry
        } else {
            SlugPolicy::AllowAll
        };

        Self {
            config,
            factory,
            preview_key,
            slug_policy,
        }
    }

    pub fn slug_policy(&self) -> SlugPolicy {
        self.slug_policy
    }

    /// Checks a preview request. Rejections are returned, never raised.
    pub async fn validate(&self, preview_key: Option<&str>, slug: &str) -> PreviewValidation {
        let result = self.check(preview_key, slug).await;
        if let Err(e) = &result {
            tracing::warn!(slug = %slug, error = %e, "Preview request rejected");
        }
        result.into()
    }

    async fn check(&self, preview_key: Option<&str>, slug: &str) -> Result<()> {
        validate_preview_key(preview_key, &self.preview_key)?;
        self.validate_slug(slug).await
    }

    /// Checks that a slug may be previewed, per the slug policy.
    pub async fn validate_slug(&self, slug: &str) -> Result<()> {
        match self.slug_policy {
            SlugPolicy::AllowAll => Ok(()),
            SlugPolicy::RequireSitemapEntry => self.require_sitemap_entry(slug).await,
        }
    }

    async fn require_sitemap_entry(&self, slug: &str) -> Result<()> {
        let client = self
            .factory
            .client(SyncMode::Preview, self.config.api_key(true));

        let unavailable = |e: pageprops_core::sync::SyncError| {
            PreviewError::SitemapUnavailable(e.to_string())
        };

        client.run_sync().await.map_err(unavailable)?;
        let sitemap = client
            .store()
            .get_sitemap(&self.config.channel_name, &self.config.language_code)
            .await
            .map_err(unavailable)?;

        let found = sitemap.is_some_and(|sitemap| sitemap.contains_key(slug));
        if !found && slug != ROOT_PATH {
            return Err(PreviewError::InvalidSlug(slug.to_string()));
        }

        Ok(())
    }
}
