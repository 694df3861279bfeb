use std::{env, fmt, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
}

/// Application configuration loaded from environment variables.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// CMS instance identifier.
    pub guid: String,
    /// API key for published content.
    pub fetch_api_key: String,
    /// API key for draft content.
    pub preview_api_key: String,
    /// Secret the preview key is derived from.
    pub security_key: String,
    /// Language code to load (default: "en-us")
    pub language_code: String,
    /// Sitemap channel to load (default: "website")
    pub channel_name: String,
    /// Root directory of the sync cache (default: ".cache/content-sync")
    pub cache_root: PathBuf,
    /// Development mode always reads draft content.
    pub dev_mode: bool,
    /// Reject preview requests for slugs missing from the sitemap (default: false)
    pub validate_preview_slug: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AGILITY_GUID` - CMS instance identifier (required)
    /// - `AGILITY_API_FETCH_KEY` - Live API key (required)
    /// - `AGILITY_API_PREVIEW_KEY` - Preview API key (required)
    /// - `AGILITY_SECURITY_KEY` - Preview key secret (required)
    /// - `AGILITY_LOCALES` - Language code (default: "en-us")
    /// - `AGILITY_SITEMAP` - Channel name (default: "website")
    /// - `CONTENT_CACHE_ROOT` - Sync cache root (default: ".cache/content-sync")
    /// - `DEV_MODE` - Set to enable development mode
    /// - `PREVIEW_VALIDATE_SLUG` - "true" or "1" to check preview slugs
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let flag = |name: &str| {
            lookup(name)
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false)
        };

        Ok(Self {
            guid: required("AGILITY_GUID")?,
            fetch_api_key: required("AGILITY_API_FETCH_KEY")?,
            preview_api_key: required("AGILITY_API_PREVIEW_KEY")?,
            security_key: required("AGILITY_SECURITY_KEY")?,
            language_code: lookup("AGILITY_LOCALES")
                .unwrap_or_else(|| "en-us".to_string()),
            channel_name: lookup("AGILITY_SITEMAP")
                .unwrap_or_else(|| "website".to_string()),
            cache_root: lookup("CONTENT_CACHE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".cache/content-sync")),
            dev_mode: lookup("DEV_MODE").is_some(),
            validate_preview_slug: flag("PREVIEW_VALIDATE_SLUG"),
        })
    }

    /// API key for the given preview state.
    pub fn api_key(&self, is_preview: bool) -> &str {
        if is_preview {
            &self.preview_api_key
        } else {
            &self.fetch_api_key
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("guid", &self.guid)
            .field("language_code", &self.language_code)
            .field("channel_name", &self.channel_name)
            .field("cache_root", &self.cache_root)
            .field("dev_mode", &self.dev_mode)
            .field("validate_preview_slug", &self.validate_preview_slug)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        guid: "guid-test".to_string(),
        fetch_api_key: "fetch-key".to_string(),
        preview_api_key: "preview-key".to_string(),
        security_key: "secret".to_string(),
        language_code: "en-us".to_string(),
        channel_name: "website".to_string(),
        cache_root: PathBuf::from("cache"),
        dev_mode: false,
        validate_preview_slug: false,
    }
}
