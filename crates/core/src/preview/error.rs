use thiserror::Error;

/// Reasons a preview request is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("Missing agilitypreviewkey.")]
    MissingKey,

    #[error("Invalid agilitypreviewkey.")]
    InvalidKey,

    #[error("Invalid page. '{0}' was not found in the sitemap.")]
    InvalidSlug(String),

    #[error("Could not load the sitemap: {0}")]
    SitemapUnavailable(String),
}

/// Result type for preview validation.
pub type Result<T> = std::result::Result<T, PreviewError>;
