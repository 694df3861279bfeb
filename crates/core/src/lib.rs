//! Pure page-props logic - no I/O, no runtime.
//!
//! This crate provides:
//! - Content types produced by the sync store (sitemap, pages, zones)
//! - The `PageProps` shape handed to template renderers
//! - Request path and template name helpers
//! - Preview key derivation and validation
//! - Traits for the sync client, the content store and module hooks
//!
//! # Example
//!
//! ```
//! use pageprops_core::paths::{build_request_path, sanitize_template_name};
//! use pageprops_core::preview::{validate_preview_key, generate_preview_key};
//!
//! assert_eq!(build_request_path(None), "/");
//! assert_eq!(sanitize_template_name("Blog-Post!"), "BlogPost");
//!
//! let key = generate_preview_key("secret");
//! assert!(validate_preview_key(Some(&key), &key).is_ok());
//! ```

pub mod content;
pub mod modules;
pub mod paths;
pub mod preview;
pub mod sync;
