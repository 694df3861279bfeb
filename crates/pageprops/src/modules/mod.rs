//! Built-in module renderers.
//!
//! The front-end ships one component per module type; this registry mirrors
//! it so the resolver knows which modules can render and which need data.
//! New module types are added here with another `with` call.

mod global_header;
mod posts;

use pageprops_core::modules::{ModuleDescriptor, ModuleRegistry};

pub use global_header::GlobalHeader;
pub use posts::{PostDetails, PostsListing};

/// Registry of every module type the front-end can render.
pub fn default_registry() -> ModuleRegistry {
    let listing = ModuleDescriptor::new("PostsListing")
        .with_custom_props(PostsListing);
    let details = ModuleDescriptor::new("PostDetails")
        .with_custom_props(PostDetails);

    ModuleRegistry::new()
        .with(ModuleDescriptor::new("RichTextArea"))
        .with(ModuleDescriptor::new("Hero"))
        .with(listing)
        .with(details)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_modules() {
        let registry = default_registry();
        assert_eq!(
            registry.names(),
            vec!["Hero", "PostDetails", "PostsListing", "RichTextArea"]
        );

        let rich_text = registry.resolve("RichTextArea").unwrap();
        assert!(rich_text.custom_props().is_none());
        let listing = registry.resolve("PostsListing").unwrap();
        assert!(listing.custom_props().is_some());
    }
}
