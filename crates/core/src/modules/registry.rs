use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::CustomPropsHook;

/// A renderable module type.
#[derive(Clone)]
pub struct ModuleDescriptor {
    name: String,
    custom_props: Option<Arc<dyn CustomPropsHook>>,
}

impl ModuleDescriptor {
    /// A module rendered from its content item alone.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            custom_props: None,
        }
    }

    /// Attaches a hook that loads extra data before rendering.
    pub fn with_custom_props(mut self, hook: impl CustomPropsHook + 'static) -> Self {
        self.custom_props = Some(Arc::new(hook));
        self
    }

    pub fn custom_props(&self) -> Option<&dyn CustomPropsHook> {
        self.custom_props.as_deref()
    }
}

impl fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("name", &self.name)
            .field("custom_props", &self.custom_props.is_some())
            .finish()
    }
}

/// Name-indexed lookup of module types.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, ModuleDescriptor>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a module type, returning the descriptor it replaced.
    pub fn register(&mut self, descriptor: ModuleDescriptor) -> Option<ModuleDescriptor> {
        self.modules.insert(descriptor.name.clone(), descriptor)
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, descriptor: ModuleDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    /// Looks up a module type by exact name.
    pub fn resolve(&self, name: &str) -> Option<&ModuleDescriptor> {
        self.modules.get(name)
    }

    /// Registered module names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
