//! Shared application state.
//!
//! Handlers reach the resolver, the path enumerator and the preview validator
//! through [`AppState`]. All three share one configuration and one sync
//! client factory, so a backend is chosen once at startup.

use std::sync::Arc;

use pageprops_core::modules::{CustomPropsHook, ModuleRegistry};

use crate::{
    config::Config,
    modules::{default_registry, GlobalHeader},
    paths::PathEnumerator,
    preview::PreviewValidator,
    resolver::PagePropsResolver,
    sync::{FileSystemSyncFactory, SyncClientFactory},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: Arc<PagePropsResolver>,
    pub paths: Arc<PathEnumerator>,
    pub preview: Arc<PreviewValidator>,
}

impl AppState {
    pub fn new(
        config: Config,
        factory: Arc<dyn SyncClientFactory>,
        registry: ModuleRegistry,
        global_header: Arc<dyn CustomPropsHook>,
    ) -> Self {
        let config = Arc::new(config);

        Self {
            resolver: Arc::new(PagePropsResolver::new(
                config.clone(),
                factory.clone(),
                Arc::new(registry),
                global_header,
            )),
            paths: Arc::new(PathEnumerator::new(config.clone(), factory.clone())),
            preview: Arc::new(PreviewValidator::new(config.clone(), factory)),
            config,
        }
    }

    /// State with the built-in modules over the given sync backend.
    pub fn with_factory(config: Config, factory: Arc<dyn SyncClientFactory>) -> Self {
        Self::new(config, factory, default_registry(), Arc::new(GlobalHeader))
    }

    /// State reading the file-system cache under `config.cache_root`.
    pub fn from_config(config: Config) -> Self {
        let factory = Arc::new(FileSystemSyncFactory::new(&config));
        Self::with_factory(config, factory)
    }
}
