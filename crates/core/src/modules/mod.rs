//! Module renderers and their optional data hooks.
//!
//! Every module type a page can place in a zone is registered up front with a
//! [`ModuleDescriptor`]. Whether a module needs extra data is part of its
//! descriptor, not something discovered at render time.

mod registry;
mod traits;

pub use registry::{ModuleDescriptor, ModuleRegistry};
pub use traits::{CustomPropsContext, CustomPropsHook};
