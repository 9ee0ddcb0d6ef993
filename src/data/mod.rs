//! Collaborators that supply supported-locale tag strings.
//!
//! The registry never reads locale data itself. It asks a [`BaseDataSource`]
//! for the authoritative base tags of a category and a [`ModuleDiscovery`]
//! for any additional data modules installed alongside it.

mod base;
mod discovery;

pub use base::BaseLocaleData;
pub use discovery::{DirectoryDiscovery, ModuleDescriptor, StaticDiscovery};

use crate::provider::AdapterType;
use std::sync::Arc;

/// Authoritative base dataset, always consulted first.
pub trait BaseDataSource: Send + Sync {
    /// Whitespace-separated tags supported for `category`, if the base
    /// dataset knows the category at all.
    fn supported_tag_string(&self, category: &str) -> Option<String>;
}

/// An installed data module contributing extra locales.
pub trait DataModule: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// The adapter type this module's data belongs to.
    fn adapter_type(&self) -> AdapterType;

    /// Whitespace-separated tags this module adds for `category`.
    fn available_tags(&self, category: &str) -> Option<String>;
}

/// Enumerates installed data modules.
pub trait ModuleDiscovery: Send + Sync {
    fn modules(&self) -> Vec<Arc<dyn DataModule>>;
}
