//! Locale provider registry and its caches.
//!
//! # Architecture
//!
//! - `kind`: Closed set of capability kinds and adapter types
//! - `cache`: Compute-then-publish cache primitives shared by every cache
//! - `tagset`: Merges base and discovered tags per data category
//! - `available`: Process-wide available locale list
//! - `support`: Locale support check against a tag set
//! - `service`: Provider instances handed out per capability kind
//! - `resources`: Per-locale resources accessor
//! - `registry`: The registry owning the caches
//! - `metrics`: Cache hit/publish/discard counters
//!
//! # Example
//!
//! ```rust,ignore
//! use locale_provider_registry::{Locale, LocaleProviderRegistry};
//!
//! let registry = LocaleProviderRegistry::builder().build();
//! let collator = registry.collator_provider();
//! assert!(collator.is_supported_locale(&Locale::ROOT));
//! ```

mod available;
mod cache;
mod kind;
mod metrics;
mod registry;
mod resources;
mod service;
mod support;
mod tagset;

pub use available::create_available_locales;
pub use cache::{Outcome, PublishCell, PublishMap};
pub use kind::{category, AdapterType, CapabilityKind};
pub use metrics::{CacheCounters, CacheReport, MetricsReport, RegistryMetrics};
pub use registry::{LocaleProviderRegistry, RegistryBuilder};
pub use resources::LocaleResources;
pub use service::{ProviderSummary, ServiceProvider};
pub use support::is_supported_provider_locale;
pub use tagset::{split_tags, TagSet, TagSources};
