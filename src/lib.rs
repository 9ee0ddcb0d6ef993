//! Lazily populated, race-free registry of locale service providers.
//!
//! The registry answers two questions under concurrent access: which
//! provider serves a capability, and whether a locale is supported for a
//! data category. Supported tags come from a base dataset merged with any
//! installed data modules; providers, tag sets and per-locale resources are
//! each built at most once per registry and shared thereafter.

pub mod candidates;
pub mod config;
pub mod data;
pub mod error;
pub mod locale;
pub mod provider;
pub mod server;

pub use candidates::{CandidateLocaleResolver, DefaultCandidates};
pub use error::RegistryError;
pub use locale::Locale;
pub use provider::{
    is_supported_provider_locale, AdapterType, CapabilityKind, LocaleProviderRegistry,
    LocaleResources, ServiceProvider, TagSet,
};
