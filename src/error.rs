use crate::provider::AdapterType;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the locale provider registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The `AvailableLocales` category resolved to nothing. Unrecoverable:
    /// the registry cannot serve any locale.
    #[error("No available locales for {adapter}")]
    NoAvailableLocales { adapter: AdapterType },

    /// A capability kind name outside the closed set.
    #[error("Unknown capability kind: '{0}'")]
    UnknownKind(String),

    /// An adapter type name outside the closed set.
    #[error("Unknown adapter type: '{0}'")]
    UnknownAdapter(String),

    /// A data module descriptor on disk could not be read or parsed.
    #[error("Invalid module descriptor {}: {source}", .path.display())]
    ModuleDescriptor {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
