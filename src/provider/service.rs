use super::available::locale_for_tag;
use super::support::is_supported_provider_locale;
use super::tagset::TagSet;
use super::{AdapterType, CapabilityKind};
use crate::locale::Locale;
use serde::Serialize;
use std::sync::Arc;

/// A locale service provider for one capability kind.
///
/// Immutable once built and shared by every caller of the registry.
#[derive(Debug)]
pub struct ServiceProvider {
    kind: CapabilityKind,
    adapter: AdapterType,
    tags: Arc<TagSet>,
}

impl ServiceProvider {
    pub fn new(kind: CapabilityKind, adapter: AdapterType, tags: Arc<TagSet>) -> Self {
        Self {
            kind,
            adapter,
            tags,
        }
    }

    pub fn kind(&self) -> CapabilityKind {
        self.kind
    }

    pub fn adapter_type(&self) -> AdapterType {
        self.adapter
    }

    /// The tag set of this provider's data category.
    pub fn language_tags(&self) -> &Arc<TagSet> {
        &self.tags
    }

    /// Locales this provider declares, sorted and deduplicated by value.
    /// Legacy alias tags map to the same constants as the process-wide list.
    pub fn available_locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.tags.iter().map(|t| locale_for_tag(t)).collect();
        locales.sort();
        locales.dedup();
        locales
    }

    pub fn is_supported_locale(&self, locale: &Locale) -> bool {
        is_supported_provider_locale(locale, &self.tags)
    }

    pub fn summary(&self) -> ProviderSummary {
        let mut tags: Vec<String> = self.tags.iter().cloned().collect();
        tags.sort();

        ProviderSummary {
            kind: self.kind,
            provider: self.kind.provider_name(),
            adapter: self.adapter,
            category: self.kind.category(),
            tags,
        }
    }
}

/// Serializable description of a provider.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderSummary {
    pub kind: CapabilityKind,
    pub provider: &'static str,
    pub adapter: AdapterType,
    pub category: &'static str,
    pub tags: Vec<String>,
}
