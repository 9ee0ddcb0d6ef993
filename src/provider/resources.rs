use super::cache::PublishMap;
use super::registry::LocaleProviderRegistry;
use super::support::is_supported_provider_locale;
use crate::locale::Locale;
use std::sync::{Arc, Weak};

/// Per-locale accessor through which providers reach locale data.
///
/// One instance exists per distinct locale per registry. It holds only a
/// weak reference back to the registry so the registry's cache of
/// accessors does not keep the registry alive.
#[derive(Debug)]
pub struct LocaleResources {
    registry: Weak<LocaleProviderRegistry>,
    locale: Locale,
    candidates: PublishMap<String, Arc<[Locale]>>,
}

impl LocaleResources {
    pub(crate) fn new(registry: Weak<LocaleProviderRegistry>, locale: Locale) -> Self {
        Self {
            registry,
            locale,
            candidates: PublishMap::new(),
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The owning registry, unless it has been dropped.
    pub fn registry(&self) -> Option<Arc<LocaleProviderRegistry>> {
        self.registry.upgrade()
    }

    /// Candidate locales for loading bundle `base_name` for this locale,
    /// memoized per base name. `None` once the registry is gone.
    pub fn candidate_locales(&self, base_name: &str) -> Option<Arc<[Locale]>> {
        if let Some(chain) = self.candidates.get(base_name) {
            return Some(chain);
        }

        let registry = self.registry()?;
        let (chain, _) = self.candidates.get_or_publish(base_name, || {
            registry.candidate_locales(base_name, &self.locale).into()
        });
        Some(chain)
    }

    /// Whether this locale is supported for data `category`. `None` once the
    /// registry is gone.
    pub fn is_supported_for(&self, category: &str) -> Option<bool> {
        let registry = self.registry()?;
        let tags = registry.language_tag_set(category);
        Some(is_supported_provider_locale(&self.locale, &tags))
    }
}
