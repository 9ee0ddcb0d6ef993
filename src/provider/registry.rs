//! Locale provider registry.
//!
//! Owns the three lazily populated caches of one adapter: tag sets per data
//! category, one provider per capability kind, and one resources accessor
//! per locale. Every cache publishes a value at most once and never replaces
//! it, so all callers observe the same instance for a given key even when
//! several threads race on first access.

use super::available::process_available_locales;
use super::cache::{Outcome, PublishCell, PublishMap};
use super::metrics::RegistryMetrics;
use super::resources::LocaleResources;
use super::service::ServiceProvider;
use super::support::is_supported_provider_locale;
use super::tagset::{TagSet, TagSources};
use super::{AdapterType, CapabilityKind};
use crate::candidates::{CandidateLocaleResolver, DefaultCandidates};
use crate::data::{BaseDataSource, BaseLocaleData, ModuleDiscovery, StaticDiscovery};
use crate::locale::Locale;
use std::sync::{Arc, Weak};
use tracing::debug;

/// Builder for [`LocaleProviderRegistry`].
///
/// Defaults: JRE adapter, built-in base data, no discovered modules, and the
/// default candidate chain.
pub struct RegistryBuilder {
    adapter: AdapterType,
    base: Arc<dyn BaseDataSource>,
    discovery: Arc<dyn ModuleDiscovery>,
    candidates: Arc<dyn CandidateLocaleResolver>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            adapter: AdapterType::Jre,
            base: Arc::new(BaseLocaleData::builtin()),
            discovery: Arc::new(StaticDiscovery::empty()),
            candidates: Arc::new(DefaultCandidates),
        }
    }
}

impl RegistryBuilder {
    pub fn adapter_type(mut self, adapter: AdapterType) -> Self {
        self.adapter = adapter;
        self
    }

    pub fn base_data(mut self, base: impl BaseDataSource + 'static) -> Self {
        self.base = Arc::new(base);
        self
    }

    pub fn discovery(mut self, discovery: impl ModuleDiscovery + 'static) -> Self {
        self.discovery = Arc::new(discovery);
        self
    }

    pub fn candidates(mut self, candidates: impl CandidateLocaleResolver + 'static) -> Self {
        self.candidates = Arc::new(candidates);
        self
    }

    pub fn build(self) -> Arc<LocaleProviderRegistry> {
        let sources = TagSources::new(self.adapter, self.base, self.discovery);
        Arc::new_cyclic(|this| LocaleProviderRegistry {
            sources,
            candidates: self.candidates,
            tag_sets: PublishMap::new(),
            providers: std::array::from_fn(|_| PublishCell::new()),
            resources: PublishMap::new(),
            metrics: RegistryMetrics::default(),
            this: this.clone(),
        })
    }
}

/// Registry of locale service providers for one adapter type.
pub struct LocaleProviderRegistry {
    sources: TagSources,
    candidates: Arc<dyn CandidateLocaleResolver>,
    tag_sets: PublishMap<String, Arc<TagSet>>,
    providers: [PublishCell<Arc<ServiceProvider>>; CapabilityKind::COUNT],
    resources: PublishMap<Locale, Arc<LocaleResources>>,
    metrics: RegistryMetrics,
    this: Weak<LocaleProviderRegistry>,
}

impl LocaleProviderRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn adapter_type(&self) -> AdapterType {
        self.sources.adapter_type()
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }

    /// Supported tags for data `category`, merged from the base dataset and
    /// discovered modules on first request and cached thereafter.
    pub fn language_tag_set(&self, category: &str) -> Arc<TagSet> {
        let (tags, outcome) = self.tag_sets.get_or_publish(category, || {
            Arc::new(self.sources.create_tag_set(category))
        });
        self.metrics.tag_sets.record(outcome);

        if outcome == Outcome::Published {
            debug!(
                "Published {} tags for {} ({})",
                tags.len(),
                category,
                self.adapter_type()
            );
        }
        tags
    }

    /// The provider for `kind`, built on first request.
    pub fn provider(&self, kind: CapabilityKind) -> Arc<ServiceProvider> {
        let (provider, outcome) = self.providers[kind.index()].get_or_publish(|| {
            Arc::new(ServiceProvider::new(
                kind,
                self.adapter_type(),
                self.language_tag_set(kind.category()),
            ))
        });
        self.metrics.providers.record(outcome);

        match outcome {
            Outcome::Published => debug!("Published {} for {}", kind, self.adapter_type()),
            Outcome::Discarded => debug!("Discarded redundant {} after race", kind),
            Outcome::Hit => {}
        }
        provider
    }

    pub fn break_iterator_provider(&self) -> Arc<ServiceProvider> {
        self.provider(CapabilityKind::BreakIterator)
    }

    pub fn collator_provider(&self) -> Arc<ServiceProvider> {
        self.provider(CapabilityKind::Collator)
    }

    pub fn date_format_provider(&self) -> Arc<ServiceProvider> {
        self.provider(CapabilityKind::DateFormat)
    }

    pub fn date_format_symbols_provider(&self) -> Arc<ServiceProvider> {
        self.provider(CapabilityKind::DateFormatSymbols)
    }

    pub fn decimal_format_symbols_provider(&self) -> Arc<ServiceProvider> {
        self.provider(CapabilityKind::DecimalFormatSymbols)
    }

    pub fn number_format_provider(&self) -> Arc<ServiceProvider> {
        self.provider(CapabilityKind::NumberFormat)
    }

    pub fn currency_name_provider(&self) -> Arc<ServiceProvider> {
        self.provider(CapabilityKind::CurrencyName)
    }

    pub fn locale_name_provider(&self) -> Arc<ServiceProvider> {
        self.provider(CapabilityKind::LocaleName)
    }

    pub fn time_zone_name_provider(&self) -> Arc<ServiceProvider> {
        self.provider(CapabilityKind::TimeZoneName)
    }

    pub fn calendar_data_provider(&self) -> Arc<ServiceProvider> {
        self.provider(CapabilityKind::CalendarData)
    }

    pub fn calendar_name_provider(&self) -> Arc<ServiceProvider> {
        self.provider(CapabilityKind::CalendarName)
    }

    pub fn calendar_provider(&self) -> Arc<ServiceProvider> {
        self.provider(CapabilityKind::Calendar)
    }

    pub fn date_time_pattern_provider(&self) -> Arc<ServiceProvider> {
        self.provider(CapabilityKind::DateTimePattern)
    }

    /// The resources accessor for `locale`, built on first request and kept
    /// for the registry's lifetime.
    pub fn locale_resources(&self, locale: &Locale) -> Arc<LocaleResources> {
        let (resources, outcome) = self.resources.get_or_publish(locale, || {
            Arc::new(LocaleResources::new(self.this.clone(), locale.clone()))
        });
        self.metrics.resources.record(outcome);
        resources
    }

    /// Locales available in this process.
    ///
    /// Computed once for the whole process by the first registry that asks;
    /// every later call, from any registry, returns the same slice.
    ///
    /// # Panics
    /// Panics on first use if no available locales can be resolved.
    pub fn available_locales(&self) -> &'static [Locale] {
        process_available_locales(&self.sources)
    }

    /// Whether `locale` is supported by `tags`. See
    /// [`is_supported_provider_locale`].
    pub fn is_supported_provider_locale(&self, locale: &Locale, tags: &TagSet) -> bool {
        is_supported_provider_locale(locale, tags)
    }

    /// Candidate locales for loading `base_name`, delegated to the
    /// configured resolver.
    pub fn candidate_locales(&self, base_name: &str, locale: &Locale) -> Vec<Locale> {
        self.candidates.candidate_locales(base_name, locale)
    }
}
