//! Integration tests for the locale provider registry
//!
//! These tests drive the registry end to end: data modules discovered from
//! descriptor files on disk, merged tag sets, providers, per-locale
//! resources, and concurrent first access from many threads.
//!
//! NOTE: The process-wide available locale list is exercised in its own test
//! binaries (available_locales.rs, available_locales_empty.rs) because it can
//! only be initialized once per process.

use locale_provider_registry::data::{
    BaseLocaleData, DirectoryDiscovery, ModuleDescriptor, StaticDiscovery,
};
use locale_provider_registry::provider::category;
use locale_provider_registry::{AdapterType, CapabilityKind, Locale, LocaleProviderRegistry};
use std::sync::{Arc, Barrier};
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// Write a module descriptor into `dir`.
fn write_module(dir: &TempDir, file: &str, module: &ModuleDescriptor) {
    let json = serde_json::to_string_pretty(module).expect("Failed to serialize descriptor");
    std::fs::write(dir.path().join(file), json).expect("Failed to write descriptor");
}

/// Registry over a small base dataset and the modules found in `dir`.
fn registry_over(dir: &TempDir) -> Arc<LocaleProviderRegistry> {
    LocaleProviderRegistry::builder()
        .base_data(BaseLocaleData::from_map([
            (category::FORMAT_DATA, "a-US b-FR"),
            (category::CURRENCY_NAMES, "en-US"),
        ]))
        .discovery(DirectoryDiscovery::new(dir.path()))
        .build()
}

fn sorted_tags(registry: &LocaleProviderRegistry, category: &str) -> Vec<String> {
    let mut tags: Vec<String> = registry.language_tag_set(category).iter().cloned().collect();
    tags.sort();
    tags
}

// ==================== Discovery Tests ====================

#[test]
fn test_directory_modules_merged_into_tag_sets() {
    let dir = TempDir::new().unwrap();
    write_module(
        &dir,
        "german.json",
        &ModuleDescriptor::new("german", AdapterType::Jre)
            .with_tags(category::FORMAT_DATA, "c-DE")
            .with_tags(category::CALENDAR_DATA, "de-DE"),
    );
    write_module(
        &dir,
        "cldr.json",
        &ModuleDescriptor::new("cldr-only", AdapterType::Cldr)
            .with_tags(category::FORMAT_DATA, "z-ZZ"),
    );

    let registry = registry_over(&dir);

    assert_eq!(
        sorted_tags(&registry, category::FORMAT_DATA),
        vec!["a-US", "b-FR", "c-DE"]
    );
    // Absent from the base dataset, present in a module.
    assert_eq!(sorted_tags(&registry, category::CALENDAR_DATA), vec!["de-DE"]);
    // Absent everywhere.
    assert!(sorted_tags(&registry, category::TIME_ZONE_NAMES).is_empty());
}

#[test]
fn test_tag_sets_not_reread_after_modules_change() {
    let dir = TempDir::new().unwrap();
    write_module(
        &dir,
        "first.json",
        &ModuleDescriptor::new("first", AdapterType::Jre).with_tags(category::FORMAT_DATA, "c-DE"),
    );

    let registry = registry_over(&dir);
    let provider = registry.date_format_provider();

    write_module(
        &dir,
        "second.json",
        &ModuleDescriptor::new("second", AdapterType::Jre)
            .with_tags(category::FORMAT_DATA, "d-IT"),
    );

    assert_eq!(
        sorted_tags(&registry, category::FORMAT_DATA),
        vec!["a-US", "b-FR", "c-DE"]
    );
    assert!(Arc::ptr_eq(&provider, &registry.date_format_provider()));
    assert!(!provider.is_supported_locale(&Locale::parse("d-IT")));

    // A fresh registry sees the new module.
    let fresh = registry_over(&dir);
    assert!(fresh
        .date_format_provider()
        .is_supported_locale(&Locale::parse("d-IT")));
}

// ==================== Provider Tests ====================

#[test]
fn test_providers_answer_support_questions() {
    let dir = TempDir::new().unwrap();
    let registry = registry_over(&dir);

    let currency = registry.currency_name_provider();
    assert!(currency.is_supported_locale(&Locale::parse("en-US")));
    assert!(currency.is_supported_locale(&Locale::parse("en-US-u-cu-usd")));
    assert!(currency.is_supported_locale(&Locale::ROOT));
    assert!(currency.is_supported_locale(&Locale::parse("no-NO-NY")));
    assert!(!currency.is_supported_locale(&Locale::parse("xx-YY")));

    let collator = registry.collator_provider();
    assert!(collator.language_tags().is_empty());
    assert!(!collator.is_supported_locale(&Locale::parse("en-US")));
}

#[test]
fn test_every_kind_concurrently() {
    const THREADS: usize = 8;
    let dir = TempDir::new().unwrap();
    let registry = registry_over(&dir);
    let barrier = Barrier::new(THREADS);

    let per_thread: Vec<Vec<Arc<_>>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let (registry, barrier) = (&registry, &barrier);
                s.spawn(move || {
                    barrier.wait();
                    CapabilityKind::ALL
                        .iter()
                        .map(|kind| registry.provider(*kind))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for providers in &per_thread[1..] {
        for (a, b) in providers.iter().zip(&per_thread[0]) {
            assert!(Arc::ptr_eq(a, b));
        }
    }

    let report = registry.metrics().report();
    assert_eq!(report.providers.published, CapabilityKind::COUNT);
    assert_eq!(
        report.providers.hits + report.providers.published + report.providers.discarded,
        THREADS * CapabilityKind::COUNT
    );
}

// ==================== Locale Resources Tests ====================

#[test]
fn test_resources_shared_across_threads() {
    const THREADS: usize = 8;
    let registry = LocaleProviderRegistry::builder()
        .discovery(StaticDiscovery::empty())
        .build();
    let barrier = Barrier::new(THREADS);
    let locales = ["en-US", "fr-FR", "ja-JP"];

    let per_thread: Vec<Vec<_>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let (registry, barrier) = (&registry, &barrier);
                s.spawn(move || {
                    barrier.wait();
                    locales
                        .iter()
                        .map(|tag| registry.locale_resources(&Locale::parse(tag)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for resources in &per_thread[1..] {
        for (a, b) in resources.iter().zip(&per_thread[0]) {
            assert!(Arc::ptr_eq(a, b));
        }
    }
    assert_eq!(registry.metrics().resources.published(), locales.len());
}

#[test]
fn test_resources_candidate_chain() {
    let registry = LocaleProviderRegistry::builder().build();
    let resources = registry.locale_resources(&Locale::JA_JP_JP);

    let chain = resources.candidate_locales("FormatData").unwrap();
    let tags: Vec<String> = chain.iter().map(Locale::to_language_tag).collect();
    assert_eq!(tags, vec!["ja-JP-JP", "ja-JP", "ja", "und"]);
}
