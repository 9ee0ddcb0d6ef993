//! Process-wide available locales.
//!
//! The list is initialized once per process, so this binary holds a single
//! test that owns the initialization.

use axum::extract::State;
use axum::Json;
use locale_provider_registry::data::{BaseLocaleData, ModuleDescriptor, StaticDiscovery};
use locale_provider_registry::provider::category;
use locale_provider_registry::{server, AdapterType, Locale, LocaleProviderRegistry};
use std::sync::Barrier;

#[tokio::test]
async fn test_available_locales_initialized_once_per_process() {
    const THREADS: usize = 8;
    let registry = LocaleProviderRegistry::builder()
        .base_data(BaseLocaleData::from_map([(
            category::AVAILABLE_LOCALES,
            "en-US ja-JP-JP",
        )]))
        .discovery(StaticDiscovery::empty().with_module(
            ModuleDescriptor::new("extra", AdapterType::Jre)
                .with_tags(category::AVAILABLE_LOCALES, "en-US"),
        ))
        .build();
    let barrier = Barrier::new(THREADS);

    let lists: Vec<&'static [Locale]> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let (registry, barrier) = (&registry, &barrier);
                s.spawn(move || {
                    barrier.wait();
                    registry.available_locales()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // Deduplicated, alias substituted, first-seen order.
    assert_eq!(lists[0], &[Locale::parse("en-US"), Locale::JA_JP_JP][..]);
    assert!(lists.iter().all(|list| std::ptr::eq(*list, lists[0])));

    // Another registry with different data sees the same process-wide list.
    let other = LocaleProviderRegistry::builder()
        .base_data(BaseLocaleData::from_map([(category::AVAILABLE_LOCALES, "fr-FR")]))
        .build();
    assert!(std::ptr::eq(other.available_locales(), lists[0]));

    // And so does the HTTP surface.
    let Json(body) = server::available_locales(State(other)).await;
    assert_eq!(body.count, 2);
    assert!(std::ptr::eq(body.locales, lists[0]));
}
