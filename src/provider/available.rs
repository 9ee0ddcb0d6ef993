//! Process-wide list of available locales.
//!
//! Resolved from the `AvailableLocales` category exactly once for the whole
//! process and never rebuilt or torn down.

use super::category::AVAILABLE_LOCALES;
use super::tagset::TagSources;
use crate::error::RegistryError;
use crate::locale::Locale;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::info;

static AVAILABLE: OnceLock<Box<[Locale]>> = OnceLock::new();

/// Map a tag to a locale, substituting the three legacy aliases with their
/// canonical constants.
pub(crate) fn locale_for_tag(tag: &str) -> Locale {
    match tag {
        "ja-JP-JP" => Locale::JA_JP_JP,
        "no-NO-NY" => Locale::NO_NO_NY,
        "th-TH-TH" => Locale::TH_TH_TH,
        _ => Locale::parse(tag),
    }
}

/// Compute the available locales from `sources`, bypassing any cache.
///
/// Locales are deduplicated by value, keeping first occurrences in order.
///
/// # Errors
/// Returns [`RegistryError::NoAvailableLocales`] when the category resolves
/// to no tags at all.
pub fn create_available_locales(sources: &TagSources) -> Result<Vec<Locale>, RegistryError> {
    let tags = sources
        .supported_tag_string(AVAILABLE_LOCALES)
        .filter(|tags| !tags.trim().is_empty())
        .ok_or(RegistryError::NoAvailableLocales {
            adapter: sources.adapter_type(),
        })?;

    let mut seen = HashSet::new();
    Ok(tags
        .split_whitespace()
        .map(locale_for_tag)
        .filter(|locale| seen.insert(locale.clone()))
        .collect())
}

/// The process-wide available locales, initialized from `sources` on first
/// use. Later callers get the same slice regardless of their sources.
///
/// # Panics
/// Panics if the first initialization finds no available locales; the
/// locale subsystem cannot operate without any.
pub(crate) fn process_available_locales(sources: &TagSources) -> &'static [Locale] {
    AVAILABLE.get_or_init(|| match create_available_locales(sources) {
        Ok(locales) => {
            info!(
                "Initialized {} available locales for {}",
                locales.len(),
                sources.adapter_type()
            );
            locales.into_boxed_slice()
        }
        Err(e) => panic!("{}", e),
    })
}
