use super::BaseDataSource;
use crate::provider::category;
use std::collections::HashMap;

/// Built-in base locale data: the categories shipped with the registry
/// itself, before any data module is installed.
const BUILTIN: &[(&str, &str)] = &[
    (category::FORMAT_DATA, " en en-US "),
    (category::COLLATION_DATA, " "),
    (category::CURRENCY_NAMES, " en-US "),
    (category::LOCALE_NAMES, " en "),
    (category::TIME_ZONE_NAMES, " en "),
    (category::CALENDAR_DATA, " en "),
    (category::AVAILABLE_LOCALES, " en en-US "),
];

/// Base dataset backed by an in-memory category table.
#[derive(Debug, Clone, Default)]
pub struct BaseLocaleData {
    categories: HashMap<String, String>,
}

impl BaseLocaleData {
    /// The built-in table.
    pub fn builtin() -> Self {
        Self::from_map(
            BUILTIN
                .iter()
                .map(|(category, tags)| (category.to_string(), tags.to_string())),
        )
    }

    /// A table with exactly the given categories.
    pub fn from_map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            categories: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl BaseDataSource for BaseLocaleData {
    fn supported_tag_string(&self, category: &str) -> Option<String> {
        self.categories.get(category).cloned()
    }
}
