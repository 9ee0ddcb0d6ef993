//! Tag-set resolution: merges the base dataset's tags for a category with
//! the tags contributed by discovered data modules.

use super::AdapterType;
use crate::data::{BaseDataSource, ModuleDiscovery};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Locale tags supported for one data category.
pub type TagSet = HashSet<String>;

/// Split a whitespace-separated tag string into a set.
pub fn split_tags(tags: &str) -> TagSet {
    tags.split_whitespace().map(str::to_string).collect()
}

/// The collaborators a registry draws tag strings from.
#[derive(Clone)]
pub struct TagSources {
    adapter: AdapterType,
    base: Arc<dyn BaseDataSource>,
    discovery: Arc<dyn ModuleDiscovery>,
}

impl TagSources {
    pub fn new(
        adapter: AdapterType,
        base: Arc<dyn BaseDataSource>,
        discovery: Arc<dyn ModuleDiscovery>,
    ) -> Self {
        Self {
            adapter,
            base,
            discovery,
        }
    }

    pub fn adapter_type(&self) -> AdapterType {
        self.adapter
    }

    /// The combined tag string for `category`: base tags followed by the
    /// non-empty contributions of every discovered module of this adapter
    /// type, space separated.
    ///
    /// `None` only when the base lacks the category and no module
    /// contributes to it.
    pub fn supported_tag_string(&self, category: &str) -> Option<String> {
        let base = self.base.supported_tag_string(category);

        let contributions: Vec<String> = self
            .discovery
            .modules()
            .iter()
            .filter(|module| module.adapter_type() == self.adapter)
            .filter_map(|module| module.available_tags(category))
            .filter(|tags| !tags.trim().is_empty())
            .collect();

        debug!(
            "Resolved tags for {} (base present: {}, contributing modules: {})",
            category,
            base.is_some(),
            contributions.len()
        );

        if contributions.is_empty() {
            return base;
        }

        let extra = contributions.join(" ");
        Some(match base {
            Some(base) => format!("{} {}", base, extra),
            None => extra,
        })
    }

    /// Build the tag set for `category`. Absent data yields an empty set.
    pub fn create_tag_set(&self, category: &str) -> TagSet {
        self.supported_tag_string(category)
            .map(|tags| split_tags(&tags))
            .unwrap_or_default()
    }
}
