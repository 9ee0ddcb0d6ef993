//! Compute-then-publish caches.
//!
//! Values are built outside any lock and then published only if nobody else
//! published first. Under a first-access race the build may run more than
//! once, but every caller receives the single published value. Builders must
//! therefore be free of side effects.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::OnceLock;

/// How a lookup was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The value was already published.
    Hit,
    /// This caller built the value and published it.
    Published,
    /// This caller built a value but lost the race; its value was dropped.
    Discarded,
}

/// A concurrent map whose entries are published at most once and never
/// replaced or evicted.
#[derive(Debug)]
pub struct PublishMap<K: Eq + Hash, V> {
    entries: DashMap<K, V>,
}

impl<K: Eq + Hash, V> Default for PublishMap<K, V> {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl<K, V> PublishMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// The published value for `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Return the published value for `key`, building and publishing one if
    /// the key is absent.
    pub fn get_or_publish<Q, F>(&self, key: &Q, build: F) -> (V, Outcome)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(key) {
            return (value, Outcome::Hit);
        }

        // No shard lock is held while building.
        let built = build();

        match self.entries.entry(key.to_owned()) {
            Entry::Occupied(entry) => (entry.get().clone(), Outcome::Discarded),
            Entry::Vacant(entry) => {
                let published = entry.insert(built);
                (published.value().clone(), Outcome::Published)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A single slot with the same publish-once semantics as [`PublishMap`].
#[derive(Debug)]
pub struct PublishCell<V> {
    slot: OnceLock<V>,
}

impl<V> Default for PublishCell<V> {
    fn default() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }
}

impl<V: Clone> PublishCell<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<V> {
        self.slot.get().cloned()
    }

    /// Return the published value, building and publishing one if the slot
    /// is empty.
    pub fn get_or_publish<F>(&self, build: F) -> (V, Outcome)
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.slot.get() {
            return (value.clone(), Outcome::Hit);
        }

        let built = build();

        // Publishing only moves the prebuilt value in.
        let mut published = false;
        let value = self.slot.get_or_init(|| {
            published = true;
            built
        });

        let outcome = if published {
            Outcome::Published
        } else {
            Outcome::Discarded
        };
        (value.clone(), outcome)
    }
}
