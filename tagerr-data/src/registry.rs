//! Concurrent (tag, key) -> value storage

use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;
use tagerr::{Error, Tag};

/// A typed key for tag data.
///
/// The key is the implementing type itself; `Value` is what it stores.
pub trait DataKey: 'static {
    type Value: Send + Sync + 'static;
}

type Slot = Arc<dyn Any + Send + Sync>;

/// Values attached to tags, keyed by [`DataKey`] type.
///
/// Writes to the same (tag, key) pair are last-writer-wins; reads never
/// block on writes to other pairs.
#[derive(Default)]
pub struct Registry {
    entries: DashMap<(Tag, TypeId), Slot>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Associate `value` with `tag` for key `K`
    pub fn set<K: DataKey>(&self, tag: &Tag, value: K::Value) {
        tracing::debug!(
            tag = %tag,
            key = std::any::type_name::<K>(),
            "registered error data"
        );
        self.entries
            .insert((tag.clone(), TypeId::of::<K>()), Arc::new(value));
    }

    /// Remove the value for key `K` from `tag`, returning it
    pub fn remove<K: DataKey>(&self, tag: &Tag) -> Option<Arc<K::Value>> {
        self.entries
            .remove(&(tag.clone(), TypeId::of::<K>()))
            .and_then(|(_, slot)| slot.downcast::<K::Value>().ok())
    }

    /// The value for key `K` on exactly this tag
    pub fn get_for_tag<K: DataKey>(&self, tag: &Tag) -> Option<Arc<K::Value>> {
        let slot = self
            .entries
            .get(&(tag.clone(), TypeId::of::<K>()))
            .map(|entry| Arc::clone(entry.value()))?;
        slot.downcast::<K::Value>().ok()
    }

    /// The value for key `K` from the first tag of `err` that has one.
    ///
    /// Tags are searched most recently applied first.
    pub fn get<K: DataKey>(&self, err: &Error) -> Option<Arc<K::Value>> {
        err.tags().iter().find_map(|tag| self.get_for_tag::<K>(tag))
    }

    /// Number of (tag, key) pairs stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
