//! Primary key → value map with an attached value index
//!
//! # Design
//!
//! - FxHashMap: O(1) lookups, fast non-crypto hash
//! - Every write goes through [`KeySpace::put`] or [`KeySpace::delete`],
//!   which update the [`ValueIndex`] in the same call
//!
//! There is no other way to reach the primary map mutably, so the index
//! cannot drift from the data.

use crate::index::ValueIndex;
use rustc_hash::FxHashMap;
use tallykv_core::{Key, Value};

/// Primary store plus its value index
///
/// Two keyspaces compare equal when they hold the same entries; the index
/// is derived from the entries, so it compares equal as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySpace {
    data: FxHashMap<Key, Value>,
    index: ValueIndex,
}

impl KeySpace {
    /// Create an empty keyspace
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keyspace with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            index: ValueIndex::new(),
        }
    }

    /// Get the current value of a key
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Check if a key is present
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Write `value` under `key`, returning the previous value
    ///
    /// The index entry for the previous value is removed before the entry
    /// for the new value is added.
    pub fn put(&mut self, key: Key, value: Value) -> Option<Value> {
        if let Some(previous) = self.data.get(key.as_str()) {
            self.index.remove(&key, previous);
        }
        self.index.insert(&key, &value);
        self.data.insert(key, value)
    }

    /// Remove a key, returning the value it held
    pub fn delete(&mut self, key: &str) -> Option<Value> {
        let (key, value) = self.data.remove_entry(key)?;
        self.index.remove(&key, &value);
        Some(value)
    }

    /// Number of keys holding `value`
    #[inline]
    pub fn count(&self, value: &str) -> usize {
        self.index.count(value)
    }

    /// Keys holding `value`, sorted so output is stable
    pub fn find(&self, value: &str) -> Vec<Key> {
        let mut keys: Vec<Key> = self.index.keys(value).cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Number of keys present
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if no key is present
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over all entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> + '_ {
        self.data.iter()
    }

    /// Read-only access to the value index
    pub fn index(&self) -> &ValueIndex {
        &self.index
    }

    /// Compare the live index against one rebuilt from a full scan
    pub fn index_is_consistent(&self) -> bool {
        ValueIndex::from_entries(self.data.iter()) == self.index
    }
}
