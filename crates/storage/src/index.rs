//! Reverse index from value to the keys holding it
//!
//! Two maps are kept side by side:
//! - `counts`: value → number of keys holding it
//! - `members`: value → set of keys holding it
//!
//! A value is present in both maps or in neither. Counts are always equal
//! to the size of the member set and are never zero: the entry is dropped
//! the moment the last key leaves.

use rustc_hash::{FxHashMap, FxHashSet};
use tallykv_core::{Key, Value};

/// Value → keys reverse index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueIndex {
    counts: FxHashMap<Value, usize>,
    members: FxHashMap<Value, FxHashSet<Key>>,
}

impl ValueIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a scan of `(key, value)` pairs
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a Key, &'a Value)>,
    {
        let mut index = Self::new();
        for (key, value) in entries {
            index.insert(key, value);
        }
        index
    }

    /// Record that `key` now holds `value`
    ///
    /// Returns `false` if the pair was already indexed, in which case the
    /// count is left untouched.
    pub fn insert(&mut self, key: &Key, value: &Value) -> bool {
        let inserted = self
            .members
            .entry(value.clone())
            .or_default()
            .insert(key.clone());
        if inserted {
            *self.counts.entry(value.clone()).or_insert(0) += 1;
        }
        inserted
    }

    /// Record that `key` no longer holds `value`
    ///
    /// Returns `false` if the pair was not indexed.
    pub fn remove(&mut self, key: &Key, value: &Value) -> bool {
        let Some(keys) = self.members.get_mut(value.as_str()) else {
            return false;
        };
        if !keys.remove(key.as_str()) {
            return false;
        }
        if keys.is_empty() {
            self.members.remove(value.as_str());
        }

        match self.counts.get_mut(value.as_str()) {
            Some(count) if *count > 1 => *count -= 1,
            _ => {
                self.counts.remove(value.as_str());
            }
        }
        true
    }

    /// Number of keys holding `value` (0 if none)
    #[inline]
    pub fn count(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Keys holding `value`, in no particular order
    pub fn keys(&self, value: &str) -> impl Iterator<Item = &Key> + '_ {
        self.members.get(value).into_iter().flatten()
    }

    /// Number of distinct values currently indexed
    pub fn distinct_values(&self) -> usize {
        self.counts.len()
    }

    /// Check if no value is indexed
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
