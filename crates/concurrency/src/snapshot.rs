//! Per-transaction undo log
//!
//! A [`Snapshot`] maps each key touched during one transaction to the value
//! the key held just before that transaction began (`None` if the key did
//! not exist). Only the first touch is recorded; later writes to the same
//! key inside the same transaction leave the entry alone.

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use tallykv_core::{Key, Value};

/// First-touch log of prior values for one open transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    prior: FxHashMap<Key, Option<Value>>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `current` as the prior value of `key`, unless already touched
    ///
    /// Returns `true` if this was the first touch.
    pub fn record(&mut self, key: &str, current: Option<&Value>) -> bool {
        if self.prior.contains_key(key) {
            return false;
        }
        self.prior.insert(Key::from(key), current.cloned());
        true
    }

    /// Check if `key` has been touched in this transaction
    pub fn touched(&self, key: &str) -> bool {
        self.prior.contains_key(key)
    }

    /// Prior value recorded for `key`
    ///
    /// The outer `Option` is `None` when the key was never touched; the
    /// inner one is `None` when the key did not exist before the transaction.
    pub fn prior(&self, key: &str) -> Option<Option<&Value>> {
        self.prior.get(key).map(Option::as_ref)
    }

    /// Number of keys touched
    pub fn len(&self) -> usize {
        self.prior.len()
    }

    /// Check if no key has been touched
    pub fn is_empty(&self) -> bool {
        self.prior.is_empty()
    }

    /// Fold a committed inner snapshot into this one
    ///
    /// Keys already touched here keep their entry. Keys touched only by the
    /// inner transaction held the same value when this transaction began, so
    /// the inner prior value is adopted as-is. Returns the number adopted.
    pub fn absorb(&mut self, inner: Snapshot) -> usize {
        let mut adopted = 0;
        for (key, prior) in inner.prior {
            if let Entry::Vacant(slot) = self.prior.entry(key) {
                slot.insert(prior);
                adopted += 1;
            }
        }
        adopted
    }

    /// Consume the snapshot, yielding `(key, prior value)` pairs
    pub fn into_entries(self) -> impl Iterator<Item = (Key, Option<Value>)> {
        self.prior.into_iter()
    }
}
