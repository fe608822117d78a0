//! The transactional store
//!
//! Writes are applied eagerly to the keyspace and undo-logged in the
//! innermost open transaction:
//!
//! ```text
//! set/unset:  log prior value (first touch) → update keyspace + index
//! rollback:   pop snapshot → restore every logged key
//! commit:     pop snapshot → fold into parent (or drop at depth 1)
//! ```
//!
//! Reads always see the latest write, including writes of transactions
//! that are still open.

use tallykv_concurrency::TransactionStack;
use tallykv_core::{Key, Result, Value};
use tallykv_storage::KeySpace;
use tracing::{debug, info, warn};

/// In-memory key-value store with value counts and nested transactions
///
/// # Example
///
/// ```
/// use tallykv_engine::Store;
///
/// let mut store = Store::new();
/// store.set("a", "10");
///
/// store.begin();
/// store.set("a", "20");
/// assert_eq!(store.counts("20"), 1);
///
/// store.rollback().unwrap();
/// assert_eq!(store.get("a").map(|v| v.as_str()), Some("10"));
/// ```
#[derive(Debug, Default)]
pub struct Store {
    keyspace: KeySpace,
    transactions: TransactionStack,
}

impl Store {
    /// Create an empty store with no open transaction
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Data Operations
    // =========================================================================

    /// Set `key` to `value`
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();

        let first_touch = self
            .transactions
            .record(key.as_str(), self.keyspace.get(key.as_str()));
        debug!(
            key = %key,
            value = %value,
            first_touch,
            depth = self.transactions.depth(),
            "set"
        );

        self.keyspace.put(key, value);
    }

    /// Current value of `key`, or `None` if unset
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.keyspace.get(key)
    }

    /// Remove `key`
    ///
    /// Returns `false` (and logs nothing) if the key was not set.
    pub fn unset(&mut self, key: &str) -> bool {
        let Some(current) = self.keyspace.get(key) else {
            return false;
        };

        let first_touch = self.transactions.record(key, Some(current));
        debug!(key, first_touch, depth = self.transactions.depth(), "unset");

        self.keyspace.delete(key);
        true
    }

    /// Number of keys currently holding `value`
    pub fn counts(&self, value: &str) -> usize {
        self.keyspace.count(value)
    }

    /// Keys currently holding `value`, sorted
    pub fn find(&self, value: &str) -> Vec<Key> {
        self.keyspace.find(value)
    }

    // =========================================================================
    // Transaction Operations
    // =========================================================================

    /// Open a (possibly nested) transaction, returning the new depth
    pub fn begin(&mut self) -> usize {
        let depth = self.transactions.begin();
        debug!(depth, "begin");
        depth
    }

    /// Undo every write of the innermost transaction and close it
    ///
    /// # Errors
    ///
    /// [`Error::NoTransaction`](tallykv_core::Error::NoTransaction) if no
    /// transaction is open. The store is left untouched.
    pub fn rollback(&mut self) -> Result<()> {
        let snapshot = match self.transactions.pop() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("rollback without an open transaction");
                return Err(e);
            }
        };

        let restored = snapshot.len();
        for (key, prior) in snapshot.into_entries() {
            match prior {
                Some(value) => {
                    self.keyspace.put(key, value);
                }
                None => {
                    self.keyspace.delete(key.as_str());
                }
            }
        }

        debug!(restored, depth = self.transactions.depth(), "rollback");
        Ok(())
    }

    /// Make the innermost transaction's writes part of its parent
    ///
    /// At depth 1 the writes simply become permanent.
    ///
    /// # Errors
    ///
    /// [`Error::NoTransaction`](tallykv_core::Error::NoTransaction) if no
    /// transaction is open.
    pub fn commit(&mut self) -> Result<()> {
        let adopted = match self.transactions.commit() {
            Ok(adopted) => adopted,
            Err(e) => {
                warn!("commit without an open transaction");
                return Err(e);
            }
        };

        debug!(adopted, depth = self.transactions.depth(), "commit");
        Ok(())
    }

    /// Signal the end of the session
    ///
    /// Open transactions are neither committed nor rolled back; the store
    /// is simply dropped by its owner afterwards.
    pub fn end(&self) {
        info!(
            keys = self.keyspace.len(),
            open_transactions = self.transactions.depth(),
            "session ending"
        );
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Number of open transactions
    pub fn transaction_depth(&self) -> usize {
        self.transactions.depth()
    }

    /// Check if a transaction is open
    pub fn in_transaction(&self) -> bool {
        self.transactions.is_active()
    }

    /// Number of keys set
    pub fn len(&self) -> usize {
        self.keyspace.len()
    }

    /// Check if no key is set
    pub fn is_empty(&self) -> bool {
        self.keyspace.is_empty()
    }

    /// Read-only view of the data and its index
    pub fn keyspace(&self) -> &KeySpace {
        &self.keyspace
    }
}
