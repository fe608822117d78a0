//! Stack of open transactions
//!
//! `begin` pushes an empty [`Snapshot`]. `rollback` pops the innermost one
//! and hands it to the caller for replay; `commit` pops it and folds it into
//! the enclosing snapshot, if any.
//!
//! ## Nesting
//!
//! ```text
//! BEGIN          stack: [S1]
//! SET a 10       S1 = {a: None}
//! BEGIN          stack: [S1, S2]
//! SET a 20       S2 = {a: Some(10)}
//! ROLLBACK       pop S2, restore a = 10
//! COMMIT         pop S1, discard
//! ```
//!
//! On commit, entries the outer snapshot already has are left alone: they
//! hold the value each key had before the outer transaction began. Keys
//! first touched by the inner transaction are adopted into the outer
//! snapshot so an outer rollback still reaches them.

use crate::snapshot::Snapshot;
use tallykv_core::{Error, Result, Value};

/// Open transactions, innermost last
#[derive(Debug, Clone, Default)]
pub struct TransactionStack {
    open: Vec<Snapshot>,
}

impl TransactionStack {
    /// Create a stack with no open transaction
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new innermost transaction, returning the new depth
    pub fn begin(&mut self) -> usize {
        self.open.push(Snapshot::new());
        self.open.len()
    }

    /// Log the prior value of `key` in the innermost transaction
    ///
    /// No-op when no transaction is open. Returns `true` only when this is
    /// the key's first touch in the innermost transaction.
    pub fn record(&mut self, key: &str, current: Option<&Value>) -> bool {
        match self.open.last_mut() {
            Some(snapshot) => snapshot.record(key, current),
            None => false,
        }
    }

    /// Close the innermost transaction and hand back its snapshot
    ///
    /// # Errors
    ///
    /// [`Error::NoTransaction`] if the stack is empty.
    pub fn pop(&mut self) -> Result<Snapshot> {
        self.open.pop().ok_or(Error::NoTransaction)
    }

    /// Commit the innermost transaction into its parent
    ///
    /// Returns the number of keys adopted by the enclosing transaction (0
    /// when committing the outermost one).
    ///
    /// # Errors
    ///
    /// [`Error::NoTransaction`] if the stack is empty.
    pub fn commit(&mut self) -> Result<usize> {
        let inner = self.pop()?;
        Ok(match self.open.last_mut() {
            Some(outer) => outer.absorb(inner),
            None => 0,
        })
    }

    /// The innermost open transaction, if any
    pub fn innermost(&self) -> Option<&Snapshot> {
        self.open.last()
    }

    /// Number of open transactions
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Check if at least one transaction is open
    pub fn is_active(&self) -> bool {
        !self.open.is_empty()
    }
}
