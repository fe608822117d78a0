//! # TallyKV
//!
//! Transactional in-memory key-value store with per-value counts.
//!
//! TallyKV keeps string keys mapped to string values, answers "how many
//! keys hold this value" and "which keys hold this value" from an index,
//! and supports arbitrarily nested transactions.
//!
//! ## Quick Start
//!
//! ```
//! use tallykv::prelude::*;
//!
//! let mut store = Store::new();
//! store.set("a", "10");
//! store.set("b", "10");
//! assert_eq!(store.counts("10"), 2);
//!
//! store.begin();
//! store.unset("a");
//! assert_eq!(store.counts("10"), 1);
//! store.rollback()?;
//! assert_eq!(store.counts("10"), 2);
//! # Ok::<(), tallykv::StoreError>(())
//! ```
//!
//! ## Layers
//!
//! - [`Store`] - data operations and nested transactions
//! - [`Executor`] - text commands (`SET a 10`) dispatched to a store
//! - [`format_output`] / [`format_error`] - rendering for the text protocol

#![warn(missing_docs)]

pub mod prelude;

pub use tallykv_core::{Error as StoreError, Key, Value};
pub use tallykv_engine::Store;
pub use tallykv_executor::{
    format_error, format_output, Command, Error, Executor, Output, OutputMode, Result,
    ENDING_SESSION,
};

/// Storage internals: the keyspace and its value index.
pub mod storage {
    pub use tallykv_storage::{KeySpace, ValueIndex};
}

/// Transaction bookkeeping: per-transaction snapshots and their stack.
pub mod transactions {
    pub use tallykv_concurrency::{Snapshot, TransactionStack};
}
