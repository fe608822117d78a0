//! Transaction layer for TallyKV
//!
//! This crate implements nested undo-logged transactions:
//! - Snapshot: per-transaction first-touch log of prior values
//! - TransactionStack: open snapshots, innermost last
//!
//! Writes are applied to the keyspace eagerly; a snapshot only remembers
//! what to put back if the transaction is rolled back.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod snapshot;
pub mod stack;

pub use snapshot::Snapshot;
pub use stack::TransactionStack;
