//! Command handlers.
//!
//! One function per command, grouped by concern. Each takes the store and
//! the command's typed arguments and returns the [`Output`](crate::Output).

pub mod kv;
pub mod txn;
