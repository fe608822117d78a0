//! Storage layer for TallyKV
//!
//! This crate holds the primary key → value map together with its
//! derived value index:
//! - ValueIndex: value → count and value → key set
//! - KeySpace: primary map that keeps the ValueIndex in lockstep
//!
//! Nothing here knows about transactions. The engine decides what to log
//! before calling into a KeySpace.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod keyspace;

pub use index::ValueIndex;
pub use keyspace::KeySpace;
