//! Transactional store engine for TallyKV
//!
//! [`Store`] ties the keyspace (primary map + value index) to the
//! transaction stack. It is the single entry point for every read and
//! write; callers own one instance and pass it by `&mut`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::Store;
pub use tallykv_core::{Error, Key, Result, Value};
