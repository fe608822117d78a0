//! Core types and errors for TallyKV
//!
//! Shared by every other crate in the workspace:
//! - [`Key`] / [`Value`]: opaque string newtypes
//! - [`Error`] / [`Result`]: store error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Key, Value};
