//! Command execution layer for TallyKV
//!
//! Turns text lines into typed [`Command`]s, runs them against a
//! [`Store`](tallykv_engine::Store) through the [`Executor`], and renders
//! the resulting [`Output`] or [`Error`].
//!
//! # Example
//!
//! ```
//! use tallykv_executor::{format_output, Executor, OutputMode};
//!
//! let mut executor = Executor::new();
//! executor.execute_line("SET a 10").unwrap();
//! let output = executor.execute_line("GET a").unwrap().unwrap();
//! assert_eq!(format_output(&output, OutputMode::Human).as_deref(), Some("10"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
mod error;
mod executor;
mod output;

pub mod format;
pub mod handlers;

pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use format::{format_error, format_output, OutputMode, ENDING_SESSION};
pub use output::Output;
