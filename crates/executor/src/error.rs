//! Executor error types.
//!
//! Store errors are wrapped as-is; the dispatcher adds the two input
//! errors a line can fail with before reaching the store.

use thiserror::Error;

/// Errors returned by [`Executor`](crate::Executor) and [`Command::parse`](crate::Command::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Error raised by the store itself
    #[error(transparent)]
    Store(#[from] tallykv_core::Error),

    /// Unknown command name
    #[error("unknown command: {name}")]
    InvalidCommand {
        /// The name as typed
        name: String,
    },

    /// Known command with the wrong number of arguments
    #[error("{command} expects {expected} argument(s), got {actual}")]
    InvalidArguments {
        /// Canonical command name
        command: &'static str,
        /// Required argument count
        expected: usize,
        /// Argument count supplied
        actual: usize,
    },
}

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Canonical error code, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Store(e) => e.code(),
            Error::InvalidCommand { .. } => "InvalidCommand",
            Error::InvalidArguments { .. } => "InvalidArguments",
        }
    }

    /// Status line shown to interactive users.
    pub fn status(&self) -> &'static str {
        match self {
            Error::Store(e) => e.status(),
            Error::InvalidCommand { .. } => "INVALID COMMAND",
            Error::InvalidArguments { .. } => "INVALID ARGUMENTS",
        }
    }

    /// Check if the error came from input parsing rather than the store.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCommand { .. } | Error::InvalidArguments { .. }
        )
    }
}
