//! Error types for store operations
//!
//! The store has a single failure mode: closing a transaction (commit or
//! rollback) when none is open. Every other operation is total.

use thiserror::Error;

/// Errors raised by the transactional store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `commit` or `rollback` called with an empty transaction stack
    #[error("no transaction in progress")]
    NoTransaction,
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Canonical error code, stable across releases
    pub fn code(&self) -> &'static str {
        match self {
            Error::NoTransaction => "NoTransaction",
        }
    }

    /// Status line shown to interactive users
    pub fn status(&self) -> &'static str {
        match self {
            Error::NoTransaction => "NO TRANSACTION",
        }
    }
}
