//! Command results.

use serde::{Deserialize, Serialize};
use tallykv_core::{Key, Value};

/// Result of a successfully executed [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Output {
    /// No result (`SET`, `UNSET`, `BEGIN`)
    Unit,
    /// Value of a key, `None` when unset (`GET`)
    Maybe(Option<Value>),
    /// Number of keys holding a value (`COUNTS`)
    Count(usize),
    /// Keys holding a value, sorted (`FIND`)
    Keys(Vec<Key>),
    /// Innermost transaction undone (`ROLLBACK`)
    RolledBack,
    /// Innermost transaction committed (`COMMIT`)
    Committed,
    /// Session is terminating (`END`)
    Ended,
}

impl Output {
    /// Check if this output ends the session.
    pub fn is_end(&self) -> bool {
        matches!(self, Output::Ended)
    }
}
