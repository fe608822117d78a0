//! Command dispatch.
//!
//! [`Executor`] owns the [`Store`] for one session and maps each
//! [`Command`] onto its handler with an exhaustive match.

use tallykv_engine::Store;
use tracing::{debug, trace};

use crate::handlers::{kv, txn};
use crate::{Command, Output, Result};

/// Executes commands against a single store.
///
/// # Example
///
/// ```
/// use tallykv_executor::{Command, Executor, Output};
///
/// let mut executor = Executor::new();
/// executor.execute_line("SET a 10").unwrap();
///
/// let output = executor.execute(Command::Counts { value: "10".into() }).unwrap();
/// assert_eq!(output, Output::Count(1));
/// ```
#[derive(Debug, Default)]
pub struct Executor {
    store: Store,
}

impl Executor {
    /// Create an executor over a fresh, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor over an existing store.
    pub fn with_store(store: Store) -> Self {
        Self { store }
    }

    /// Read-only access to the store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Consume the executor, returning its store.
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Execute one command.
    ///
    /// # Errors
    ///
    /// Only `ROLLBACK` and `COMMIT` can fail, with
    /// [`NoTransaction`](tallykv_core::Error::NoTransaction).
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        if cmd.is_write() {
            debug!(command = cmd.name(), "execute");
        } else {
            trace!(command = cmd.name(), "execute");
        }

        match cmd {
            Command::Set { key, value } => kv::set(&mut self.store, key, value),
            Command::Get { key } => kv::get(&self.store, &key),
            Command::Unset { key } => kv::unset(&mut self.store, &key),
            Command::Counts { value } => kv::counts(&self.store, &value),
            Command::Find { value } => kv::find(&self.store, &value),
            Command::Begin => txn::begin(&mut self.store),
            Command::Rollback => txn::rollback(&mut self.store),
            Command::Commit => txn::commit(&mut self.store),
            Command::End => txn::end(&self.store),
        }
    }

    /// Parse and execute one input line.
    ///
    /// Returns `Ok(None)` for blank lines.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Output>> {
        match Command::parse(line)? {
            Some(cmd) => self.execute(cmd).map(Some),
            None => Ok(None),
        }
    }
}
