//! Transaction command handlers: begin, rollback, commit, end

use tallykv_engine::Store;

use crate::{Output, Result};

/// Handle BEGIN command.
pub fn begin(store: &mut Store) -> Result<Output> {
    store.begin();
    Ok(Output::Unit)
}

/// Handle ROLLBACK command.
pub fn rollback(store: &mut Store) -> Result<Output> {
    store.rollback()?;
    Ok(Output::RolledBack)
}

/// Handle COMMIT command.
pub fn commit(store: &mut Store) -> Result<Output> {
    store.commit()?;
    Ok(Output::Committed)
}

/// Handle END command.
pub fn end(store: &Store) -> Result<Output> {
    store.end();
    Ok(Output::Ended)
}
