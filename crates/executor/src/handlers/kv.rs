//! Data command handlers: set, get, unset, counts, find

use tallykv_core::{Key, Value};
use tallykv_engine::Store;

use crate::{Output, Result};

/// Handle SET command.
pub fn set(store: &mut Store, key: Key, value: Value) -> Result<Output> {
    store.set(key, value);
    Ok(Output::Unit)
}

/// Handle GET command.
pub fn get(store: &Store, key: &Key) -> Result<Output> {
    Ok(Output::Maybe(store.get(key.as_str()).cloned()))
}

/// Handle UNSET command.
pub fn unset(store: &mut Store, key: &Key) -> Result<Output> {
    store.unset(key.as_str());
    Ok(Output::Unit)
}

/// Handle COUNTS command.
pub fn counts(store: &Store, value: &Value) -> Result<Output> {
    Ok(Output::Count(store.counts(value.as_str())))
}

/// Handle FIND command.
pub fn find(store: &Store, value: &Value) -> Result<Output> {
    Ok(Output::Keys(store.find(value.as_str())))
}
