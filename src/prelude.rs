//! Convenient imports for TallyKV.
//!
//! ```
//! use tallykv::prelude::*;
//!
//! let mut executor = Executor::new();
//! executor.execute_line("SET a 10")?;
//! # Ok::<(), tallykv::Error>(())
//! ```

// Store
pub use crate::{Key, Store, StoreError, Value};

// Command layer
pub use crate::{format_error, format_output, Command, Error, Executor, Output, OutputMode, Result};
