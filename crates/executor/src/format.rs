//! Output formatting.
//!
//! Human mode prints the bare text protocol:
//!
//! | Output | Printed |
//! |--------|---------|
//! | `Unit` | nothing |
//! | `Maybe(None)` | `NULL` |
//! | `Maybe(Some(v))` | `v` |
//! | `Count(n)` | `n` |
//! | `Keys` | space-joined keys, nothing when empty |
//! | `RolledBack` | `ROLLBACK DONE` |
//! | `Committed` | `COMMIT DONE` |
//! | `Ended` | `ENDING SESSION` |
//!
//! JSON mode prints one object per line: outputs as
//! `{"type":...,"value":...}` and errors as `{"code":...,"message":...}`.

use serde_json::json;

use crate::{Error, Output};

/// Text printed when a session terminates.
pub const ENDING_SESSION: &str = "ENDING SESSION";

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Plain text protocol
    #[default]
    Human,
    /// One JSON object per line
    Json,
}

/// Render an output, or `None` if nothing should be printed.
pub fn format_output(output: &Output, mode: OutputMode) -> Option<String> {
    match mode {
        OutputMode::Human => format_human(output),
        OutputMode::Json => match output {
            Output::Unit => None,
            other => Some(format_json(other)),
        },
    }
}

/// Render an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => err.status().to_string(),
        OutputMode::Json => json!({
            "code": err.code(),
            "message": err.to_string(),
        })
        .to_string(),
    }
}

fn format_human(output: &Output) -> Option<String> {
    match output {
        Output::Unit => None,
        Output::Maybe(None) => Some("NULL".to_string()),
        Output::Maybe(Some(value)) => Some(value.to_string()),
        Output::Count(n) => Some(n.to_string()),
        Output::Keys(keys) if keys.is_empty() => None,
        Output::Keys(keys) => Some(
            keys.iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        ),
        Output::RolledBack => Some("ROLLBACK DONE".to_string()),
        Output::Committed => Some("COMMIT DONE".to_string()),
        Output::Ended => Some(ENDING_SESSION.to_string()),
    }
}

fn format_json(output: &Output) -> String {
    match serde_json::to_string(output) {
        Ok(s) => s,
        Err(e) => json!({ "code": "Internal", "message": e.to_string() }).to_string(),
    }
}
