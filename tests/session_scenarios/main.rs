//! Session Scenario Test Suite
//!
//! Drives whole sessions through the text protocol and checks the exact
//! lines a user would see.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test session_scenarios
//!
//! # Transaction scenarios only
//! cargo test --test session_scenarios transactions::
//! ```

use tallykv::{format_error, format_output, Executor, OutputMode};

pub mod protocol;
pub mod transactions;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Run `lines` through a fresh executor and collect every printed line.
///
/// Lines that print nothing (SET, BEGIN, empty FIND) are skipped, exactly
/// as the interactive shell does.
pub fn transcript(lines: &[&str]) -> Vec<String> {
    transcript_with(&mut Executor::new(), lines, OutputMode::Human)
}

/// Like [`transcript`], against an existing executor and output mode.
pub fn transcript_with(executor: &mut Executor, lines: &[&str], mode: OutputMode) -> Vec<String> {
    let mut printed = Vec::new();
    for line in lines {
        match executor.execute_line(line) {
            Ok(Some(output)) => printed.extend(format_output(&output, mode)),
            Ok(None) => {}
            Err(e) => printed.push(format_error(&e, mode)),
        }
    }
    printed
}

/// The printed result of the last line that printed anything.
pub fn last_line(lines: &[&str]) -> Option<String> {
    transcript(lines).pop()
}
