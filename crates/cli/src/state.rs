//! Session state shared by the interactive and pipe loops.

use std::io::{self, Write};

use tallykv_executor::{format_error, format_output, Command, Executor, OutputMode};

/// What the input loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keep reading
    Continue,
    /// The session has ended
    End,
}

/// One store session plus its rendering mode.
pub struct SessionState {
    executor: Executor,
    mode: OutputMode,
}

impl SessionState {
    /// Start a session over an empty store.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            executor: Executor::new(),
            mode,
        }
    }

    /// Run one input line and print its result to `out`.
    ///
    /// Errors from the store or the parser are printed, not returned; only
    /// failures to write `out` are.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<LineOutcome> {
        match self.executor.execute_line(line) {
            Ok(Some(output)) => {
                if let Some(text) = format_output(&output, self.mode) {
                    writeln!(out, "{}", text)?;
                }
                if output.is_end() {
                    return Ok(LineOutcome::End);
                }
            }
            Ok(None) => {}
            Err(e) => writeln!(out, "{}", format_error(&e, self.mode))?,
        }
        Ok(LineOutcome::Continue)
    }

    /// Input ran out: end the session as if `END` had been typed.
    pub fn end_of_input<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.executor.execute(Command::End) {
            Ok(output) => {
                if let Some(text) = format_output(&output, self.mode) {
                    writeln!(out, "{}", text)?;
                }
            }
            Err(e) => writeln!(out, "{}", format_error(&e, self.mode))?,
        }
        Ok(())
    }
}
