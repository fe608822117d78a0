//! Input loops: interactive (rustyline) and line-by-line from a reader.

use std::io::{self, BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use crate::commands::CliConfig;
use crate::state::{LineOutcome, SessionState};

/// Run lines from `input` until it is exhausted or `END` is reached.
///
/// Does not print the end-of-input message; the caller decides whether
/// more input follows (scripts before stdin).
pub fn run_lines<R: BufRead, W: Write>(
    state: &mut SessionState,
    input: R,
    out: &mut W,
) -> io::Result<LineOutcome> {
    for line in input.lines() {
        let line = line?;
        if state.handle_line(&line, out)? == LineOutcome::End {
            return Ok(LineOutcome::End);
        }
    }
    out.flush()?;
    Ok(LineOutcome::Continue)
}

/// Pipe mode: run all of `input`, then end the session.
pub fn run_pipe<R: BufRead, W: Write>(
    state: &mut SessionState,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    if run_lines(state, input, out)? == LineOutcome::Continue {
        state.end_of_input(out)?;
    }
    out.flush()
}

/// Interactive mode: prompt until `END`, Ctrl-D or a terminal error.
pub fn run_repl(state: &mut SessionState, config: &CliConfig) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    if let Some(path) = &config.history {
        if let Err(e) = rl.load_history(path) {
            debug!(path = %path.display(), error = %e, "no history loaded");
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }
                if state.handle_line(&line, &mut out)? == LineOutcome::End {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                state.end_of_input(&mut out)?;
                break;
            }
            Err(e) => return Err(e),
        }
    }

    if let Some(path) = &config.history {
        if let Err(e) = rl.save_history(path) {
            warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }
    Ok(())
}
