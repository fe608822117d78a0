//! TallyKV CLI: interactive shell for the TallyKV store.
//!
//! Modes:
//! - **REPL mode**: `tallykv` with a terminal on stdin, with prompt and history
//! - **Pipe mode**: `echo "SET a 1" | tallykv`, line-by-line from stdin
//!
//! Script files given as arguments run first, against the same store.

mod commands;
mod repl;
mod state;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::Path;
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{build_cli, CliConfig, DEFAULT_LOG_FILTER};
use state::{LineOutcome, SessionState};

fn main() {
    let matches = build_cli().get_matches();
    let config = CliConfig::from_matches(&matches);

    init_tracing(&config.log_filter);
    info!(mode = ?config.mode, scripts = config.scripts.len(), "session starting");

    let mut state = SessionState::new(config.mode);
    if let Err(e) = run(&mut state, &config) {
        eprintln!("(error) {}", e);
        process::exit(1);
    }
}

fn run(state: &mut SessionState, config: &CliConfig) -> Result<(), String> {
    let stdout = io::stdout();

    for script in &config.scripts {
        let outcome = run_script(state, script, &mut stdout.lock())
            .map_err(|e| format!("{}: {}", script.display(), e))?;
        if outcome == LineOutcome::End {
            return Ok(());
        }
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        repl::run_repl(state, config).map_err(|e| e.to_string())
    } else {
        repl::run_pipe(state, stdin.lock(), &mut stdout.lock()).map_err(|e| e.to_string())
    }
}

fn run_script<W: io::Write>(
    state: &mut SessionState,
    path: &Path,
    out: &mut W,
) -> io::Result<LineOutcome> {
    let file = File::open(path)?;
    repl::run_lines(state, BufReader::new(file), out)
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
