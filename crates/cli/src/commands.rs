//! clap command tree and the [`CliConfig`] built from it.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use tallykv_executor::OutputMode;

/// Environment variable read when `--log-level` is not given.
pub const LOG_ENV: &str = "TALLYKV_LOG";

/// Log filter used when neither the flag nor the environment sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Prompt shown in interactive mode.
pub const DEFAULT_PROMPT: &str = "> ";

/// Build the top-level clap command.
pub fn build_cli() -> Command {
    Command::new("tallykv")
        .about("Transactional in-memory key-value store")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print results and errors as JSON lines"),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .value_name("TEXT")
                .default_value(DEFAULT_PROMPT)
                .help("Prompt shown in interactive mode"),
        )
        .arg(
            Arg::new("history")
                .long("history")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Load and save interactive history at PATH"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("FILTER")
                .help("Log filter for stderr, e.g. `debug` (default: $TALLYKV_LOG or `warn`)"),
        )
        .arg(
            Arg::new("script")
                .value_name("SCRIPT")
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Files to execute line by line before reading stdin"),
        )
}

/// Settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Rendering of results and errors
    pub mode: OutputMode,
    /// Interactive prompt text
    pub prompt: String,
    /// Interactive history file
    pub history: Option<PathBuf>,
    /// tracing filter directive
    pub log_filter: String,
    /// Scripts run before stdin, in order
    pub scripts: Vec<PathBuf>,
}

impl CliConfig {
    /// Build the config from parsed arguments and the process environment.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self::from_matches_with_env(matches, std::env::var(LOG_ENV).ok())
    }

    /// Build the config with an explicit value for [`LOG_ENV`].
    pub fn from_matches_with_env(matches: &ArgMatches, log_env: Option<String>) -> Self {
        let mode = if matches.get_flag("json") {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        let prompt = matches
            .get_one::<String>("prompt")
            .cloned()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

        let log_filter = matches
            .get_one::<String>("log-level")
            .cloned()
            .or(log_env.filter(|s| !s.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let scripts = matches
            .get_many::<PathBuf>("script")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default();

        CliConfig {
            mode,
            prompt,
            history: matches.get_one::<PathBuf>("history").cloned(),
            log_filter,
            scripts,
        }
    }
}
