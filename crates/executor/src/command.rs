//! Command enum and line parsing.
//!
//! Each input line is split on whitespace into a command name and its
//! arguments. Names are matched exactly (upper-case), and every command
//! checks its arity, including the zero-argument ones.

use tallykv_core::{Key, Value};

use crate::{Error, Result};

/// One store operation with typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `SET <key> <value>`
    Set {
        /// Key to write
        key: Key,
        /// Value to store
        value: Value,
    },
    /// `GET <key>`
    Get {
        /// Key to read
        key: Key,
    },
    /// `UNSET <key>`
    Unset {
        /// Key to remove
        key: Key,
    },
    /// `COUNTS <value>`
    Counts {
        /// Value to count
        value: Value,
    },
    /// `FIND <value>`
    Find {
        /// Value to look up
        value: Value,
    },
    /// `BEGIN`
    Begin,
    /// `ROLLBACK`
    Rollback,
    /// `COMMIT`
    Commit,
    /// `END`
    End,
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for blank lines.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCommand`] for an unknown command name
    /// - [`Error::InvalidArguments`] for a known command with the wrong
    ///   number of arguments
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match name {
            "SET" => {
                let [key, value] = expect_args::<2>("SET", &args)?;
                Command::Set {
                    key: key.into(),
                    value: value.into(),
                }
            }
            "GET" => {
                let [key] = expect_args::<1>("GET", &args)?;
                Command::Get { key: key.into() }
            }
            "UNSET" => {
                let [key] = expect_args::<1>("UNSET", &args)?;
                Command::Unset { key: key.into() }
            }
            "COUNTS" => {
                let [value] = expect_args::<1>("COUNTS", &args)?;
                Command::Counts {
                    value: value.into(),
                }
            }
            "FIND" => {
                let [value] = expect_args::<1>("FIND", &args)?;
                Command::Find {
                    value: value.into(),
                }
            }
            "BEGIN" => {
                expect_args::<0>("BEGIN", &args)?;
                Command::Begin
            }
            "ROLLBACK" => {
                expect_args::<0>("ROLLBACK", &args)?;
                Command::Rollback
            }
            "COMMIT" => {
                expect_args::<0>("COMMIT", &args)?;
                Command::Commit
            }
            "END" => {
                expect_args::<0>("END", &args)?;
                Command::End
            }
            other => {
                return Err(Error::InvalidCommand {
                    name: other.to_string(),
                })
            }
        };

        Ok(Some(command))
    }

    /// Canonical command name.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set { .. } => "SET",
            Command::Get { .. } => "GET",
            Command::Unset { .. } => "UNSET",
            Command::Counts { .. } => "COUNTS",
            Command::Find { .. } => "FIND",
            Command::Begin => "BEGIN",
            Command::Rollback => "ROLLBACK",
            Command::Commit => "COMMIT",
            Command::End => "END",
        }
    }

    /// Check if the command changes store state.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::Set { .. }
                | Command::Unset { .. }
                | Command::Begin
                | Command::Rollback
                | Command::Commit
        )
    }
}

fn expect_args<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N]> {
    <[&'a str; N]>::try_from(args).map_err(|_| Error::InvalidArguments {
        command,
        expected: N,
        actual: args.len(),
    })
}
