/*!
 * Command Parsing
 * Tokenizing shell lines into allocator commands
 */

use crate::core::data_structures::{ProcessId, ProcessIdError};
use crate::core::types::Size;
use crate::memory::Strategy;
use miette::Diagnostic;
use serde::Serialize;
use std::str::{FromStr, SplitWhitespace};
use thiserror::Error;

pub const REQUEST: &str = "RQ";
pub const RELEASE: &str = "RL";
pub const COMPACT: &str = "C";
pub const STATUS: &str = "STAT";
pub const EXIT: &str = "X";

/// Malformed command errors
///
/// These never reach the memory manager.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command {0}")]
    #[diagnostic(
        code(shell::unknown_command),
        help("Commands are RQ, RL, C, STAT and X.")
    )]
    Unknown(String),

    #[error("{command}: missing {argument}")]
    #[diagnostic(code(shell::missing_argument))]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: unexpected argument {argument}")]
    #[diagnostic(code(shell::unexpected_argument))]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },

    #[error("invalid size {0}: expected a positive integer")]
    #[diagnostic(code(shell::invalid_size))]
    InvalidSize(String),

    #[error("unknown strategy {0}")]
    #[diagnostic(
        code(shell::unknown_strategy),
        help("Use F (first-fit), B (best-fit) or W (worst-fit).")
    )]
    UnknownStrategy(String),

    #[error("invalid process id: {0}")]
    #[diagnostic(code(shell::invalid_process_id))]
    InvalidProcessId(#[from] ProcessIdError),
}

pub type CommandResult<T> = Result<T, CommandError>;

/// One parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Request {
        pid: ProcessId,
        size: Size,
        strategy: Strategy,
    },
    Release {
        pid: ProcessId,
    },
    Compact,
    Status,
    Exit,
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Request { .. } => REQUEST,
            Command::Release { .. } => RELEASE,
            Command::Compact => COMPACT,
            Command::Status => STATUS,
            Command::Exit => EXIT,
        }
    }
}

/// Whitespace tokenizer that tracks which command it belongs to
struct Args<'a> {
    command: &'static str,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn required(&mut self, argument: &'static str) -> CommandResult<&'a str> {
        self.tokens.next().ok_or(CommandError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    fn finish(mut self) -> CommandResult<()> {
        match self.tokens.next() {
            Some(extra) => Err(CommandError::UnexpectedArgument {
                command: self.command,
                argument: extra.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Plain decimal digits only; `usize::from_str` would also take a leading `+`
fn parse_size(token: &str) -> CommandResult<Size> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CommandError::InvalidSize(token.to_string()));
    }
    match token.parse::<Size>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(CommandError::InvalidSize(token.to_string())),
    }
}

fn parse_strategy(token: &str) -> CommandResult<Strategy> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => Strategy::from_code(code),
        _ => None,
    }
    .ok_or_else(|| CommandError::UnknownStrategy(token.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(CommandError::Empty)?;

        let command = match keyword {
            REQUEST => REQUEST,
            RELEASE => RELEASE,
            COMPACT => COMPACT,
            STATUS => STATUS,
            EXIT => EXIT,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        let mut args = Args { command, tokens };

        let parsed = match command {
            REQUEST => {
                let pid = ProcessId::new(args.required("process id")?)?;
                let size = parse_size(args.required("size")?)?;
                let strategy = parse_strategy(args.required("strategy")?)?;
                Command::Request {
                    pid,
                    size,
                    strategy,
                }
            }
            RELEASE => Command::Release {
                pid: ProcessId::new(args.required("process id")?)?,
            },
            COMPACT => Command::Compact,
            STATUS => Command::Status,
            _ => Command::Exit,
        };

        args.finish()?;
        Ok(parsed)
    }
}
