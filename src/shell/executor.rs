/*!
 * Command Executor
 * Dispatching parsed commands onto the memory manager
 */

use super::command::{Command, CommandError};
use super::report;
use crate::config::{AllocatorConfig, ReportFormat};
use crate::memory::{ContiguousMemory, MemoryError, MemoryManager};
use crate::monitoring::span_command;
use std::io::{self, Write};
use tracing::debug;

/// Whether the read loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive front end over one memory manager
///
/// Recoverable errors are written to the output and never stop the shell;
/// only I/O failures are returned.
pub struct Shell<M = MemoryManager> {
    memory: M,
    format: ReportFormat,
}

impl Shell<MemoryManager> {
    /// Build a shell over a fresh manager of `total` bytes
    pub fn from_config(total: usize, config: &AllocatorConfig) -> Result<Self, MemoryError> {
        let memory = MemoryManager::with_config(total, config)?;
        Ok(Self::new(memory, config.report_format))
    }
}

impl<M: ContiguousMemory> Shell<M> {
    pub fn new(memory: M, format: ReportFormat) -> Self {
        Self { memory, format }
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Parse and run one line, writing the response to `out`
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        match line.parse::<Command>() {
            Ok(command) => self.run(command, out),
            Err(CommandError::Empty) => Ok(Flow::Continue),
            Err(err) => {
                debug!(error = %err, line = line.trim(), "Malformed command");
                match (&err, line.split_whitespace().next()) {
                    (CommandError::Unknown(_), _) | (_, None) => writeln!(out, "Invalid command.")?,
                    (_, Some(keyword)) => writeln!(out, "Invalid {} command format.", keyword)?,
                }
                Ok(Flow::Continue)
            }
        }
    }

    /// [`Shell::execute`] for a raw input line
    ///
    /// A line that is not valid UTF-8 is reported as an invalid command.
    pub fn execute_bytes<W: Write>(&mut self, line: &[u8], out: &mut W) -> io::Result<Flow> {
        match std::str::from_utf8(line) {
            Ok(line) => self.execute(line, out),
            Err(err) => {
                debug!(error = %err, "Undecodable command line");
                writeln!(out, "Invalid command.")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run an already parsed command
    pub fn run<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        let span = span_command(command.keyword());
        let _entered = span.enter();

        let result = match command {
            Command::Request {
                pid,
                size,
                strategy,
            } => {
                let name = pid.clone();
                self.memory.request(pid, size, strategy).map(|start| {
                    format!(
                        "Allocated {} bytes to {} starting at address {}",
                        size, name, start
                    )
                })
            }
            Command::Release { pid } => self
                .memory
                .release(&pid)
                .map(|_| format!("Released memory from process {}", pid)),
            Command::Compact => {
                self.memory.compact();
                Ok("Memory compaction completed.".to_string())
            }
            Command::Status => {
                report::render(&self.memory.snapshot(), self.format, out)?;
                span.record_success();
                return Ok(Flow::Continue);
            }
            Command::Exit => {
                span.record_success();
                return Ok(Flow::Exit);
            }
        };

        match result {
            Ok(message) => {
                span.record_success();
                writeln!(out, "{}", message)?;
            }
            Err(err) => {
                span.record_error(&err.to_string());
                writeln!(out, "{}", failure_message(&err))?;
            }
        }
        Ok(Flow::Continue)
    }
}

/// User-facing wording for a recoverable engine error
fn failure_message(err: &MemoryError) -> String {
    match err {
        MemoryError::InsufficientSpace { .. } => {
            "Failed to allocate memory: insufficient space".to_string()
        }
        MemoryError::ProcessNotFound(pid) => format!("No process with ID {} found.", pid),
        other => format!("Failed: {}", other),
    }
}
