/*!
 * Contiguous Memory Allocator - Main Entry Point
 *
 * Interactive shell over a simulated address space:
 * - RQ <process> <size> <F|B|W>: request memory
 * - RL <process>: release memory
 * - C: compact
 * - STAT: report regions
 * - X: exit
 */

use clap::Parser;
use contiguous_allocator::core::limits::{DEFAULT_MAX_MEMORY, SHELL_PROMPT};
use contiguous_allocator::{init_tracing, AllocatorConfig, Flow, ReportFormat, Shell};
use miette::IntoDiagnostic;
use std::io::{self, BufRead, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "allocator")]
#[command(about = "Contiguous memory allocation simulator")]
#[command(version)]
struct Cli {
    /// Total size of the simulated address space in bytes
    memory_size: usize,

    /// Largest accepted address space in bytes
    #[arg(long, env = "ALLOCATOR_MAX_MEMORY", default_value_t = DEFAULT_MAX_MEMORY)]
    max_memory: usize,

    /// Print STAT output as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> miette::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let format = if cli.json {
        ReportFormat::Json
    } else {
        ReportFormat::Text
    };
    let config = AllocatorConfig::new()
        .with_max_memory(cli.max_memory)
        .with_report_format(format);

    let mut shell = Shell::from_config(cli.memory_size, &config)?;
    info!(
        memory_size = cli.memory_size,
        max_memory = config.max_memory,
        "Allocator shell starting"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    writeln!(out, "Contiguous Memory Allocator Project").into_diagnostic()?;

    let mut line = Vec::new();
    loop {
        write!(out, "{}", SHELL_PROMPT).into_diagnostic()?;
        out.flush().into_diagnostic()?;

        line.clear();
        if input.read_until(b'\n', &mut line).into_diagnostic()? == 0 {
            writeln!(out).into_diagnostic()?;
            break;
        }

        if shell.execute_bytes(&line, &mut out).into_diagnostic()? == Flow::Exit {
            break;
        }
    }

    info!(stats = ?shell.memory().stats(), "Allocator shell exiting");
    Ok(())
}
