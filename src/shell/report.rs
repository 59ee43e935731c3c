/*!
 * Status Reporter
 * Rendering partition snapshots for humans and tools
 */

use crate::config::ReportFormat;
use crate::memory::BlockInfo;
use std::io::{self, Write};

/// Label printed for free blocks
pub const UNUSED_LABEL: &str = "Unused";

/// Write `snapshot` to `out` in the requested format
pub fn render<W: Write>(snapshot: &[BlockInfo], format: ReportFormat, out: &mut W) -> io::Result<()> {
    match format {
        ReportFormat::Text => render_text(snapshot, out),
        ReportFormat::Json => render_json(snapshot, out),
    }
}

/// `Addresses [start: last] owner` per block, `last` being inclusive
pub fn render_text<W: Write>(snapshot: &[BlockInfo], out: &mut W) -> io::Result<()> {
    for block in snapshot {
        let owner = block.owner.as_ref().map_or(UNUSED_LABEL, |pid| pid.as_str());
        writeln!(out, "Addresses [{}: {}] {}", block.start, block.end - 1, owner)?;
    }
    Ok(())
}

/// Whole snapshot as a single JSON array line
pub fn render_json<W: Write>(snapshot: &[BlockInfo], out: &mut W) -> io::Result<()> {
    serde_json::to_writer(&mut *out, snapshot).map_err(io::Error::from)?;
    writeln!(out)
}
