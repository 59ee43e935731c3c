/*!
 * Per-Process Operations
 * Bulk release and ownership queries
 */

use super::super::types::{Block, BlockInfo, MemoryError, MemoryResult, Owner};
use super::MemoryManager;
use crate::core::data_structures::ProcessId;
use crate::core::types::Size;
use tracing::{debug, info, warn};

impl MemoryManager {
    /// Merge every run of adjacent free blocks into one block
    pub(super) fn coalesce_free_blocks(&mut self) {
        let before = self.blocks.len();
        let mut merged: Vec<Block> = Vec::with_capacity(before);

        for block in self.blocks.drain(..) {
            if let Some(prev) = merged.last_mut() {
                if prev.is_free() && block.is_free() {
                    prev.size += block.size;
                    continue;
                }
            }
            merged.push(block);
        }
        self.blocks = merged;

        if self.blocks.len() < before {
            debug!(
                before,
                after = self.blocks.len(),
                "Coalesced adjacent free blocks"
            );
        }
    }

    /// Free every block owned by `pid` (e.g. when the process terminates)
    ///
    /// Marks each owned block free, then merges free neighbours in a single
    /// pass. Returns the number of bytes freed.
    pub fn release_all(&mut self, pid: &ProcessId) -> MemoryResult<Size> {
        let mut freed_bytes = 0;
        let mut freed_count = 0;

        for block in self.blocks.iter_mut().filter(|b| b.is_owned_by(pid)) {
            block.owner = Owner::Free;
            freed_bytes += block.size;
            freed_count += 1;
        }

        if freed_count == 0 {
            warn!(pid = %pid, "Release of unknown process");
            return Err(MemoryError::ProcessNotFound(pid.clone()));
        }

        self.coalesce_free_blocks();
        info!(
            pid = %pid,
            freed_bytes,
            freed_count,
            available = self.total_memory - self.used_memory(),
            "Released all blocks of process"
        );

        debug_assert!(self.check_invariants().is_ok());
        Ok(freed_bytes)
    }

    /// Blocks currently owned by `pid`, in address order
    pub fn process_allocations(&self, pid: &ProcessId) -> Vec<BlockInfo> {
        self.blocks
            .iter()
            .filter(|b| b.is_owned_by(pid))
            .map(BlockInfo::from)
            .collect()
    }

    /// Bytes currently owned by `pid`
    pub fn process_memory(&self, pid: &ProcessId) -> Size {
        self.blocks
            .iter()
            .filter(|b| b.is_owned_by(pid))
            .map(|b| b.size)
            .sum()
    }
}
