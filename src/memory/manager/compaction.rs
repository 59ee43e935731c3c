/*!
 * Memory Compaction
 * Consolidating free holes into a single trailing block
 */

use super::super::types::{Block, CompactionSummary};
use super::MemoryManager;
use tracing::info;

impl MemoryManager {
    /// Slide every allocated block to the front of the address space
    ///
    /// Allocations keep their relative order, size and owner; only their
    /// start address changes. Free blocks are dropped and one free block
    /// covering `[used, total)` is appended when any space remains.
    /// Compacting an already compacted partition leaves it unchanged.
    pub fn compact(&mut self) -> CompactionSummary {
        let holes_before = self.blocks.iter().filter(|b| b.is_free()).count();
        let mut next_free_address = 0;
        let mut relocated_blocks = 0;

        let mut compacted: Vec<Block> = Vec::with_capacity(self.blocks.len());
        for mut block in self.blocks.drain(..).filter(Block::is_allocated) {
            if block.start != next_free_address {
                block.start = next_free_address;
                relocated_blocks += 1;
            }
            next_free_address += block.size;
            compacted.push(block);
        }

        let free_bytes = self.total_memory - next_free_address;
        if free_bytes > 0 {
            compacted.push(Block::free(next_free_address, free_bytes));
        }
        self.blocks = compacted;

        info!(
            relocated_blocks,
            holes_before,
            free_start = next_free_address,
            free_bytes,
            "Memory compaction completed"
        );

        debug_assert!(self.check_invariants().is_ok());
        CompactionSummary {
            relocated_blocks,
            free_bytes,
        }
    }
}
