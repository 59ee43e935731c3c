/*!
 * Memory Allocator Implementation
 * Request and release logic
 */

use super::super::types::{Block, MemoryError, MemoryPressure, MemoryResult, Owner, Region};
use super::{MemoryManager, Strategy};
use crate::core::data_structures::ProcessId;
use crate::core::types::{Address, Size};
use tracing::{debug, info, warn};

impl MemoryManager {
    /// Allocate `size` bytes for `pid` from the block chosen by `strategy`
    ///
    /// A larger block is split into the allocation followed by a free
    /// remainder; an exact fit is taken whole. Returns the start address.
    pub fn request(
        &mut self,
        pid: ProcessId,
        size: Size,
        strategy: Strategy,
    ) -> MemoryResult<Address> {
        if size == 0 {
            return Err(MemoryError::EmptyRequest);
        }

        let Some(index) = strategy.select(&self.blocks, size) else {
            let largest_free = self.largest_free_block();
            warn!(
                pid = %pid,
                requested = size,
                largest_free,
                strategy = %strategy,
                "Insufficient space for allocation"
            );
            return Err(MemoryError::InsufficientSpace {
                requested: size,
                largest_free,
            });
        };

        let (start, block_size) = (self.blocks[index].start, self.blocks[index].size);
        if block_size > size {
            let remainder = Block::free(start + size, block_size - size);
            debug!(
                block_start = start,
                block_size,
                remainder_start = remainder.start,
                remainder_size = remainder.size,
                "Split free block"
            );
            self.blocks.insert(index + 1, remainder);
        }
        info!(pid = %pid, size, start, strategy = %strategy, "Allocated block");
        self.blocks[index] = Block::allocated(start, size, pid);

        let used = self.used_memory();
        let pressure = MemoryPressure::from_usage(used, self.total_memory);
        if pressure >= MemoryPressure::High {
            warn!(
                pressure = %pressure,
                used,
                total = self.total_memory,
                "Memory pressure after allocation"
            );
        }

        debug_assert!(self.check_invariants().is_ok());
        Ok(start)
    }

    /// Free the lowest-addressed block owned by `pid`
    ///
    /// Only the first match is released; a process holding several blocks
    /// needs one call per block (see [`MemoryManager::release_all`]). The
    /// freed block is merged with a free predecessor and then with a free
    /// successor. Returns the region the process held.
    pub fn release(&mut self, pid: &ProcessId) -> MemoryResult<Region> {
        let Some(mut index) = self.blocks.iter().position(|b| b.is_owned_by(pid)) else {
            warn!(pid = %pid, "Release of unknown process");
            return Err(MemoryError::ProcessNotFound(pid.clone()));
        };

        let released = Region {
            start: self.blocks[index].start,
            size: self.blocks[index].size,
        };
        self.blocks[index].owner = Owner::Free;

        if index > 0 && self.blocks[index - 1].is_free() {
            let current = self.blocks.remove(index);
            index -= 1;
            self.blocks[index].size += current.size;
            debug!(start = self.blocks[index].start, "Merged with preceding free block");
        }

        if index + 1 < self.blocks.len() && self.blocks[index + 1].is_free() {
            let next = self.blocks.remove(index + 1);
            self.blocks[index].size += next.size;
            debug!(start = self.blocks[index].start, "Merged with following free block");
        }

        info!(
            pid = %pid,
            start = released.start,
            size = released.size,
            hole_start = self.blocks[index].start,
            hole_size = self.blocks[index].size,
            "Released block"
        );

        debug_assert!(self.check_invariants().is_ok());
        Ok(released)
    }
}
