/*!
 * Memory Management
 *
 * Block-list engine simulating contiguous allocation over a fixed address space.
 *
 * ## Partition
 *
 * The address space `[0, total)` is covered by an address-ordered `Vec<Block>`:
 * - Blocks are contiguous: each block starts where the previous one ends
 * - Every block is either free or allocated to one process
 * - No two neighbouring blocks are both free
 *
 * These hold after every public operation. Splits and merges are index
 * operations on the vector, so no block outlives the partition.
 *
 * ## Operations
 *
 * - **Request**: first-fit, best-fit or worst-fit placement, then split
 * - **Release**: first block owned by the process, coalesced with free neighbours
 * - **Compaction**: slides allocations to address 0, one trailing hole remains
 * - **Snapshot/stats**: read-only views for reporting
 */

mod allocator;
mod compaction;
mod placement;
mod process;
mod validation;

pub use placement::Strategy;
pub use validation::InvariantViolation;

use super::traits::{Allocator, MemoryInfo, ProcessMemoryCleanup};
use super::types::*;
use crate::config::AllocatorConfig;
use crate::core::data_structures::ProcessId;
use crate::core::types::{Address, Size};
use tracing::info;

/// Memory manager
///
/// Owns the partition exclusively; mutating operations take `&mut self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryManager {
    pub(super) blocks: Vec<Block>,
    pub(super) total_memory: Size,
}

impl MemoryManager {
    /// Create a manager over `total` bytes using the default configuration
    pub fn new(total: Size) -> MemoryResult<Self> {
        Self::with_config(total, &AllocatorConfig::default())
    }

    /// Create a manager after checking `total` against the configured bound
    pub fn with_config(total: Size, config: &AllocatorConfig) -> MemoryResult<Self> {
        config.validate_capacity(total)?;
        info!(
            total_bytes = total,
            max_bytes = config.max_memory,
            "Memory manager initialized with a single free block"
        );
        Ok(Self {
            blocks: vec![Block::free(0, total)],
            total_memory: total,
        })
    }

    /// Borrow the partition in address order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks currently in the partition
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn total_memory(&self) -> Size {
        self.total_memory
    }

    /// Bytes held by allocated blocks
    pub fn used_memory(&self) -> Size {
        self.blocks
            .iter()
            .filter(|b| b.is_allocated())
            .map(|b| b.size)
            .sum()
    }

    /// Size of the largest free block, 0 when memory is full
    pub fn largest_free_block(&self) -> Size {
        self.blocks
            .iter()
            .filter(|b| b.is_free())
            .map(|b| b.size)
            .max()
            .unwrap_or(0)
    }

    /// Ordered view of the partition for reporting
    pub fn snapshot(&self) -> Vec<BlockInfo> {
        self.blocks.iter().map(BlockInfo::from).collect()
    }

    /// Get overall memory statistics
    pub fn stats(&self) -> MemoryStats {
        let used = self.used_memory();
        let allocated_blocks = self.blocks.iter().filter(|b| b.is_allocated()).count();

        MemoryStats {
            total_memory: self.total_memory,
            used_memory: used,
            available_memory: self.total_memory - used,
            usage_percentage: (used as f64 / self.total_memory as f64) * 100.0,
            allocated_blocks,
            free_blocks: self.blocks.len() - allocated_blocks,
            largest_free_block: self.largest_free_block(),
        }
    }
}

// Implement trait interfaces
impl Allocator for MemoryManager {
    fn request(&mut self, pid: ProcessId, size: Size, strategy: Strategy) -> MemoryResult<Address> {
        MemoryManager::request(self, pid, size, strategy)
    }

    fn release(&mut self, pid: &ProcessId) -> MemoryResult<Region> {
        MemoryManager::release(self, pid)
    }

    fn compact(&mut self) -> CompactionSummary {
        MemoryManager::compact(self)
    }
}

impl MemoryInfo for MemoryManager {
    fn total_memory(&self) -> Size {
        MemoryManager::total_memory(self)
    }

    fn snapshot(&self) -> Vec<BlockInfo> {
        MemoryManager::snapshot(self)
    }

    fn stats(&self) -> MemoryStats {
        MemoryManager::stats(self)
    }
}

impl ProcessMemoryCleanup for MemoryManager {
    fn release_all(&mut self, pid: &ProcessId) -> MemoryResult<Size> {
        MemoryManager::release_all(self, pid)
    }

    fn process_allocations(&self, pid: &ProcessId) -> Vec<BlockInfo> {
        MemoryManager::process_allocations(self, pid)
    }
}
