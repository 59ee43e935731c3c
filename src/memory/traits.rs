/*!
 * Memory Traits
 * Contiguous memory management abstractions
 */

use super::types::*;
use super::Strategy;
use crate::core::data_structures::ProcessId;
use crate::core::types::{Address, Size};

/// Contiguous allocator interface
pub trait Allocator {
    /// Carve `size` bytes for `pid` out of a free block chosen by `strategy`
    fn request(&mut self, pid: ProcessId, size: Size, strategy: Strategy)
        -> MemoryResult<Address>;

    /// Free the lowest-addressed block owned by `pid` and coalesce it
    fn release(&mut self, pid: &ProcessId) -> MemoryResult<Region>;

    /// Slide every allocation to the front of the address space
    fn compact(&mut self) -> CompactionSummary;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Size of the simulated address space
    fn total_memory(&self) -> Size;

    /// Ordered view of the partition
    fn snapshot(&self) -> Vec<BlockInfo>;

    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;
}

/// Process memory cleanup
pub trait ProcessMemoryCleanup {
    /// Free every block owned by a process, returning the bytes freed
    fn release_all(&mut self, pid: &ProcessId) -> MemoryResult<Size>;

    /// Get list of allocations for a process
    fn process_allocations(&self, pid: &ProcessId) -> Vec<BlockInfo>;
}

/// Memory manager trait combining all interfaces
pub trait ContiguousMemory: Allocator + MemoryInfo + ProcessMemoryCleanup {}

/// Implement ContiguousMemory for types that implement all required traits
impl<T> ContiguousMemory for T where T: Allocator + MemoryInfo + ProcessMemoryCleanup {}
