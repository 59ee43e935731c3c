/*!
 * Contiguous Memory Allocator Library
 * Simulated contiguous allocation with first/best/worst fit, coalescing and compaction
 */

pub mod config;
pub mod core;
pub mod memory;
pub mod monitoring;
pub mod shell;

// Re-exports
pub use config::{AllocatorConfig, ReportFormat};
pub use crate::core::{Address, ProcessId, Size};
pub use memory::{
    Allocator, Block, BlockInfo, CompactionSummary, ContiguousMemory, MemoryError, MemoryInfo,
    MemoryManager, MemoryResult, MemoryStats, Owner, ProcessMemoryCleanup, Region, Strategy,
};
pub use monitoring::init_tracing;
pub use shell::{Command, CommandError, Flow, Shell};
