/*!
 * Memory Types
 * Common types for contiguous memory management
 */

use crate::core::data_structures::ProcessId;
use crate::core::limits::{
    CRITICAL_PRESSURE_THRESHOLD, HIGH_PRESSURE_THRESHOLD, MEDIUM_PRESSURE_THRESHOLD,
};
use crate::core::types::{Address, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// Every variant except `InvalidSize` is recoverable: the partition is left
/// exactly as it was before the failed call.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("Invalid memory size {size}: must be > 0 and <= {max}")]
    #[diagnostic(
        code(memory::invalid_size),
        help("Pass a total size between 1 and the configured maximum (--max-memory).")
    )]
    InvalidSize { size: Size, max: Size },

    #[error("Insufficient space: requested {requested} bytes, largest free block is {largest_free} bytes")]
    #[diagnostic(
        code(memory::insufficient_space),
        help("Release memory or compact to consolidate free holes.")
    )]
    InsufficientSpace { requested: Size, largest_free: Size },

    #[error("No process with ID {0} found")]
    #[diagnostic(code(memory::process_not_found))]
    ProcessNotFound(ProcessId),

    #[error("Cannot allocate zero bytes")]
    #[diagnostic(code(memory::empty_request))]
    EmptyRequest,
}

/// Who holds a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "process", rename_all = "snake_case")]
pub enum Owner {
    Free,
    Allocated(ProcessId),
}

/// One contiguous region of the partition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub start: Address,
    pub size: Size,
    pub owner: Owner,
}

impl Block {
    pub fn free(start: Address, size: Size) -> Self {
        Self {
            start,
            size,
            owner: Owner::Free,
        }
    }

    pub fn allocated(start: Address, size: Size, pid: ProcessId) -> Self {
        Self {
            start,
            size,
            owner: Owner::Allocated(pid),
        }
    }

    /// Exclusive end address
    #[inline]
    pub fn end(&self) -> Address {
        self.start + self.size
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self.owner, Owner::Free)
    }

    #[inline]
    pub fn is_allocated(&self) -> bool {
        !self.is_free()
    }

    #[inline]
    pub fn is_owned_by(&self, pid: &ProcessId) -> bool {
        matches!(&self.owner, Owner::Allocated(owner) if owner == pid)
    }

    pub fn owner_pid(&self) -> Option<&ProcessId> {
        match &self.owner {
            Owner::Allocated(pid) => Some(pid),
            Owner::Free => None,
        }
    }
}

/// Read-only view of a block for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub start: Address,
    /// Exclusive
    pub end: Address,
    /// `None` for free space
    pub owner: Option<ProcessId>,
}

impl From<&Block> for BlockInfo {
    fn from(block: &Block) -> Self {
        Self {
            start: block.start,
            end: block.end(),
            owner: block.owner_pid().cloned(),
        }
    }
}

impl BlockInfo {
    #[inline]
    pub fn size(&self) -> Size {
        self.end - self.start
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }
}

/// A span of addresses returned by release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub start: Address,
    pub size: Size,
}

/// Outcome of a compaction pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactionSummary {
    /// Allocated blocks whose start address changed
    pub relocated_blocks: usize,
    /// Size of the single trailing free block (0 when memory is full)
    pub free_bytes: Size,
}

/// Memory statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub used_memory: Size,
    pub available_memory: Size,
    pub usage_percentage: f64,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_block: Size,
}

impl MemoryStats {
    /// Share of free memory that lies outside the largest hole (0.0 when
    /// free space is contiguous or absent)
    pub fn external_fragmentation(&self) -> f64 {
        if self.available_memory == 0 {
            return 0.0;
        }
        1.0 - (self.largest_free_block as f64 / self.available_memory as f64)
    }

    pub fn memory_pressure(&self) -> MemoryPressure {
        MemoryPressure::from_usage(self.used_memory, self.total_memory)
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl MemoryPressure {
    pub fn from_usage(used: Size, total: Size) -> Self {
        if total == 0 {
            return MemoryPressure::Low;
        }
        let ratio = used as f64 / total as f64;
        if ratio >= CRITICAL_PRESSURE_THRESHOLD {
            MemoryPressure::Critical
        } else if ratio >= HIGH_PRESSURE_THRESHOLD {
            MemoryPressure::High
        } else if ratio >= MEDIUM_PRESSURE_THRESHOLD {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
