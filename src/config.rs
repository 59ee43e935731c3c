/*!
 * Allocator Configuration
 *
 * Deployment parameters for the simulator. Defaults come from `core::limits`;
 * the binary may override them from the command line or environment.
 */

use crate::core::limits::DEFAULT_MAX_MEMORY;
use crate::core::types::Size;
use crate::memory::{MemoryError, MemoryResult};
use serde::{Deserialize, Serialize};

/// How status snapshots are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportFormat {
    /// `Addresses [start: last] owner` lines
    #[default]
    Text,
    /// One JSON array per snapshot
    Json,
}

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatorConfig {
    /// Largest address space the engine may be initialized with (default: 4MB)
    pub max_memory: Size,

    /// Output format for `STAT`
    pub report_format: ReportFormat,
}

impl AllocatorConfig {
    pub fn new() -> Self {
        Self {
            max_memory: DEFAULT_MAX_MEMORY,
            report_format: ReportFormat::Text,
        }
    }

    pub fn with_max_memory(mut self, max_memory: Size) -> Self {
        self.max_memory = max_memory;
        self
    }

    pub fn with_report_format(mut self, report_format: ReportFormat) -> Self {
        self.report_format = report_format;
        self
    }

    /// Check a requested address-space size against the configured bound
    pub fn validate_capacity(&self, total: Size) -> MemoryResult<()> {
        if total == 0 || total > self.max_memory {
            return Err(MemoryError::InvalidSize {
                size: total,
                max: self.max_memory,
            });
        }
        Ok(())
    }
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
