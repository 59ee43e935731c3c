/*!
 * Partition Validation
 * Structural invariant checks over the block list
 */

use super::MemoryManager;
use crate::core::types::{Address, Size};
use thiserror::Error;

/// First broken invariant found in a partition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("partition has no blocks")]
    Empty,

    #[error("block {index} has zero size")]
    ZeroSizedBlock { index: usize },

    #[error("block {index} starts at {found}, expected {expected}")]
    Gap {
        index: usize,
        expected: Address,
        found: Address,
    },

    #[error("blocks {index} and {next} are both free")]
    UncoalescedFree { index: usize, next: usize },

    #[error("blocks cover {covered} bytes, address space is {total} bytes")]
    CoverageMismatch { covered: Size, total: Size },
}

impl MemoryManager {
    /// Verify the partition covers `[0, total)` contiguously, in address
    /// order, with positive sizes and no two neighbouring free blocks
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.blocks.is_empty() {
            return Err(InvariantViolation::Empty);
        }

        let mut expected = 0;
        for (index, block) in self.blocks.iter().enumerate() {
            if block.size == 0 {
                return Err(InvariantViolation::ZeroSizedBlock { index });
            }
            if block.start != expected {
                return Err(InvariantViolation::Gap {
                    index,
                    expected,
                    found: block.start,
                });
            }
            expected = block.end();
        }

        if let Some(index) = self
            .blocks
            .windows(2)
            .position(|pair| pair[0].is_free() && pair[1].is_free())
        {
            return Err(InvariantViolation::UncoalescedFree {
                index,
                next: index + 1,
            });
        }

        if expected != self.total_memory {
            return Err(InvariantViolation::CoverageMismatch {
                covered: expected,
                total: self.total_memory,
            });
        }

        Ok(())
    }
}
