/*!
 * Placement Strategies
 * Choosing which free block satisfies a request
 */

use super::super::types::Block;
use crate::core::types::Size;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fit strategy used to pick a free block
///
/// All strategies scan in address order and only replace the current
/// candidate on strict improvement, so ties go to the lowest address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Lowest-addressed block that is large enough
    FirstFit,
    /// Smallest block that is large enough
    BestFit,
    /// Largest block that is large enough
    WorstFit,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::FirstFit, Strategy::BestFit, Strategy::WorstFit];

    /// Single-letter command code (`F`, `B`, `W`)
    pub const fn code(self) -> char {
        match self {
            Strategy::FirstFit => 'F',
            Strategy::BestFit => 'B',
            Strategy::WorstFit => 'W',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'F' => Some(Strategy::FirstFit),
            'B' => Some(Strategy::BestFit),
            'W' => Some(Strategy::WorstFit),
            _ => None,
        }
    }

    /// Index of the free block this strategy selects for `size` bytes
    ///
    /// Never mutates; `None` when no free block is large enough.
    pub(super) fn select(self, blocks: &[Block], size: Size) -> Option<usize> {
        let mut candidates = blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| block.is_free() && block.size >= size);

        match self {
            Strategy::FirstFit => candidates.next().map(|(index, _)| index),
            Strategy::BestFit => candidates
                .fold(None, |best: Option<(usize, Size)>, (index, block)| match best {
                    Some((_, best_size)) if block.size >= best_size => best,
                    _ => Some((index, block.size)),
                })
                .map(|(index, _)| index),
            Strategy::WorstFit => candidates
                .fold(None, |worst: Option<(usize, Size)>, (index, block)| match worst {
                    Some((_, worst_size)) if block.size <= worst_size => worst,
                    _ => Some((index, block.size)),
                })
                .map(|(index, _)| index),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::FirstFit => "first-fit",
            Strategy::BestFit => "best-fit",
            Strategy::WorstFit => "worst-fit",
        };
        f.write_str(name)
    }
}
