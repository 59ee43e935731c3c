/*!
 * Memory Module
 * Block-list engine for contiguous memory allocation
 */

pub mod manager;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use manager::{InvariantViolation, MemoryManager, Strategy};
pub use traits::*;
pub use types::*;
