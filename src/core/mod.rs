/*!
 * Core Module
 * Fundamental types, limits and identifiers
 */

pub mod data_structures;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use data_structures::ProcessId;
pub use types::*;
