/*!
 * Core Types
 * Common types used across the allocator
 */

/// Address type for memory operations (byte offset into the simulated space)
pub type Address = usize;

/// Size type for memory operations
pub type Size = usize;
