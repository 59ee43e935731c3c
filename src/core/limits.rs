/*!
 * System Limits and Constants
 *
 * Centralized location for the allocator's limits and thresholds.
 */

// =============================================================================
// MEMORY LIMITS
// =============================================================================

/// Default upper bound on the simulated address space (4MB)
/// Deployments may raise or lower it through `AllocatorConfig`
pub const DEFAULT_MAX_MEMORY: usize = 4 * 1024 * 1024;

// =============================================================================
// PROCESS IDENTIFIERS
// =============================================================================

/// Longest accepted process identifier, in bytes
pub const MAX_PROCESS_ID_LEN: usize = 99;

// =============================================================================
// MEMORY PRESSURE
// =============================================================================

/// Usage ratio at which pressure is reported as medium
pub const MEDIUM_PRESSURE_THRESHOLD: f64 = 0.60;

/// Usage ratio at which pressure is reported as high
pub const HIGH_PRESSURE_THRESHOLD: f64 = 0.80;

/// Usage ratio at which pressure is reported as critical
pub const CRITICAL_PRESSURE_THRESHOLD: f64 = 0.95;

// =============================================================================
// SHELL
// =============================================================================

/// Prompt printed before each command is read
pub const SHELL_PROMPT: &str = "allocator> ";
