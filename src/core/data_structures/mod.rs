/*!
 * Data Structures
 * Small value types shared across the allocator
 */

mod process_id;

pub use process_id::{ProcessId, ProcessIdError};
