/*!
 * Monitoring
 * Structured logging and per-command tracing spans
 */

mod tracer;

pub use tracer::{init_tracing, span_command, CommandSpan};
