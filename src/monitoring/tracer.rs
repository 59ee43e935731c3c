/*!
 * Structured Tracing
 * Logging setup and command spans using the tracing crate
 *
 * Logs go to stderr so the interactive prompt and status output on stdout
 * stay readable.
 */

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, span, warn, Level};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Commands slower than this are reported
const SLOW_COMMAND_MICROS: u128 = 10_000;

static COMMAND_SEQ: AtomicU64 = AtomicU64::new(0);

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - ALLOCATOR_TRACE_JSON: Enable JSON output (default: false)
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var("ALLOCATOR_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!(json = use_json, "Structured tracing initialized");
    }
}

/// Span covering one shell command, from parse to response
pub struct CommandSpan {
    span: tracing::Span,
    start: Instant,
    seq: u64,
}

impl CommandSpan {
    pub fn new(keyword: &str) -> Self {
        let seq = COMMAND_SEQ.fetch_add(1, Ordering::Relaxed) + 1;
        let span = span!(
            Level::DEBUG,
            "command",
            seq = seq,
            keyword = keyword,
            duration_us = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            seq,
        }
    }

    /// Sequence number of this command within the process
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Record a successful command
    pub fn record_success(&self) {
        self.span.record("result", "success");
    }

    /// Record an error
    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
        self.span.record("result", "error");
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for CommandSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_micros();
        self.span.record("duration_us", duration as u64);

        if duration > SLOW_COMMAND_MICROS {
            let _entered = self.span.enter();
            warn!(seq = self.seq, duration_us = duration as u64, "slow command");
        }
    }
}

/// Helper to create a command span
#[inline]
pub fn span_command(keyword: &str) -> CommandSpan {
    CommandSpan::new(keyword)
}
