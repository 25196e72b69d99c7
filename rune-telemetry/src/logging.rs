//! ## rune-telemetry::logging
//! **Structured logging for memory lifecycle events**
//!
//! ### Expectations:
//! - Negligible overhead when the `rune` targets are filtered out
//! - Structured fields over free-form messages
//!
//! ### Components:
//! - `metrics/`: Prometheus exporter for memory statistics
//! - `logging/`: tracing subscriber setup + lifecycle events
//!
//! Structured logging with tracing and OpenTelemetry

use opentelemetry::KeyValue;
use tracing::info_span;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct MemoryLogger;

impl MemoryLogger {
    pub fn init() {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_thread_names(true)
            .with_span_events(FmtSpan::ENTER)
            .init()
    }

    /// Emits one structured lifecycle event (manager construction, request
    /// boundary, leak-check outcome).
    pub fn log_event(event_type: &str, metadata: Vec<KeyValue>) {
        let span = info_span!(
            "memory_event",
            event_type = event_type,
            otel.kind = "INTERNAL"
        );
        let _guard = span.enter();

        tracing::info!(
            metadata = ?metadata,
            "Memory lifecycle event"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_env_filter_directives_parse() {
        let filter = EnvFilter::new("rune_core=debug,info");
        assert!(filter.to_string().contains("rune_core=debug"));
    }

    #[traced_test]
    #[test]
    fn test_logging() {
        MemoryLogger::log_event("arena_reset", vec![KeyValue::new("capacity_bytes", 4096i64)]);
        assert!(logs_contain("Memory lifecycle event"));
    }
}
