//! # Rune Telemetry
//!
//! Crate for logging and memory-metrics export.

pub mod logging;
pub mod metrics;

pub use logging::MemoryLogger;
pub use metrics::MetricsRecorder;
