//! ## rune-telemetry::metrics
//! **Prometheus exporter for memory statistics**
//!
//! The explicit, opt-in registry that replaces ambient global stats: callers
//! construct a recorder, feed it [`MemoryStats`] snapshots from whichever
//! managers they care about, and scrape the registry.

use prometheus::{IntCounter, IntGauge, Registry};
use rune_core::alloc::MemoryStats;

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: Registry,
    pub current_bytes: IntGauge,
    pub peak_bytes: IntGauge,
    pub allocations_total: IntGauge,
    pub deallocations_total: IntGauge,
    pub arena_resets: IntCounter,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let current_bytes =
            IntGauge::new("rune_memory_current_bytes", "Tracked bytes outstanding").unwrap();
        let peak_bytes =
            IntGauge::new("rune_memory_peak_bytes", "High-water mark of tracked bytes").unwrap();
        let allocations_total =
            IntGauge::new("rune_allocations_total", "Successful tracked allocations").unwrap();
        let deallocations_total =
            IntGauge::new("rune_deallocations_total", "Tracked deallocations").unwrap();
        let arena_resets =
            IntCounter::new("rune_arena_resets_total", "Request-boundary arena resets").unwrap();

        registry.register(Box::new(current_bytes.clone())).unwrap();
        registry.register(Box::new(peak_bytes.clone())).unwrap();
        registry
            .register(Box::new(allocations_total.clone()))
            .unwrap();
        registry
            .register(Box::new(deallocations_total.clone()))
            .unwrap();
        registry.register(Box::new(arena_resets.clone())).unwrap();

        Self {
            registry,
            current_bytes,
            peak_bytes,
            allocations_total,
            deallocations_total,
            arena_resets,
        }
    }

    /// Publishes one stats snapshot to the gauges.
    pub fn record_stats(&self, stats: &MemoryStats) {
        self.current_bytes.set(stats.current_usage as i64);
        self.peak_bytes.set(stats.peak_usage as i64);
        self.allocations_total.set(stats.allocation_count as i64);
        self.deallocations_total.set(stats.deallocation_count as i64);
    }

    pub fn inc_arena_resets(&self) {
        self.arena_resets.inc();
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }
}
