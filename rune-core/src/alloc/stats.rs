//! ## rune-core::alloc::stats
//! **Allocation traffic counters**
//!
//! `MemoryStats` is a bare value type: no internal synchronization. Anything
//! sharing an instance across threads supplies its own lock; the
//! [`TrackingAllocator`](crate::alloc::tracking::TrackingAllocator) and
//! [`MemoryManager`](crate::alloc::manager::MemoryManager) share one behind
//! an instance-owned `parking_lot::Mutex`.

use serde::Serialize;

/// Counters describing allocation traffic through one tracked allocator.
///
/// Invariants: `current_usage == total_allocated - total_freed` at every
/// observation point, and `peak_usage` is the maximum `current_usage` has
/// ever reached.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemoryStats {
    /// Total bytes handed out since construction or the last `reset`.
    pub total_allocated: u64,
    /// Total bytes returned since construction or the last `reset`.
    pub total_freed: u64,
    /// Bytes currently outstanding.
    pub current_usage: u64,
    /// High-water mark of `current_usage`.
    pub peak_usage: u64,
    /// Number of successful allocations.
    pub allocation_count: u64,
    /// Number of deallocations.
    pub deallocation_count: u64,
}

impl MemoryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful allocation of `size` bytes.
    #[inline]
    pub fn add_allocation(&mut self, size: u64) {
        self.total_allocated += size;
        self.current_usage += size;
        self.allocation_count += 1;
        if self.current_usage > self.peak_usage {
            self.peak_usage = self.current_usage;
        }
    }

    /// Records a deallocation of `size` bytes.
    ///
    /// Caller contract: `size` must not exceed the outstanding usage. This is
    /// a contract violation on the caller's side, not a recoverable state.
    #[inline]
    pub fn add_deallocation(&mut self, size: u64) {
        debug_assert!(size <= self.current_usage, "freed more than was allocated");
        self.total_freed += size;
        self.current_usage -= size;
        self.deallocation_count += 1;
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
