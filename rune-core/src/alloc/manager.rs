//! ## rune-core::alloc::manager
//! **Facade composing stats, tracking, and arena**
//!
//! One `MemoryManager` is constructed per process or connection from the
//! backing allocator the host supplies. Callers pick a capability by
//! lifetime: long-lived or cross-boundary data goes through the tracked
//! allocator (individually freed, monitored), request-scoped data through
//! the arena (reclaimed in bulk at the request boundary).

use std::sync::Arc;

use parking_lot::Mutex;

use crate::alloc::arena::Arena;
use crate::alloc::backing::RawAllocator;
use crate::alloc::stats::MemoryStats;
use crate::alloc::tracking::TrackingAllocator;

/// Owns one stats instance, one tracking allocator bound to it, and one
/// arena, all over the same backing allocator.
///
/// The stats lock is owned by this instance; there is no process-wide
/// singleton. Aggregate reporting across managers is the caller's explicit
/// opt-in via [`stats_handle`](Self::stats_handle).
pub struct MemoryManager<A: RawAllocator + Clone> {
    stats: Arc<Mutex<MemoryStats>>,
    tracked: TrackingAllocator<A>,
    arena: Arena<A>,
}

impl<A: RawAllocator + Clone> MemoryManager<A> {
    pub fn new(backing: A) -> Self {
        let stats = Arc::new(Mutex::new(MemoryStats::new()));
        let tracked = TrackingAllocator::new(backing.clone(), Arc::clone(&stats));
        let arena = Arena::new(backing);
        Self {
            stats,
            tracked,
            arena,
        }
    }

    /// Capability for long-lived allocations: individually freed, counted.
    pub fn tracked(&self) -> &TrackingAllocator<A> {
        &self.tracked
    }

    /// Capability for request-scoped allocations: freed in bulk by
    /// [`reset_arena`](Self::reset_arena).
    pub fn arena(&mut self) -> &mut Arena<A> {
        &mut self.arena
    }

    /// O(1) reclamation of all arena memory. Call exactly once per request
    /// boundary, after the request's output has been fully produced.
    pub fn reset_arena(&mut self) {
        self.arena.reset();
    }

    /// Live snapshot of the tracked counters as of this call.
    pub fn stats(&self) -> MemoryStats {
        *self.stats.lock()
    }

    /// Shared handle to the live stats, for external readers or aggregate
    /// registries.
    pub fn stats_handle(&self) -> Arc<Mutex<MemoryStats>> {
        Arc::clone(&self.stats)
    }

    /// Total bytes the arena has reserved from the backing allocator.
    pub fn arena_capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Coarse zero-balance check: true iff no tracked bytes are outstanding.
    /// Not a per-object leak diagnosis.
    pub fn check_leaks(&self) -> bool {
        self.stats.lock().current_usage == 0
    }
}
