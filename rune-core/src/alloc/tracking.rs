//! ## rune-core::alloc::tracking
//! **Statistics-recording allocator decorator**
//!
//! Wraps any [`RawAllocator`] and updates a shared [`MemoryStats`] under a
//! lock on every successful operation. Backing failures pass through
//! untouched, with no stats mutation. The lock covers only the stats update;
//! the backing allocator must be independently safe if shared across threads.

use std::alloc::Layout;
use std::cmp::Ordering;
use std::ptr::NonNull;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::alloc::backing::{byte_layout, RawAllocator};
use crate::alloc::stats::MemoryStats;
use crate::error::AllocError;

/// Decorator recording allocation traffic around a backing allocator.
///
/// The stats instance is externally shared: clone the handle out via
/// [`stats_handle`](Self::stats_handle) for any other reader.
pub struct TrackingAllocator<A: RawAllocator> {
    backing: A,
    stats: Arc<Mutex<MemoryStats>>,
}

impl<A: RawAllocator> TrackingAllocator<A> {
    /// Binds `backing` to a shared stats instance.
    pub fn new(backing: A, stats: Arc<Mutex<MemoryStats>>) -> Self {
        Self { backing, stats }
    }

    /// Shared handle to the live stats this allocator updates.
    pub fn stats_handle(&self) -> Arc<Mutex<MemoryStats>> {
        Arc::clone(&self.stats)
    }

    /// Copy of the stats as of this call.
    pub fn snapshot(&self) -> MemoryStats {
        *self.stats.lock()
    }

    /// Allocates `len` raw bytes (align 1). Convenience for byte-buffer
    /// callers; pairs with [`free_bytes`](Self::free_bytes).
    pub fn alloc_bytes(&self, len: usize) -> Result<NonNull<u8>, AllocError> {
        self.allocate(byte_layout(len)?)
    }

    /// Returns a buffer obtained from [`alloc_bytes`](Self::alloc_bytes).
    ///
    /// # Safety
    /// `ptr` must come from `alloc_bytes(len)` on this allocator and must not
    /// be used afterwards.
    pub unsafe fn free_bytes(&self, ptr: NonNull<u8>, len: usize) {
        debug_assert!(byte_layout(len).is_ok(), "len was validated by alloc_bytes");
        // SAFETY: alloc_bytes already proved (len, 1) a valid layout.
        let layout = Layout::from_size_align_unchecked(len, 1);
        self.free(ptr, layout);
    }
}

impl<A: RawAllocator> RawAllocator for TrackingAllocator<A> {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        let ptr = self.backing.allocate(layout)?;
        self.stats.lock().add_allocation(layout.size() as u64);
        trace!(size = layout.size(), "tracked allocation");
        Ok(ptr)
    }

    unsafe fn resize(&self, ptr: NonNull<u8>, layout: Layout, new_len: usize) -> bool {
        if !self.backing.resize(ptr, layout, new_len) {
            return false;
        }
        match new_len.cmp(&layout.size()) {
            Ordering::Greater => {
                let delta = (new_len - layout.size()) as u64;
                self.stats.lock().add_allocation(delta);
            }
            Ordering::Less => {
                let delta = (layout.size() - new_len) as u64;
                self.stats.lock().add_deallocation(delta);
            }
            Ordering::Equal => {}
        }
        true
    }

    unsafe fn free(&self, ptr: NonNull<u8>, layout: Layout) {
        // Bookkeeping first; the forward happens unconditionally either way.
        self.stats.lock().add_deallocation(layout.size() as u64);
        trace!(size = layout.size(), "tracked free");
        self.backing.free(ptr, layout);
    }
}
