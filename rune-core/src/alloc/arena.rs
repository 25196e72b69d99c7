//! ## rune-core::alloc::arena
//! **Bump allocator with O(1) bulk reset**
//!
//! The arena carves allocations out of chunks obtained from its backing
//! allocator and never frees them individually. `reset` returns the cursor to
//! the start of the first chunk, retaining every reserved chunk for reuse;
//! dropping the arena returns all chunks to the backing allocator.
//!
//! Hard aliasing contract: every pointer issued since construction or the
//! last `reset` is invalidated by the next `reset` or by drop. The intended
//! pattern is one arena per in-flight unit of work.

use std::alloc::Layout;
use std::ptr::NonNull;

use tracing::debug;

use crate::alloc::backing::RawAllocator;
use crate::error::AllocError;

/// Smallest chunk the arena will request from its backing allocator.
const MIN_CHUNK_SIZE: usize = 4096;

/// Alignment of every chunk base. Requests with larger alignment are placed
/// by aligning the cursor address inside the chunk.
const CHUNK_ALIGN: usize = 16;

struct Chunk {
    ptr: NonNull<u8>,
    layout: Layout,
}

/// Region allocator: many allocations, one bulk reclamation.
pub struct Arena<A: RawAllocator> {
    backing: A,
    chunks: Vec<Chunk>,
    /// Cursor: index of the chunk currently being bumped, offset within it.
    current: usize,
    offset: usize,
}

impl<A: RawAllocator> Arena<A> {
    /// Zero-capacity arena bound to `backing`. The first allocation reserves
    /// the first chunk.
    pub fn new(backing: A) -> Self {
        Self {
            backing,
            chunks: Vec::new(),
            current: 0,
            offset: 0,
        }
    }

    /// Bump-allocates `layout` from the current chunk, reusing already
    /// reserved chunks before requesting a new one from the backing
    /// allocator.
    ///
    /// The returned pointer is valid until the next [`reset`](Self::reset)
    /// or until the arena is dropped.
    pub fn alloc(&mut self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            return Err(AllocError::InvalidLayout {
                size: 0,
                align: layout.align(),
            });
        }

        while self.current < self.chunks.len() {
            if let Some(ptr) = self.bump(layout) {
                return Ok(ptr);
            }
            self.current += 1;
            self.offset = 0;
        }

        self.grow(layout)?;
        // The fresh chunk was sized to fit the request, alignment included.
        self.bump(layout).ok_or(AllocError::OutOfMemory {
            size: layout.size(),
            align: layout.align(),
        })
    }

    /// Allocates raw bytes with no particular alignment.
    pub fn alloc_bytes(&mut self, len: usize) -> Result<NonNull<u8>, AllocError> {
        let layout = Layout::from_size_align(len, 1)
            .map_err(|_| AllocError::InvalidLayout { size: len, align: 1 })?;
        self.alloc(layout)
    }

    /// Returns the cursor to the start of the first chunk. Reserved capacity
    /// is unchanged.
    ///
    /// Caller contract: all use of previously issued pointers must have
    /// ceased before calling this.
    pub fn reset(&mut self) {
        self.current = 0;
        self.offset = 0;
        debug!(capacity = self.capacity(), "arena reset");
    }

    /// Total reserved bytes across all chunks (capacity, not live usage).
    pub fn capacity(&self) -> usize {
        self.chunks.iter().map(|c| c.layout.size()).sum()
    }

    /// Tries to place `layout` in the cursor chunk, advancing the offset.
    fn bump(&mut self, layout: Layout) -> Option<NonNull<u8>> {
        let chunk = self.chunks.get(self.current)?;
        let base = chunk.ptr.as_ptr() as usize;
        let addr = base.checked_add(self.offset)?;
        let aligned = addr.checked_add(layout.align() - 1)? & !(layout.align() - 1);
        let end = aligned.checked_add(layout.size())?;
        if end > base + chunk.layout.size() {
            return None;
        }
        self.offset = end - base;
        // SAFETY: aligned lies within the chunk, which is non-null.
        Some(unsafe { NonNull::new_unchecked(aligned as *mut u8) })
    }

    /// Reserves a new chunk sized to fit `layout` and points the cursor at it.
    fn grow(&mut self, layout: Layout) -> Result<(), AllocError> {
        let last = self.chunks.last().map_or(0, |c| c.layout.size());
        // Geometric growth from a fixed floor, clamped up to the request.
        // Worst-case alignment padding is reserved alongside the payload.
        let need = layout
            .size()
            .checked_add(layout.align().saturating_sub(1))
            .ok_or(AllocError::InvalidLayout {
                size: layout.size(),
                align: layout.align(),
            })?;
        let size = need.max(MIN_CHUNK_SIZE).max(last.saturating_mul(2));

        let chunk_layout = Layout::from_size_align(size, CHUNK_ALIGN).map_err(|_| {
            AllocError::InvalidLayout {
                size,
                align: CHUNK_ALIGN,
            }
        })?;
        let ptr = self.backing.allocate(chunk_layout)?;
        self.chunks.push(Chunk {
            ptr,
            layout: chunk_layout,
        });
        self.current = self.chunks.len() - 1;
        self.offset = 0;
        debug!(chunk_size = size, chunks = self.chunks.len(), "arena grew");
        Ok(())
    }
}

impl<A: RawAllocator> Drop for Arena<A> {
    fn drop(&mut self) {
        for chunk in self.chunks.drain(..) {
            // SAFETY: each chunk was allocated from this backing allocator
            // with exactly this layout and is not referenced past drop.
            unsafe { self.backing.free(chunk.ptr, chunk.layout) };
        }
    }
}
