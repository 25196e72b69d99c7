//! ## rune-core::alloc::backing
//! **The backing-allocator capability**
//!
//! Every composed allocator in this crate delegates real memory acquisition
//! and release to a `RawAllocator`. The hosting process supplies exactly one
//! implementation at startup; `SystemAllocator` over `std::alloc` is the
//! default choice.

use std::alloc::Layout;
use std::ptr::NonNull;

use crate::error::AllocError;

/// Capability interface satisfied by any general-purpose allocator.
///
/// `resize` is strictly in place: the pointer never moves, and on success the
/// buffer's layout size becomes `new_len` (subsequent `free` must pass the
/// new layout). Implementations that cannot grow or shrink in place simply
/// return `false`; that is not an error.
pub trait RawAllocator {
    /// Allocates memory for `layout`. Zero-sized layouts are rejected with
    /// `AllocError::InvalidLayout`.
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

    /// Attempts to resize `ptr` in place to `new_len` bytes.
    ///
    /// # Safety
    /// `ptr` must have been returned by `allocate` on this allocator with
    /// `layout` (adjusted by any prior successful resizes).
    unsafe fn resize(&self, ptr: NonNull<u8>, layout: Layout, new_len: usize) -> bool;

    /// Returns `ptr` to the allocator.
    ///
    /// # Safety
    /// Same provenance requirement as [`RawAllocator::resize`]; `ptr` must
    /// not be used afterwards.
    unsafe fn free(&self, ptr: NonNull<u8>, layout: Layout);
}

impl<A: RawAllocator + ?Sized> RawAllocator for &A {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        (**self).allocate(layout)
    }

    unsafe fn resize(&self, ptr: NonNull<u8>, layout: Layout, new_len: usize) -> bool {
        (**self).resize(ptr, layout, new_len)
    }

    unsafe fn free(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).free(ptr, layout)
    }
}

/// Builds a `Layout` for `len` raw bytes (align 1).
pub(crate) fn byte_layout(len: usize) -> Result<Layout, AllocError> {
    Layout::from_size_align(len, 1).map_err(|_| AllocError::InvalidLayout { size: len, align: 1 })
}

/// Backing allocator over the process global allocator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl RawAllocator for SystemAllocator {
    fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            return Err(AllocError::InvalidLayout {
                size: 0,
                align: layout.align(),
            });
        }
        // SAFETY: layout has non-zero size.
        let ptr = unsafe { std::alloc::alloc(layout) };
        NonNull::new(ptr).ok_or(AllocError::OutOfMemory {
            size: layout.size(),
            align: layout.align(),
        })
    }

    unsafe fn resize(&self, _ptr: NonNull<u8>, layout: Layout, new_len: usize) -> bool {
        // libc malloc exposes no in-place resize, and `dealloc` demands the
        // original layout. Only a no-op resize can be honored.
        new_len == layout.size()
    }

    unsafe fn free(&self, ptr: NonNull<u8>, layout: Layout) {
        std::alloc::dealloc(ptr.as_ptr(), layout);
    }
}
