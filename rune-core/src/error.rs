use thiserror::Error;

/// Allocation failure. The only error kind this layer produces; callers own
/// any retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    #[error("backing allocator could not provide {size} bytes (align {align})")]
    OutOfMemory { size: usize, align: usize },

    #[error("invalid allocation layout: size {size}, align {align}")]
    InvalidLayout { size: usize, align: usize },
}
