//! # rune-core
//!
//! Memory-management foundation for the Rune tool server.
//! Built with safety, performance, and maintainability as primary design constraints.
//!
//! ### Expectations (Production):
//! - O(1) bulk reclamation of request-scoped memory
//! - No per-object free traffic on the hot path
//! - Allocation accounting cheap enough to leave on in production
//!
//! ### Key Submodules:
//! - `alloc`: backing-allocator capability, tracking decorator, arena, object pool,
//!   and the memory manager composing them
//! - `error`: allocation failure types
//!
//! ### Future:
//! - NUMA-aware chunk placement for the arena

pub mod alloc;
pub mod error;

pub mod prelude {
    pub use crate::alloc::*;
    pub use crate::error::*;
}

pub use error::AllocError;
