//! ## rune-core::alloc
//! **Composable allocators for request-scoped and tracked memory**
//!
//! ### Expectations (Production):
//! - One `MemoryManager` per process or connection
//! - One arena per in-flight request, reset at the request boundary
//! - Tracked allocations for anything outliving a single request
//!
//! ### Key Submodules:
//! - `backing`: the `RawAllocator` capability every composed allocator delegates to
//! - `stats`: allocation traffic counters
//! - `tracking`: decorator recording stats around any backing allocator
//! - `arena`: bump allocator with O(1) bulk reset
//! - `pool`: reusable-object cache for hot-path types
//! - `manager`: facade composing stats, tracking, and arena
//!
//! ### Future:
//! - NUMA-aware chunk placement

pub mod arena;
pub mod backing;
pub mod manager;
pub mod pool;
pub mod stats;
pub mod tracking;

pub use arena::Arena;
pub use backing::{RawAllocator, SystemAllocator};
pub use manager::MemoryManager;
pub use pool::{ObjectPool, PoolStats};
pub use stats::MemoryStats;
pub use tracking::TrackingAllocator;
