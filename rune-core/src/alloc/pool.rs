//! ## rune-core::alloc::pool
//! **Reusable-object cache for hot-path types**
//!
//! A generic LIFO pool of heap objects with a caller-supplied reset routine.
//! Between `acquire` and `release` the caller exclusively owns the object;
//! the pool owns it otherwise. Objects are reset on release only: the
//! acquire hot path stays branch-light because pooled objects are already in
//! canonical state.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::Serialize;

/// `{created, available}` snapshot of a pool. Not atomic with concurrent
/// acquire/release beyond the read lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    /// Objects cold-constructed over the pool's lifetime.
    pub created: u64,
    /// Objects currently parked in the pool.
    pub available: u64,
}

/// Cache of reusable objects of one type.
///
/// The reset function must return any `T` to its canonical zero state; cold
/// construction also runs it once, so canonical state never depends on
/// `Default` agreeing with it.
///
/// Dropping the pool destroys only parked objects. Checked-out objects
/// belong to their holders and are never touched.
pub struct ObjectPool<T: Default> {
    available: Mutex<Vec<T>>,
    created: AtomicU64,
    reset: fn(&mut T),
}

impl<T: Default> ObjectPool<T> {
    pub fn new(reset: fn(&mut T)) -> Self {
        Self {
            available: Mutex::new(Vec::new()),
            created: AtomicU64::new(0),
            reset,
        }
    }

    /// Pops the most-recently-released object (LIFO, favors cache locality),
    /// or cold-constructs one if the pool is empty.
    pub fn acquire(&self) -> T {
        if let Some(obj) = self.available.lock().pop() {
            return obj;
        }
        let mut obj = T::default();
        (self.reset)(&mut obj);
        self.created.fetch_add(1, Ordering::Relaxed);
        obj
    }

    /// Resets `obj` and parks it for reuse.
    ///
    /// If growing the list storage fails, the object is dropped instead of
    /// leaked; losing a pooled object is harmless, leaking it is not.
    pub fn release(&self, mut obj: T) {
        (self.reset)(&mut obj);
        let mut available = self.available.lock();
        if available.try_reserve(1).is_err() {
            return;
        }
        available.push(obj);
    }

    /// Current counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            created: self.created.load(Ordering::Relaxed),
            available: self.available.lock().len() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct ScratchBuffer {
        data: Vec<u8>,
        cursor: usize,
    }

    fn reset_scratch(buf: &mut ScratchBuffer) {
        buf.data.clear();
        buf.cursor = 0;
    }

    fn pool() -> ObjectPool<ScratchBuffer> {
        ObjectPool::new(reset_scratch)
    }

    #[test]
    fn test_pool_cold_acquire_counts() {
        let pool = pool();
        let obj = pool.acquire();
        assert_eq!(
            pool.stats(),
            PoolStats {
                created: 1,
                available: 0
            }
        );

        pool.release(obj);
        assert_eq!(
            pool.stats(),
            PoolStats {
                created: 1,
                available: 1
            }
        );

        let _obj = pool.acquire();
        assert_eq!(
            pool.stats(),
            PoolStats {
                created: 1,
                available: 0
            }
        );
    }

    #[test]
    fn test_pool_release_restores_canonical_state() {
        let pool = pool();
        let mut obj = pool.acquire();
        obj.data.extend_from_slice(b"leftover request state");
        obj.cursor = 17;
        pool.release(obj);

        let obj = pool.acquire();
        assert!(obj.data.is_empty());
        assert_eq!(obj.cursor, 0);
    }

    #[test]
    fn test_pool_lifo_reuse() {
        let pool = pool();
        let a = pool.acquire();
        let b = pool.acquire();
        assert_eq!(pool.stats().created, 2);

        pool.release(a);
        pool.release(b);
        // Two warm objects serve two acquires without new construction.
        let _x = pool.acquire();
        let _y = pool.acquire();
        assert_eq!(
            pool.stats(),
            PoolStats {
                created: 2,
                available: 0
            }
        );
    }

    #[test]
    fn test_pool_drop_leaves_checked_out_objects() {
        let pool = pool();
        let mut held = pool.acquire();
        pool.release(pool.acquire());
        drop(pool);

        // The checked-out object survives the pool and stays usable.
        held.data.push(1);
        assert_eq!(held.data, vec![1]);
    }

    #[test]
    fn test_pool_concurrent_churn() {
        use std::sync::Arc;
        use std::thread;

        let pool = Arc::new(pool());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let pool = Arc::clone(&pool);
            handles.push(thread::spawn(move || {
                for i in 0..100u8 {
                    let mut obj = pool.acquire();
                    assert!(obj.data.is_empty());
                    obj.data.push(i);
                    pool.release(obj);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let stats = pool.stats();
        assert_eq!(stats.available, stats.created);
        assert!(stats.created <= 8);
    }
}
