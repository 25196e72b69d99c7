#[macro_use]
extern crate criterion;

use criterion::Criterion;

use rune_core::alloc::{Arena, MemoryManager, ObjectPool, SystemAllocator};

fn bench_arena_vs_tracked(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocation_throughput");

    for size in [64usize, 512, 4096] {
        group.throughput(criterion::Throughput::Bytes(size as u64));

        group.bench_function(format!("arena_{}", size), |b| {
            let mut arena = Arena::new(SystemAllocator);
            b.iter(|| {
                arena.alloc_bytes(size).unwrap();
                arena.reset();
            });
        });

        group.bench_function(format!("tracked_{}", size), |b| {
            let manager = MemoryManager::new(SystemAllocator);
            b.iter(|| {
                let ptr = manager.tracked().alloc_bytes(size).unwrap();
                unsafe { manager.tracked().free_bytes(ptr, size) };
            });
        });
    }
    group.finish();
}

fn bench_pool_acquire_release(c: &mut Criterion) {
    let pool: ObjectPool<Vec<u8>> = ObjectPool::new(Vec::clear);

    c.bench_function("pool_acquire_release", |b| {
        b.iter(|| {
            let mut buf = pool.acquire();
            buf.extend_from_slice(b"request scratch");
            pool.release(buf);
        });
    });
}

criterion_group!(benches, bench_arena_vs_tracked, bench_pool_acquire_release);
criterion_main!(benches);
