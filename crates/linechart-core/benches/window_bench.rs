// File: crates/linechart-core/benches/window_bench.rs
// Purpose: Bench the per-frame hot path: windowing math and path-pool reuse.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linechart_core::window::visible_window;
use linechart_core::PathPool;

fn bench_visible_window(c: &mut Criterion) {
    c.bench_function("visible_window", |b| {
        b.iter(|| {
            let w = visible_window(
                black_box(50.0),
                black_box(1920.0),
                black_box(12_345.0),
                black_box(100_000),
            );
            black_box(w)
        })
    });
}

fn bench_path_pool_frame(c: &mut Criterion) {
    let mut pool = PathPool::new();
    c.bench_function("path_pool_frame", |b| {
        b.iter(|| {
            pool.reset_for_new_frame();
            for i in 0..16 {
                let id = pool.acquire();
                let path = pool.get_mut(id);
                path.move_to((0.0, 0.0));
                path.line_to((black_box(i as f32) * 10.0, 100.0));
            }
        })
    });
}

criterion_group!(benches, bench_visible_window, bench_path_pool_frame);
criterion_main!(benches);
