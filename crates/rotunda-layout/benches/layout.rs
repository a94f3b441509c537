//! Benchmark tests for arc layout passes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rotunda_core::Size;
use rotunda_layout::{ArcLayoutEngine, HostSnapshot};

fn bench_prepare(c: &mut Criterion) {
    let viewport = Size::new(390.0, 844.0);
    let mut group = c.benchmark_group("prepare");

    for item_count in [10usize, 1_000, 100_000] {
        let host = HostSnapshot::new(item_count, viewport);
        let range = item_count as f32 * 133.0 - viewport.width;
        let mid = host.scrolled_to(range / 2.0);

        group.bench_with_input(BenchmarkId::from_parameter(item_count), &mid, |b, host| {
            let mut engine = ArcLayoutEngine::with_defaults();
            b.iter(|| engine.prepare(black_box(host)).map(<[_]>::len));
        });
    }

    group.finish();
}

fn bench_scroll_sweep(c: &mut Criterion) {
    let viewport = Size::new(320.0, 480.0);
    let host = HostSnapshot::new(500, viewport);

    c.bench_function("scroll_sweep_500", |b| {
        let mut engine = ArcLayoutEngine::with_defaults();
        b.iter(|| {
            let mut total = 0;
            for step in 0..100 {
                let snapshot = host.scrolled_to(step as f32 * 600.0);
                if let Ok(placements) = engine.prepare(&snapshot) {
                    total += placements.len();
                }
            }
            black_box(total)
        });
    });
}

criterion_group!(benches, bench_prepare, bench_scroll_sweep);
criterion_main!(benches);
