//! Measures the overhead of the timer operations themselves.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lap_time::{DefaultTimer, Nanoseconds, Timer};

fn timer_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("lap_time");

    group.bench_function("start_stop_f64_seconds", |b| {
        let mut timer = DefaultTimer::new();

        b.iter(|| {
            timer.start();
            black_box(timer.stop());
        });
    });

    group.bench_function("start_stop_u64_nanoseconds", |b| {
        let mut timer = Timer::<Nanoseconds, u64>::new();

        b.iter(|| {
            timer.start();
            black_box(timer.stop());
        });
    });

    group.bench_function("latency_empty", |b| {
        b.iter(|| black_box(lap_time::latency(|| black_box(42))));
    });

    group.finish();
}

criterion_group!(benches, timer_overhead);
criterion_main!(benches);
