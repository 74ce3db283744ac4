//! Benchmarks for the NoxChrono stopwatch
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use noxchrono::timer::{format_hms, ElapsedTimer};
use std::time::Duration;

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for frames in [60u64, 3600, 216_000] {
        group.throughput(Throughput::Elements(frames));

        group.bench_function(format!("frames_{}", frames), |b| {
            b.iter(|| {
                let mut timer = ElapsedTimer::new();
                let token = timer.start().unwrap();
                for i in 0..frames {
                    timer.tick(token, black_box(Duration::from_micros(i * 16_667)));
                }
                timer.accumulated_ms()
            })
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    c.bench_function("format_hms", |b| {
        b.iter(|| format_hms(black_box(3_723_000)))
    });
}

criterion_group!(benches, bench_tick, bench_format);
criterion_main!(benches);
