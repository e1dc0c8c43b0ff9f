// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;
use slideme_axis::{Orientation, compute_ticks, locate};

const EXTENT: Size = Size::new(4_000.0, 100.0);

fn bench_compute_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticks/compute");

    // Up to 16 ticks stay inline; the larger counts spill to the heap.
    for count in [5_i32, 16, 101, 1_001] {
        let value_to = count - 1;
        group.throughput(Throughput::Elements(count.unsigned_abs().into()));
        group.bench_with_input(BenchmarkId::from_parameter(count), &value_to, |b, &to| {
            b.iter(|| {
                black_box(compute_ticks(
                    0,
                    black_box(to),
                    1,
                    EXTENT,
                    10.0,
                    Orientation::Horizontal,
                ))
            });
        });
    }

    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("ticks/locate");

    for count in [5_i32, 16, 101, 1_001] {
        let ticks = compute_ticks(0, count - 1, 1, EXTENT, 10.0, Orientation::Horizontal);
        // Touches between ticks, spread over the whole track.
        let touches: Vec<f64> = (0..64).map(|i| 20.0 + f64::from(i) * 61.7).collect();
        group.throughput(Throughput::Elements(touches.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &ticks, |b, ticks| {
            b.iter(|| {
                for &touch in &touches {
                    black_box(locate(ticks, black_box(touch)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_ticks, bench_locate);
criterion_main!(benches);
