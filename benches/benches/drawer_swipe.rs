// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use overstory_drawer::{Drawer, DrawerConfig, RecordingHost, TransitionTarget};
use understory_event_state::history::PositionHistory;

fn swipe_points(samples: usize) -> Vec<Point> {
    (1..=samples)
        .map(|i| Point::new(100.0 + 2.0 * i as f64, 300.0 + (i % 3) as f64))
        .collect()
}

fn bench_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawer/swipe");

    // One full gesture: arm, cross the threshold, drag, release, settle.
    for samples in [8usize, 64, 512] {
        let points = swipe_points(samples);
        group.throughput(Throughput::Elements(samples as u64));
        group.bench_with_input(BenchmarkId::new("open", samples), &points, |b, points| {
            b.iter_batched(
                || {
                    (
                        Drawer::<u32>::new(DrawerConfig::default()),
                        RecordingHost::<u32>::new(),
                    )
                },
                |(mut drawer, mut host)| {
                    drawer.pointer_down(1, true, Point::new(100.0, 300.0), &mut host);
                    for &p in points {
                        drawer.pointer_move(1, p, &mut host);
                    }
                    drawer.pointer_up(1, 1_000, &mut host);
                    drawer.transition_end(TransitionTarget::Panel, &mut host);
                    black_box((drawer.open(), host.effects.len()));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_state/history");
    let points = swipe_points(1_024);
    group.throughput(Throughput::Elements(points.len() as u64));

    // Rolling window pushes dominate a drag's per-move cost.
    for capacity in [5usize, 8, 32] {
        group.bench_with_input(
            BenchmarkId::new("push", capacity),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let mut history = PositionHistory::new(capacity);
                    for &p in &points {
                        history.push(p);
                    }
                    black_box(history.net_delta());
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_swipe, bench_history);
criterion_main!(benches);
