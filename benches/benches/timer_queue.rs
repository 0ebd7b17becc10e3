// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_timing::TimerQueue;

fn bench_schedule_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/queue");

    for len in [16usize, 256, 4_096] {
        // Deadlines arrive out of order, like timers scheduled from unrelated widgets.
        let deadlines: Vec<u64> = (0..len as u64).map(|i| (i * 7_919) % 10_007).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("schedule_drain", len),
            &deadlines,
            |b, deadlines| {
                b.iter(|| {
                    let mut queue = TimerQueue::new();
                    for (i, &deadline) in deadlines.iter().enumerate() {
                        queue.schedule(deadline, i);
                    }
                    black_box(queue.drain_due(u64::MAX).len());
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("schedule_cancel_half", len),
            &deadlines,
            |b, deadlines| {
                b.iter(|| {
                    let mut queue = TimerQueue::new();
                    let ids: Vec<_> = deadlines
                        .iter()
                        .map(|&deadline| queue.schedule(deadline, ()))
                        .collect();
                    for id in ids.iter().step_by(2) {
                        queue.cancel(*id);
                    }
                    black_box(queue.len());
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_schedule_and_drain);
criterion_main!(benches);
