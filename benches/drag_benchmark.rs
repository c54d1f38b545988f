//! Drag hot-path benchmarks.
//!
//! Measures per-sample cost of `apply_drag_delta` and full gesture replays.
//!
//! Run with: cargo bench --bench drag_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swipeable::integration::replay;
use swipeable::model::{Side, SwipeConfig};
use swipeable::script::GestureStep;
use swipeable::state::DragStateMachine;

/// A back-and-forth gesture of `samples` drag steps followed by a release and settle.
fn gesture(samples: usize) -> Vec<GestureStep> {
    let mut steps = vec![GestureStep::Reset { width: 1080 }, GestureStep::Begin];
    steps.extend((0..samples).map(|i| GestureStep::Drag {
        dx: if (i / 50) % 2 == 0 { -7 } else { 7 },
        left: None,
    }));
    steps.push(GestureStep::Release { velocity: -1.5 });
    steps.push(GestureStep::Settle);
    steps
}

fn bench_drag_delta(c: &mut Criterion) {
    let config = SwipeConfig::new(Side::Left, 0.5).unwrap();

    c.bench_function("apply_drag_delta", |b| {
        let mut machine = DragStateMachine::new(config);
        machine.reset_layout(1080);
        machine.begin_drag();
        let mut dx = -3;
        b.iter(|| {
            // Sweep the left side back and forth across its threshold
            if machine.offset() >= 0 {
                dx = -3;
            } else if machine.offset() <= -machine.horizontal_drag_range() {
                dx = 3;
            }
            let proposed = machine.offset() + dx;
            black_box(machine.apply_drag_delta(black_box(dx), proposed))
        });
    });
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");
    let config = SwipeConfig::new(Side::Right, 0.75).unwrap();

    for samples in [100usize, 1_000, 10_000] {
        let steps = gesture(samples);
        group.bench_with_input(BenchmarkId::from_parameter(samples), &steps, |b, steps| {
            b.iter(|| {
                let mut machine = DragStateMachine::new(config);
                black_box(replay(&mut machine, steps))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag_delta, bench_replay);
criterion_main!(benches);
