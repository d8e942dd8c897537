#![forbid(unsafe_code)]

use criterion::{Criterion, criterion_group, criterion_main};
use rangeslide_core::PointerPosition;
use rangeslide_web::{PointerButton, SliderPointerAdapter, SliderPointerConfig};
use rangeslide_widgets::{SliderConfig, ThumbId};
use std::hint::black_box;

fn pos(y: f64) -> PointerPosition {
    PointerPosition::new(0.0, y)
}

fn adapter() -> SliderPointerAdapter {
    SliderPointerAdapter::new(SliderConfig::default(), SliderPointerConfig::default())
        .expect("default adapter config should be valid")
}

fn bench_slider_pointer_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/web_pointer/lifecycle");

    group.bench_function("down_move_32_up", |b| {
        b.iter(|| {
            let mut adapter = adapter();
            let down = adapter.pointer_down(ThumbId::Low, 11, PointerButton::Primary, pos(4.0));
            black_box(down.log.sequence);
            for step in 0..32 {
                let dispatch = adapter.pointer_move(11, pos(5.0 + f64::from(step)));
                black_box(dispatch.change.map(|change| change.new));
            }
            let up = adapter.pointer_up(11, PointerButton::Primary, pos(40.0));
            black_box(up.listener_command);
        });
    });

    group.bench_function("two_pointer_move_120", |b| {
        b.iter(|| {
            let mut adapter = adapter();
            adapter.pointer_down(ThumbId::Low, 1, PointerButton::Primary, pos(0.0));
            adapter.pointer_down(ThumbId::High, 2, PointerButton::Primary, pos(0.0));
            for step in 0..120 {
                let delta = f64::from(step % 7) - 3.0;
                black_box(adapter.pointer_move(1, pos(delta)).change);
                black_box(adapter.pointer_move(2, pos(-delta)).change);
            }
            black_box(adapter.blur().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_slider_pointer_lifecycle);
criterion_main!(benches);
