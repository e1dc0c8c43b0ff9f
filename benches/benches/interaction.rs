// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use slideme::{Slider, SliderConfig, TickConfig, TooltipConfig};

fn slider() -> Slider {
    let config = SliderConfig::new(0, 100)
        .with_tick(TickConfig {
            visible: true,
            label_visible: true,
            interval: 5,
            ..TickConfig::default()
        })
        .with_tooltip(TooltipConfig {
            visible: true,
            ..TooltipConfig::default()
        });
    let mut slider = Slider::new(config).unwrap();
    slider.layout(Size::new(640.0, 100.0));
    let _ = slider.frame();
    slider
}

fn bench_gesture(c: &mut Criterion) {
    c.bench_function("interaction/press_drag_release", |b| {
        b.iter_batched(
            slider,
            |mut slider| {
                slider.on_pointer_down(Point::new(40.0, 50.0), 0);
                for step in 0..32_u32 {
                    slider.on_pointer_move(Point::new(40.0 + f64::from(step) * 17.0, 50.0));
                }
                black_box(slider.on_pointer_up(Point::new(584.0, 50.0), 500))
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_frame(c: &mut Criterion) {
    let mut slider = slider();
    slider.on_pointer_down(Point::new(300.0, 50.0), 0);
    slider.on_animation_frame(300);
    c.bench_function("interaction/frame_with_tooltip", |b| {
        b.iter(|| black_box(slider.frame()));
    });
}

criterion_group!(benches, bench_gesture, bench_frame);
criterion_main!(benches);
