// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `slideme` crate.
//!
//! These drive a `Slider` the way a host would: layout, pointer gestures,
//! animation frames and painting, checking the announced values along the way.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size};
use slideme::{
    ConfigError, Interaction, MeasureSpec, Orientation, PointerAction, PointerEvent, Position,
    Slider, SliderConfig, TOOLTIP_ANIMATION_MS, TickConfig, TooltipAnimation, TooltipConfig,
};

const EXTENT: Size = Size::new(200.0, 100.0);

fn quarters() -> SliderConfig {
    SliderConfig::new(0, 100).with_tick_interval(25)
}

fn with_tooltip(config: SliderConfig) -> SliderConfig {
    config.with_tooltip(TooltipConfig {
        visible: true,
        ..TooltipConfig::default()
    })
}

/// Builds a slider that records every announced value.
fn recording(config: SliderConfig) -> (Slider, Rc<RefCell<Vec<i32>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut slider = Slider::new(config).unwrap();
    let sink = Rc::clone(&seen);
    slider.set_value_change_listener(move |v| sink.borrow_mut().push(v));
    (slider, seen)
}

/// Lays out and paints once, then forgets the initial announcement.
fn settled(config: SliderConfig, extent: Size) -> (Slider, Rc<RefCell<Vec<i32>>>) {
    let (mut slider, seen) = recording(config);
    slider.layout(extent);
    let _ = slider.frame();
    seen.borrow_mut().clear();
    (slider, seen)
}

#[test]
fn quarter_ticks() {
    let (slider, _) = settled(quarters(), EXTENT);
    let values: Vec<i32> = slider.ticks().iter().map(|t| t.value).collect();
    assert_eq!(values, [0, 25, 50, 75, 100]);
    let coords: Vec<f64> = slider.ticks().iter().map(|t| t.coordinate_main).collect();
    assert_eq!(coords, [20.0, 60.0, 100.0, 140.0, 180.0]);
}

#[test]
fn uneven_interval_is_fatal() {
    let err = Slider::new(SliderConfig::new(0, 100).with_tick_interval(30)).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidTickInterval {
            value_from: 0,
            value_to: 100,
            tick_interval: 30
        }
    );
}

#[test]
fn clashing_label_and_tooltip_sides_are_fatal() {
    let config = with_tooltip(quarters()).with_tick(TickConfig {
        label_visible: true,
        label_position: Position::Top,
        interval: 25,
        ..TickConfig::default()
    });
    assert!(matches!(
        Slider::new(config),
        Err(ConfigError::IncompatiblePositions { .. })
    ));
}

#[test]
fn release_snaps_to_nearest_tick() {
    let (mut slider, seen) = settled(quarters(), EXTENT);
    slider.on_pointer_down(Point::new(100.0, 50.0), 0);
    assert_eq!(slider.on_pointer_up(Point::new(100.0, 50.0), 10), Some(50));
    assert_eq!(*seen.borrow(), [50]);

    slider.on_pointer_down(Point::new(115.0, 50.0), 20);
    assert_eq!(slider.on_pointer_up(Point::new(115.0, 50.0), 30), Some(50));
    slider.on_pointer_down(Point::new(125.0, 50.0), 40);
    assert_eq!(slider.on_pointer_up(Point::new(125.0, 50.0), 50), Some(75));
}

#[test]
fn midpoint_release_prefers_lower_value() {
    let (mut slider, _) = settled(quarters(), EXTENT);
    slider.on_pointer_down(Point::new(80.0, 50.0), 0);
    assert_eq!(slider.on_pointer_up(Point::new(80.0, 50.0), 10), Some(25));
}

#[test]
fn invalid_default_position_falls_back_to_first_tick() {
    let (mut slider, seen) = recording(quarters().with_default_thumb_position(0));
    slider.layout(EXTENT);
    let frame = slider.frame();
    assert_eq!(*seen.borrow(), [0]);
    assert_eq!(frame.thumb_main(), 20.0);

    let (mut slider, seen) = recording(quarters().with_default_thumb_position(6));
    slider.layout(EXTENT);
    let _ = slider.frame();
    assert_eq!(*seen.borrow(), [0]);

    let (mut slider, seen) = recording(quarters().with_default_thumb_position(5));
    slider.layout(EXTENT);
    let _ = slider.frame();
    assert_eq!(*seen.borrow(), [100]);
}

#[test]
fn press_drag_release() {
    let (mut slider, seen) = settled(with_tooltip(quarters()), EXTENT);

    slider.handle_pointer(PointerEvent::new(PointerAction::Down, Point::new(50.0, 50.0), 0));
    assert_eq!(slider.interaction(), Interaction::Pressed);
    assert!(matches!(slider.animation(), TooltipAnimation::Showing { .. }));

    let rev = slider.revision();
    let announced =
        slider.handle_pointer(PointerEvent::new(PointerAction::Move, Point::new(90.0, 50.0), 8));
    assert_eq!(announced, None);
    assert_eq!(slider.interaction(), Interaction::Dragging);
    assert!(slider.revision() > rev);
    assert!(seen.borrow().is_empty());
    assert_eq!(slider.frame().thumb_main(), 90.0);

    let announced =
        slider.handle_pointer(PointerEvent::new(PointerAction::Up, Point::new(90.0, 50.0), 16));
    assert_eq!(announced, Some(50));
    assert_eq!(*seen.borrow(), [50]);
    assert_eq!(slider.interaction(), Interaction::Idle);
    assert!(matches!(slider.animation(), TooltipAnimation::Hiding { .. }));
    assert_eq!(slider.thumb_main(), 100.0);
    assert_eq!(slider.selected_tick().value, 50);
}

#[test]
fn drag_is_clamped_onto_the_track() {
    let (mut slider, _) = settled(quarters(), EXTENT);
    slider.on_pointer_down(Point::new(100.0, 50.0), 0);
    slider.on_pointer_move(Point::new(-40.0, 50.0));
    assert_eq!(slider.thumb_main(), 20.0);
    slider.on_pointer_move(Point::new(500.0, 50.0));
    assert_eq!(slider.thumb_main(), 180.0);
    let frame = slider.frame();
    assert_eq!(frame.second_track.line.p1, Point::new(180.0, 50.0));
    assert_eq!(slider.on_pointer_up(Point::new(500.0, 50.0), 10), Some(100));
}

#[test]
fn vertical_slider_grows_upwards() {
    let extent = Size::new(100.0, 420.0);
    let config = with_tooltip(quarters().with_orientation(Orientation::Vertical));
    let (mut slider, seen) = recording(config);
    assert_eq!(
        slider.measure(MeasureSpec::unspecified(), MeasureSpec::exact(420.0)),
        extent
    );
    slider.layout(extent);
    let frame = slider.frame();
    assert_eq!(*seen.borrow(), [0]);
    assert_eq!(frame.thumb.center, Point::new(50.0, 400.0));
    assert_eq!(slider.config().tooltip.position, Position::Left);

    slider.on_pointer_down(Point::new(50.0, 30.0), 0);
    slider.on_animation_frame(TOOLTIP_ANIMATION_MS);
    let tooltip = slider.frame().tooltip.unwrap();
    assert_eq!(tooltip.anchor, Point::new(50.0, 30.0));
    assert_eq!(tooltip.circle_center, Point::new(2.0, 30.0));
    assert_eq!(tooltip.value, 100);

    assert_eq!(slider.on_pointer_up(Point::new(50.0, 30.0), 400), Some(100));
    assert_eq!(slider.thumb_main(), 20.0);
}

#[test]
fn tooltip_grows_and_shrinks() {
    let (mut slider, _) = settled(with_tooltip(quarters()), EXTENT);
    assert_eq!(slider.tooltip_width(), 0.0);

    slider.on_pointer_down(Point::new(100.0, 50.0), 1_000);
    assert!(slider.on_animation_frame(1_150));
    assert_eq!(slider.tooltip_width(), 24.0);
    assert!(!slider.on_animation_frame(1_300));
    assert_eq!(slider.tooltip_width(), 48.0);
    assert_eq!(slider.tooltip_text_size(), 14.0);

    slider.on_pointer_up(Point::new(100.0, 50.0), 2_000);
    assert!(slider.on_animation_frame(2_075));
    assert_eq!(slider.tooltip_width(), 36.0);
    assert!(slider.frame().tooltip.is_some());
    assert!(!slider.on_animation_frame(2_300));
    assert_eq!(slider.tooltip_width(), 0.0);
    assert!(slider.frame().tooltip.is_none());
}

#[test]
fn new_press_supersedes_hide() {
    let (mut slider, _) = settled(with_tooltip(quarters()), EXTENT);
    slider.on_pointer_down(Point::new(100.0, 50.0), 0);
    slider.on_pointer_up(Point::new(100.0, 50.0), 300);
    slider.on_animation_frame(400);
    slider.on_pointer_down(Point::new(140.0, 50.0), 400);
    slider.on_animation_frame(400);
    assert_eq!(slider.tooltip_width(), 0.0);
    slider.on_animation_frame(550);
    assert_eq!(slider.tooltip_width(), 24.0);
}

#[test]
fn hidden_tooltip_never_paints() {
    let (mut slider, _) = settled(quarters(), EXTENT);
    slider.on_pointer_down(Point::new(100.0, 50.0), 0);
    slider.on_animation_frame(300);
    assert!(slider.frame().tooltip.is_none());
}

#[test]
fn programmatic_moves() {
    let (mut slider, seen) = settled(quarters(), EXTENT);
    let rev = slider.revision();
    assert!(slider.set_thumb_position(75));
    assert_eq!(slider.thumb_main(), 140.0);
    assert_eq!(slider.selected_tick().value, 75);
    assert!(slider.revision() > rev);

    let rev = slider.revision();
    assert!(!slider.set_thumb_position(60));
    assert_eq!(slider.thumb_main(), 140.0);
    assert_eq!(slider.revision(), rev);
    assert!(seen.borrow().is_empty());
}

#[test]
fn reset_announces_the_default_again() {
    let (mut slider, seen) = settled(quarters().with_default_thumb_position(2), EXTENT);
    slider.on_pointer_down(Point::new(180.0, 50.0), 0);
    slider.on_pointer_up(Point::new(180.0, 50.0), 10);
    assert_eq!(*seen.borrow(), [100]);

    slider.reset_thumb_position();
    assert_eq!(slider.selected_tick().value, 25);
    let frame = slider.frame();
    assert_eq!(*seen.borrow(), [100, 25]);
    assert_eq!(frame.thumb_main(), 60.0);
}

#[test]
fn programmatic_move_after_reset_is_announced_by_next_frame() {
    let (mut slider, seen) = recording(quarters().with_default_thumb_position(2));
    slider.layout(EXTENT);
    let _ = slider.frame();
    assert_eq!(*seen.borrow(), [25]);

    slider.reset_thumb_position();
    assert!(slider.set_thumb_position(75));
    let frame = slider.frame();
    assert_eq!(*seen.borrow(), [25, 75]);
    assert_eq!(frame.thumb_main(), 140.0);
    assert_eq!(slider.selected_tick().value, 75);

    let _ = slider.frame();
    assert_eq!(*seen.borrow(), [25, 75]);
}

#[test]
fn press_before_first_frame_still_announces_initial_value() {
    let (mut slider, seen) = recording(quarters().with_default_thumb_position(2));
    slider.layout(EXTENT);
    slider.on_pointer_down(Point::new(140.0, 50.0), 0);
    let frame = slider.frame();
    assert_eq!(*seen.borrow(), [25]);
    assert_eq!(frame.thumb_main(), 140.0);

    assert_eq!(slider.on_pointer_up(Point::new(140.0, 50.0), 10), Some(75));
    assert_eq!(*seen.borrow(), [25, 75]);
    let _ = slider.frame();
    assert_eq!(*seen.borrow(), [25, 75]);
}

#[test]
fn hiding_resets_without_redraw() {
    let (mut slider, seen) = settled(with_tooltip(quarters()), EXTENT);
    slider.on_pointer_down(Point::new(140.0, 50.0), 0);
    slider.on_animation_frame(150);

    let rev = slider.revision();
    slider.on_visibility_changed(false);
    assert_eq!(slider.revision(), rev);
    assert_eq!(slider.interaction(), Interaction::Idle);
    assert_eq!(slider.tooltip_width(), 0.0);
    assert_eq!(slider.selected_tick().value, 0);

    slider.on_visibility_changed(true);
    assert_eq!(slider.revision(), rev);
    let _ = slider.frame();
    assert_eq!(*seen.borrow(), [0]);
}
