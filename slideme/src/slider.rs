// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider engine: runtime state and the interaction state machine.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Circle, Point, Size};
use slideme_axis::{
    MeasureSpec, Tick, TickList, circle_center, clamp_thumb_to_track, compute_ticks,
    default_thumb_tick, locate, measure, position_of_value, second_track_line, tooltip_anchor,
    tooltip_outline, track_line,
};
use slideme_style::ResolvedStyle;

use crate::animation::TooltipAnimation;
use crate::config::SliderConfig;
use crate::error::ConfigError;
use crate::frame::{SliderFrame, TickLabels, TickMarks, TooltipFrame, TrackStroke};

/// Callback invoked with each announced value.
pub type ValueListener = Box<dyn FnMut(i32)>;

/// Where a gesture currently is.
///
/// A release returns straight to [`Interaction::Idle`]; the tooltip hide
/// animation trails behind it without holding the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Interaction {
    /// No pointer is down.
    #[default]
    Idle,
    /// A pointer went down and has not moved yet.
    Pressed,
    /// A pointer is down and has moved.
    Dragging,
}

/// Kind of pointer event delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// Primary pointer pressed.
    Down,
    /// Secondary pointer pressed; handled like [`PointerAction::Down`].
    PointerDown,
    /// Pointer moved.
    Move,
    /// Primary pointer released.
    Up,
    /// Secondary pointer released; handled like [`PointerAction::Up`].
    PointerUp,
}

/// A pointer event in slider-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub action: PointerAction,
    /// Pointer location.
    pub position: Point,
    /// Event time in milliseconds, on the same clock as animation frames.
    pub time: u64,
}

impl PointerEvent {
    /// Creates an event.
    #[must_use]
    pub const fn new(action: PointerAction, position: Point, time: u64) -> Self {
        Self {
            action,
            position,
            time,
        }
    }
}

/// A headless tick-snapping slider.
///
/// The host drives it from its own event loop:
///
/// 1. [`Slider::measure`] and [`Slider::layout`] during layout,
/// 2. [`Slider::handle_pointer`] for input,
/// 3. [`Slider::on_animation_frame`] while it returns `true`,
/// 4. [`Slider::frame`] to paint whenever [`Slider::revision`] changed.
pub struct Slider {
    config: SliderConfig,
    style: ResolvedStyle,
    extent: Size,
    ticks: TickList,
    /// Pre-clamp thumb location; follows the pointer during a drag.
    thumb: Point,
    selected: Tick,
    first_draw: bool,
    /// A gesture or programmatic move placed the thumb while the first draw
    /// was pending.
    placed: bool,
    interaction: Interaction,
    animation: TooltipAnimation,
    tooltip_width: f64,
    tooltip_text_size: f64,
    revision: u64,
    listener: Option<ValueListener>,
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("config", &self.config)
            .field("extent", &self.extent)
            .field("ticks", &self.ticks.len())
            .field("thumb", &self.thumb)
            .field("selected", &self.selected)
            .field("first_draw", &self.first_draw)
            .field("placed", &self.placed)
            .field("interaction", &self.interaction)
            .field("animation", &self.animation)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Slider {
    /// Validates `config` and creates a slider.
    ///
    /// The derived style replaces the configured values it overrides, so
    /// [`Slider::config`] reports the thumb radius and label/tooltip sides
    /// actually in use.
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let style = ResolvedStyle::resolve(&config.style_inputs());
        let mut config = config;
        config.thumb.radius = style.thumb_radius;
        config.tick.label_position = style.tick_label_position;
        config.tooltip.position = style.tooltip_position;
        log::debug!(
            "slider {}..={} step {} ({:?}, {:?})",
            config.value_from,
            config.value_to,
            config.tick.interval,
            config.orientation,
            config.kind
        );
        Ok(Self {
            config,
            style,
            extent: Size::ZERO,
            ticks: TickList::new(),
            thumb: Point::ZERO,
            selected: Tick::synthetic_default(),
            first_draw: true,
            placed: false,
            interaction: Interaction::Idle,
            animation: TooltipAnimation::default(),
            tooltip_width: 0.0,
            tooltip_text_size: 0.0,
            revision: 0,
            listener: None,
        })
    }

    /// Installs the value-change listener, replacing any previous one.
    pub fn set_value_change_listener(&mut self, listener: impl FnMut(i32) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the value-change listener.
    pub fn clear_value_change_listener(&mut self) {
        self.listener = None;
    }

    /// Size the slider wants for the proposed constraints.
    #[must_use]
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        measure(self.config.orientation, width, height)
    }

    /// Applies the measured extent, regenerating ticks when it changed.
    ///
    /// A resting thumb is re-seated onto its tick so geometry from the old
    /// extent never leaks into the next frame.
    pub fn layout(&mut self, extent: Size) {
        if extent == self.extent && !self.ticks.is_empty() {
            return;
        }
        self.extent = extent;
        self.ticks = compute_ticks(
            self.config.value_from,
            self.config.value_to,
            self.config.tick.interval,
            extent,
            self.style.thumb_radius,
            self.config.orientation,
        );
        log::debug!(
            "layout {}x{}: {} ticks",
            extent.width,
            extent.height,
            self.ticks.len()
        );
        // Until a release or programmatic move picks a tick, the pending first
        // frame announces the default one.
        if self.first_draw && (!self.placed || self.interaction != Interaction::Idle) {
            self.selected = default_thumb_tick(&self.ticks, self.config.thumb.default_position);
        } else if self.interaction == Interaction::Idle
            && let Some(index) = position_of_value(&self.ticks, self.selected.value)
        {
            self.selected = self.ticks[index];
            self.thumb = self.selected.point(self.config.orientation);
        }
        self.request_redraw();
    }

    /// Dispatches a pointer event. Returns the announced value, if any.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<i32> {
        match event.action {
            PointerAction::Down | PointerAction::PointerDown => {
                self.on_pointer_down(event.position, event.time);
                None
            }
            PointerAction::Move => {
                self.on_pointer_move(event.position);
                None
            }
            PointerAction::Up | PointerAction::PointerUp => {
                self.on_pointer_up(event.position, event.time)
            }
        }
    }

    /// Starts a gesture: the thumb follows `position` and the tooltip grows.
    pub fn on_pointer_down(&mut self, position: Point, now: u64) {
        self.thumb = position;
        // A gesture wins over a pending default position.
        self.placed = self.first_draw;
        self.interaction = Interaction::Pressed;
        self.animation.show(now);
        log::trace!("pointer down at ({}, {})", position.x, position.y);
        self.request_redraw();
    }

    /// Follows the pointer. Never announces a value.
    ///
    /// Moves without a preceding press (hover) are ignored.
    pub fn on_pointer_move(&mut self, position: Point) {
        if self.interaction == Interaction::Idle {
            return;
        }
        self.thumb = position;
        self.interaction = Interaction::Dragging;
        log::trace!("pointer move to ({}, {})", position.x, position.y);
        self.request_redraw();
    }

    /// Ends a gesture: snaps to the nearest tick, announces its value once
    /// and starts hiding the tooltip.
    ///
    /// Returns `None` for a release without a press, or when there are no
    /// ticks to snap to yet.
    pub fn on_pointer_up(&mut self, position: Point, now: u64) -> Option<i32> {
        if self.interaction == Interaction::Idle {
            return None;
        }
        self.interaction = Interaction::Idle;
        self.animation.hide(now);
        let orientation = self.config.orientation;
        let snapped = locate(&self.ticks, orientation.main(position)).copied();
        let value = match snapped {
            Some(tick) => {
                self.thumb = tick.point(orientation);
                self.selected = tick;
                log::debug!("snapped to {}", tick.value);
                self.notify(tick.value);
                Some(tick.value)
            }
            None => {
                self.thumb = position;
                None
            }
        };
        self.request_redraw();
        value
    }

    /// Advances the tooltip animation to `now`.
    ///
    /// Returns `true` while the host should keep delivering frames.
    pub fn on_animation_frame(&mut self, now: u64) -> bool {
        let progress = self.animation.progress_at(now);
        self.tooltip_width = progress * self.config.tooltip.width;
        self.tooltip_text_size = progress * self.config.tooltip.text_size;
        let running = self.animation.is_running(now);
        self.animation.settle(now);
        log::trace!("tooltip progress {progress} at {now}");
        self.request_redraw();
        running
    }

    /// Moves the thumb to the tick carrying `value`.
    ///
    /// Unknown values leave the thumb where it is and return `false`. This
    /// does not announce the value itself; if the first frame is still
    /// pending, that frame keeps this tick and announces it.
    pub fn set_thumb_position(&mut self, value: i32) -> bool {
        let Some(index) = position_of_value(&self.ticks, value) else {
            return false;
        };
        let tick = self.ticks[index];
        self.thumb = tick.point(self.config.orientation);
        self.selected = tick;
        self.placed = self.first_draw;
        log::debug!("thumb moved to {value}");
        self.request_redraw();
        true
    }

    /// Returns the thumb to its default tick on the next frame, which
    /// announces that value again.
    pub fn reset_thumb_position(&mut self) {
        self.rearm();
        self.request_redraw();
    }

    /// Host visibility signal. Hiding resets the slider without requesting a
    /// redraw; showing again needs nothing.
    pub fn on_visibility_changed(&mut self, visible: bool) {
        if visible {
            return;
        }
        self.rearm();
        self.interaction = Interaction::Idle;
        self.animation.reset();
        self.tooltip_width = 0.0;
        self.tooltip_text_size = 0.0;
    }

    /// Produces everything needed to paint the current state.
    ///
    /// The first frame after construction or a reset places the thumb on the
    /// default tick and announces its value. If a gesture or
    /// [`Slider::set_thumb_position`] already placed the thumb, that position
    /// is kept and the selected tick is announced instead. Either way it needs
    /// ticks, so it waits for the first [`Slider::layout`].
    pub fn frame(&mut self) -> SliderFrame {
        if self.first_draw && !self.ticks.is_empty() {
            self.first_draw = false;
            if !self.placed {
                let tick = default_thumb_tick(&self.ticks, self.config.thumb.default_position);
                self.thumb = tick.point(self.config.orientation);
                self.selected = tick;
            }
            self.placed = false;
            log::debug!("initial value {}", self.selected.value);
            self.notify(self.selected.value);
        }

        let orientation = self.config.orientation;
        let extent = self.extent;
        let radius = self.style.thumb_radius;
        let thumb_main = self.thumb_main();

        let ticks = self.config.tick.visible.then(|| TickMarks {
            ticks: self.ticks.clone(),
            radius: self.config.tick.radius,
            color: self.config.tick.color,
            labels: self.config.tick.label_visible.then_some(TickLabels {
                position: self.style.tick_label_position,
                text_size: self.config.tick.label_size,
                color: self.config.tick.label_color,
                gap: radius * 2.0,
            }),
        });

        let tooltip = (self.config.tooltip.visible && self.tooltip_width > 0.0).then(|| {
            let position = self.style.tooltip_position;
            let anchor = tooltip_anchor(orientation, extent, thumb_main, radius);
            TooltipFrame {
                anchor,
                position,
                outline: tooltip_outline(position, anchor, self.tooltip_width),
                circle_center: circle_center(position, anchor, self.tooltip_width),
                width: self.tooltip_width,
                color: self.config.tooltip.color,
                value: self.display_value(thumb_main),
                text_size: self.tooltip_text_size,
                text_color: self.config.tooltip.text_color,
            }
        });

        SliderFrame {
            orientation,
            extent,
            track: TrackStroke {
                line: track_line(orientation, extent, radius),
                width: self.style.main_track_height,
                color: self.style.main_track_color,
            },
            second_track: TrackStroke {
                line: second_track_line(orientation, extent, radius, thumb_main),
                width: self.style.second_track_height,
                color: self.style.second_track_color,
            },
            ticks,
            thumb: Circle::new(
                orientation.compose(thumb_main, orientation.cross_center(extent)),
                radius,
            ),
            thumb_color: self.style.thumb_color,
            tooltip,
        }
    }

    /// Configuration in effect, with derived style values applied.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Resolved style.
    #[must_use]
    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    /// Current ticks; empty before the first layout.
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Last snapped, programmatic or default tick.
    #[must_use]
    pub fn selected_tick(&self) -> Tick {
        self.selected
    }

    /// Thumb main-axis coordinate, clamped onto the track.
    #[must_use]
    pub fn thumb_main(&self) -> f64 {
        clamp_thumb_to_track(
            self.config.orientation,
            self.extent,
            self.config.orientation.main(self.thumb),
            self.style.thumb_radius,
        )
    }

    /// Gesture state.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Tooltip animation state.
    #[must_use]
    pub fn animation(&self) -> TooltipAnimation {
        self.animation
    }

    /// Current tooltip diameter.
    #[must_use]
    pub fn tooltip_width(&self) -> f64 {
        self.tooltip_width
    }

    /// Current tooltip text size.
    #[must_use]
    pub fn tooltip_text_size(&self) -> f64 {
        self.tooltip_text_size
    }

    /// Extent from the last layout.
    #[must_use]
    pub fn extent(&self) -> Size {
        self.extent
    }

    /// Counter bumped on every redraw request.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Value the tooltip shows: the tick the thumb would snap to right now.
    fn display_value(&self, thumb_main: f64) -> i32 {
        locate(&self.ticks, thumb_main).map_or(self.selected.value, |t| t.value)
    }

    fn rearm(&mut self) {
        self.first_draw = true;
        self.placed = false;
        self.selected = default_thumb_tick(&self.ticks, self.config.thumb.default_position);
        log::debug!("thumb reset to {}", self.selected.value);
    }

    fn notify(&mut self, value: i32) {
        if let Some(listener) = self.listener.as_mut() {
            listener(value);
        }
    }

    fn request_redraw(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
