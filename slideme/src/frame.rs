// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable output of one [`Slider::frame`](crate::Slider::frame) call.
//!
//! Everything here is plain geometry plus resolved colors; a renderer paints
//! it in order: track, second track, ticks (and labels), thumb, tooltip.

use kurbo::{BezPath, Circle, Line, Point, Size};
use peniko::Color;
use slideme_axis::{
    Orientation, Position, Tick, TickList, tick_label_origin, tooltip_label_origin,
};

/// A stroked track segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackStroke {
    /// Centerline of the segment.
    pub line: Line,
    /// Stroke width (round caps).
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

/// Tick description settings for a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickLabels {
    /// Side of the track the labels sit on.
    pub position: Position,
    /// Text size.
    pub text_size: f64,
    /// Text color.
    pub color: Color,
    /// Distance kept between a tick and its label.
    pub gap: f64,
}

impl TickLabels {
    /// Baseline origin for the label of `tick`, given its measured text bounds.
    #[must_use]
    pub fn origin(&self, tick: &Tick, orientation: Orientation, text_bounds: Size) -> Point {
        tick_label_origin(self.position, tick.point(orientation), text_bounds, self.gap)
    }
}

/// Tick circles for a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMarks {
    /// Ticks in ascending value order.
    pub ticks: TickList,
    /// Circle radius.
    pub radius: f64,
    /// Circle color.
    pub color: Color,
    /// Labels, when enabled.
    pub labels: Option<TickLabels>,
}

/// The value tooltip for a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipFrame {
    /// Where the tail touches the track.
    pub anchor: Point,
    /// Side the bubble points to.
    pub position: Position,
    /// Union outline of tail and bubble.
    pub outline: BezPath,
    /// Center of the bubble.
    pub circle_center: Point,
    /// Current (animated) bubble diameter.
    pub width: f64,
    /// Bubble fill color.
    pub color: Color,
    /// Value shown in the bubble.
    pub value: i32,
    /// Current (animated) text size.
    pub text_size: f64,
    /// Text color.
    pub text_color: Color,
}

impl TooltipFrame {
    /// Baseline origin for the value text, given its measured bounds.
    #[must_use]
    pub fn label_origin(&self, text_bounds: Size) -> Point {
        tooltip_label_origin(self.position, self.anchor, self.width, text_bounds)
    }
}

/// Everything needed to paint the slider once.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderFrame {
    /// Slider orientation.
    pub orientation: Orientation,
    /// Measured extent the geometry was computed for.
    pub extent: Size,
    /// The full track.
    pub track: TrackStroke,
    /// The filled part of the track, up to the thumb.
    pub second_track: TrackStroke,
    /// Tick circles, when visible.
    pub ticks: Option<TickMarks>,
    /// The thumb.
    pub thumb: Circle,
    /// Thumb color.
    pub thumb_color: Color,
    /// Tooltip, when visible and not fully collapsed.
    pub tooltip: Option<TooltipFrame>,
}

impl SliderFrame {
    /// Main-axis coordinate of the thumb in this frame.
    #[must_use]
    pub fn thumb_main(&self) -> f64 {
        self.orientation.main(self.thumb.center)
    }
}
