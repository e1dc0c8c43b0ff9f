// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless style lookups.

use peniko::Color;
use slideme_axis::{Orientation, Position};

/// How the filled part of the track is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SliderType {
    /// The second track uses the main track color, reading as one thicker line.
    #[default]
    Overlay,
    /// The second track and the thumb use their own colors.
    DiffColor,
}

/// Extra thickness of the second track over the main track when no explicit
/// height is configured.
pub const SECOND_TRACK_EXTRA: f64 = 5.0;

/// Color of the second track.
#[must_use]
pub fn second_track_color(kind: SliderType, main: Color, second: Color) -> Color {
    match kind {
        SliderType::Overlay => main,
        SliderType::DiffColor => second,
    }
}

/// Color of the thumb.
#[must_use]
pub fn thumb_color(kind: SliderType, main: Color, thumb: Color) -> Color {
    match kind {
        SliderType::Overlay => main,
        SliderType::DiffColor => thumb,
    }
}

/// Stroke width of the second track.
///
/// An explicit `configured_second_height` only counts for
/// [`SliderType::Overlay`]; otherwise the second track is
/// [`SECOND_TRACK_EXTRA`] thicker than the main one. Visible ticks are never
/// buried: if the result would not exceed their diameter it grows to
/// `2.1·tick_radius`.
#[must_use]
pub fn second_track_height(
    track_height: f64,
    configured_second_height: f64,
    tick_visible: bool,
    tick_radius: f64,
    kind: SliderType,
) -> f64 {
    let base = if kind == SliderType::Overlay && configured_second_height != 0.0 {
        configured_second_height
    } else {
        track_height + SECOND_TRACK_EXTRA
    };
    if tick_visible && base <= tick_radius * 2.0 {
        tick_radius * 2.1
    } else {
        base
    }
}

/// Effective thumb radius; the thumb never looks thinner than the track.
#[must_use]
pub fn thumb_size(thumb_radius: f64, main_track_height: f64) -> f64 {
    if thumb_radius * 2.0 > main_track_height {
        thumb_radius
    } else {
        main_track_height * 1.5
    }
}

/// Tick labels and the tooltip must sit on opposite sides of the track.
#[must_use]
pub fn tooltip_position_compatible(tick_label: Position, tooltip: Position) -> bool {
    tick_label.opposite() == tooltip
}

/// Label and tooltip sides actually used for `orientation`.
///
/// Vertical sliders always put tick labels on the right and the tooltip on the
/// left, whatever was configured; horizontal sliders keep the configuration.
#[must_use]
pub fn effective_positions(
    orientation: Orientation,
    tick_label: Position,
    tooltip: Position,
) -> (Position, Position) {
    match orientation {
        Orientation::Horizontal => (tick_label, tooltip),
        Orientation::Vertical => (Position::Right, Position::Left),
    }
}
