// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generation and track segments.
//!
//! The usable track runs from `2·thumb_radius` to `extent − 2·thumb_radius`
//! along the main axis, leaving room for the thumb at both ends. Vertical
//! tracks are inverted: the minimum value sits at the bottom.

use kurbo::{Line, Size};

use crate::model::{Orientation, Tick, TickList};

/// Largest tick sequence a slider may configure.
///
/// Every tick is stored, so ranges are bounded well before allocation fails.
pub const MAX_TICK_COUNT: usize = 10_000;

/// Returns `true` when `tick_interval` evenly divides `value_to − value_from`.
///
/// Non-positive intervals never produce a tick sequence and are rejected.
#[must_use]
pub fn is_tick_interval_valid(value_from: i32, value_to: i32, tick_interval: i32) -> bool {
    if tick_interval <= 0 {
        return false;
    }
    let range = i64::from(value_to) - i64::from(value_from);
    range % i64::from(tick_interval) == 0
}

/// Number of ticks for a validated range and interval.
#[must_use]
pub fn tick_count(value_from: i32, value_to: i32, tick_interval: i32) -> usize {
    if tick_interval <= 0 || value_to < value_from {
        return 0;
    }
    let range = i64::from(value_to) - i64::from(value_from);
    usize::try_from(range / i64::from(tick_interval))
        .map_or(usize::MAX, |segments| segments.saturating_add(1))
}

/// Main-axis coordinate of the minimum-value end of the track.
#[must_use]
pub fn track_start(orientation: Orientation, extent: Size, thumb_radius: f64) -> f64 {
    match orientation {
        Orientation::Horizontal => thumb_radius * 2.0,
        Orientation::Vertical => extent.height - thumb_radius * 2.0,
    }
}

/// Main-axis coordinate of the maximum-value end of the track.
#[must_use]
pub fn track_end(orientation: Orientation, extent: Size, thumb_radius: f64) -> f64 {
    match orientation {
        Orientation::Horizontal => extent.width - thumb_radius * 2.0,
        Orientation::Vertical => thumb_radius * 2.0,
    }
}

/// Computes the tick sequence for a range.
///
/// The caller must have validated the interval with [`is_tick_interval_valid`];
/// an invalid interval yields an empty sequence. Ticks are ordered by ascending
/// value, so main-axis coordinates increase for horizontal sliders and decrease
/// for vertical ones.
///
/// One tick is allocated per step, so callers should keep
/// [`tick_count`] within [`MAX_TICK_COUNT`].
#[must_use]
pub fn compute_ticks(
    value_from: i32,
    value_to: i32,
    tick_interval: i32,
    extent: Size,
    thumb_radius: f64,
    orientation: Orientation,
) -> TickList {
    debug_assert!(
        is_tick_interval_valid(value_from, value_to, tick_interval),
        "tick interval must evenly divide the value range"
    );
    let count = tick_count(value_from, value_to, tick_interval);
    let mut ticks = TickList::with_capacity(count);
    if count == 0 {
        return ticks;
    }

    let start = track_start(orientation, extent, thumb_radius);
    let end = track_end(orientation, extent, thumb_radius);
    let cross = orientation.cross_center(extent);
    // Single-tick ranges sit at the start; there is nothing to divide.
    let segment = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };

    let mut value = value_from;
    for index in 0..count {
        ticks.push(Tick::new(start + segment * index as f64, cross, value));
        value = value.saturating_add(tick_interval);
    }
    ticks
}

/// The full track, from the minimum-value end to the maximum-value end.
#[must_use]
pub fn track_line(orientation: Orientation, extent: Size, thumb_radius: f64) -> Line {
    let cross = orientation.cross_center(extent);
    Line::new(
        orientation.compose(track_start(orientation, extent, thumb_radius), cross),
        orientation.compose(track_end(orientation, extent, thumb_radius), cross),
    )
}

/// The filled part of the track, from the minimum-value end to the thumb.
#[must_use]
pub fn second_track_line(
    orientation: Orientation,
    extent: Size,
    thumb_radius: f64,
    thumb_main: f64,
) -> Line {
    let cross = orientation.cross_center(extent);
    Line::new(
        orientation.compose(track_start(orientation, extent, thumb_radius), cross),
        orientation.compose(thumb_main, cross),
    )
}
