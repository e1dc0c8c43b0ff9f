// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumb placement on the track.

use kurbo::Size;

use crate::model::{Orientation, Tick};
use crate::ticks::{track_end, track_start};

/// Clamps a raw main-axis coordinate onto the track.
///
/// The track spans `[2·thumb_radius, extent − 2·thumb_radius]` along the main
/// axis. For vertical sliders the low end of the value range is the larger
/// `y` (the bottom), which this function handles transparently.
///
/// If the extent is too small to fit a track, the coordinate collapses onto
/// the minimum-value end.
#[must_use]
pub fn clamp_thumb_to_track(
    orientation: Orientation,
    extent: Size,
    raw: f64,
    thumb_radius: f64,
) -> f64 {
    let start = track_start(orientation, extent, thumb_radius);
    let end = track_end(orientation, extent, thumb_radius);
    let (lo, hi) = match orientation {
        Orientation::Horizontal => (start, end),
        Orientation::Vertical => (end, start),
    };
    if raw.is_nan() || lo > hi {
        return start;
    }
    raw.max(lo).min(hi)
}

/// Returns `true` when the 1-based `position` addresses a tick.
#[must_use]
pub fn is_default_thumb_position_valid(tick_count: usize, position: u32) -> bool {
    position > 0 && (position as usize) <= tick_count
}

/// Tick the thumb starts on.
///
/// An unset or out-of-range position falls back to the first tick, and to
/// [`Tick::synthetic_default`] when there are no ticks at all.
#[must_use]
pub fn default_thumb_tick(ticks: &[Tick], position: Option<u32>) -> Tick {
    position
        .filter(|&p| is_default_thumb_position_valid(ticks.len(), p))
        .and_then(|p| ticks.get(p as usize - 1))
        .or_else(|| ticks.first())
        .copied()
        .unwrap_or_else(Tick::synthetic_default)
}
