// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=slideme_axis --heading-base-level=0

//! Slideme Axis: geometry for tick-snapping sliders.
//!
//! This crate holds the pure, orientation-aware geometry behind a slider that
//! snaps to evenly spaced ticks:
//! - Tick generation along a measured extent ([`compute_ticks`]).
//! - Nearest-tick lookup for snapping ([`locate`]).
//! - Thumb clamping and default placement ([`clamp_thumb_to_track`], [`default_thumb_tick`]).
//! - Tooltip and label geometry ([`tooltip_outline`], [`tick_label_origin`]).
//! - The sizing contract with a host layout pass ([`measure`]).
//!
//! It does **not** draw anything or own any state. The `slideme` crate drives
//! these functions from pointer events; a renderer consumes the points, lines
//! and paths they produce.
//!
//! ## Axes
//!
//! The main axis is the one the thumb travels along: `x` for
//! [`Orientation::Horizontal`], `y` for [`Orientation::Vertical`]. Vertical
//! sliders put the minimum value at the bottom, so their tick coordinates
//! decrease as values increase.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use slideme_axis::{Orientation, compute_ticks, is_tick_interval_valid, locate};
//!
//! assert!(is_tick_interval_valid(0, 100, 25));
//! let ticks = compute_ticks(0, 100, 25, Size::new(200.0, 100.0), 10.0, Orientation::Horizontal);
//! assert_eq!(ticks.len(), 5);
//!
//! // A release at x = 95 snaps to the tick at x = 100 (value 50).
//! let snapped = locate(&ticks, 95.0).unwrap();
//! assert_eq!(snapped.value, 50);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod locate;
mod measure;
mod model;
mod thumb;
mod ticks;
mod tooltip;

pub use locate::{locate, position_of_value};
pub use measure::{
    Axis, DEFAULT_HORIZONTAL_LENGTH, DEFAULT_THICKNESS, DEFAULT_VERTICAL_LENGTH, MeasureMode,
    MeasureSpec, default_extent, measure, resolve_measured_extent,
};
pub use model::{INLINE_TICKS, Margin, Orientation, Position, Tick, TickList};
pub use thumb::{clamp_thumb_to_track, default_thumb_tick, is_default_thumb_position_valid};
pub use ticks::{
    MAX_TICK_COUNT, compute_ticks, is_tick_interval_valid, second_track_line, tick_count,
    track_end, track_line, track_start,
};
pub use tooltip::{
    circle_center, tick_label_origin, tooltip_anchor, tooltip_label_origin, tooltip_outline,
    triangle_vertices,
};
