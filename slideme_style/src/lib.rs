// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=slideme_style --heading-base-level=0

//! Slideme Style: style resolution for tick-snapping sliders.
//!
//! A slider is styled by a handful of enums and sizes. This crate turns them
//! into the values a renderer actually needs:
//!
//! - [`second_track_color`] / [`thumb_color`]: [`SliderType::Overlay`] draws
//!   everything in the main track color, [`SliderType::DiffColor`] uses the
//!   dedicated colors.
//! - [`second_track_height`]: how thick the filled track is, kept thick enough
//!   to show tick circles.
//! - [`thumb_size`]: the thumb never looks thinner than the track.
//! - [`tooltip_position_compatible`]: tick labels and the tooltip must sit on
//!   opposite sides of the track.
//!
//! [`ResolvedStyle::resolve`] applies all of them at once:
//!
//! ```rust
//! use peniko::Color;
//! use slideme_axis::{Orientation, Position};
//! use slideme_style::{ResolvedStyle, SliderType, StyleInputs};
//!
//! let style = ResolvedStyle::resolve(&StyleInputs {
//!     orientation: Orientation::Horizontal,
//!     kind: SliderType::Overlay,
//!     track_height: 4.0,
//!     second_track_height: 0.0,
//!     main_track_color: Color::WHITE,
//!     second_track_color: Color::BLACK,
//!     thumb_radius: 10.0,
//!     thumb_color: Color::BLACK,
//!     tick_visible: false,
//!     tick_radius: 3.0,
//!     tick_label_position: Position::Bottom,
//!     tooltip_position: Position::Top,
//! });
//! assert_eq!(style.second_track_color, Color::WHITE);
//! assert_eq!(style.second_track_height, 9.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod resolve;
mod resolved;

pub use resolve::{
    SECOND_TRACK_EXTRA, SliderType, effective_positions, second_track_color, second_track_height,
    thumb_color, thumb_size, tooltip_position_compatible,
};
pub use resolved::{ResolvedStyle, StyleInputs};
