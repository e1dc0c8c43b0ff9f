// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=slideme --heading-base-level=0

//! Slideme: a headless tick-snapping slider.
//!
//! [`Slider`] owns the runtime state of one slider and turns host events into
//! drawable [`SliderFrame`]s:
//! - A press moves the thumb under the pointer and grows the value tooltip.
//! - A drag follows the pointer, clamped onto the track, without announcing values.
//! - A release snaps to the nearest tick and announces its value exactly once.
//! - The first frame after construction or a reset places the thumb on the
//!   configured default tick and announces that value.
//!
//! Nothing here draws or schedules work. The host measures and lays the slider
//! out, forwards pointer events, ticks [`Slider::on_animation_frame`] while it
//! asks for more frames, and paints [`Slider::frame`].
//!
//! Geometry lives in [`slideme_axis`] and style derivation in [`slideme_style`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use slideme::{Slider, SliderConfig};
//!
//! let mut slider = Slider::new(SliderConfig::new(0, 100).with_tick_interval(25)).unwrap();
//! slider.layout(Size::new(200.0, 100.0));
//!
//! // First frame: thumb on the first tick.
//! let frame = slider.frame();
//! assert_eq!(frame.thumb_main(), 20.0);
//!
//! // Press, drag and release near the middle.
//! slider.on_pointer_down(Point::new(50.0, 50.0), 0);
//! slider.on_pointer_move(Point::new(95.0, 50.0));
//! assert_eq!(slider.on_pointer_up(Point::new(95.0, 50.0), 16), Some(50));
//! assert_eq!(slider.thumb_main(), 100.0);
//! ```
//!
//! Configuration errors surface once, from [`Slider::new`]:
//!
//! ```rust
//! use slideme::{ConfigError, Slider, SliderConfig};
//!
//! let err = Slider::new(SliderConfig::new(0, 100).with_tick_interval(30)).unwrap_err();
//! assert!(matches!(err, ConfigError::InvalidTickInterval { .. }));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animation;
mod config;
mod error;
mod frame;
mod slider;

pub use animation::{TOOLTIP_ANIMATION_MS, TooltipAnimation};
pub use config::{SliderConfig, ThumbConfig, TickConfig, TooltipConfig, TrackConfig};
pub use error::ConfigError;
pub use frame::{SliderFrame, TickLabels, TickMarks, TooltipFrame, TrackStroke};
pub use slider::{Interaction, PointerAction, PointerEvent, Slider, ValueListener};

pub use slideme_axis::{MeasureMode, MeasureSpec, Orientation, Position, Tick};
pub use slideme_style::{ResolvedStyle, SliderType};
