// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration.
//!
//! A [`SliderConfig`] is supplied once and is read-only afterwards. Every group
//! has a [`Default`] so hosts only spell out what differs:
//!
//! ```rust
//! use slideme::{SliderConfig, TickConfig};
//! use slideme_axis::Orientation;
//!
//! let config = SliderConfig::new(0, 100)
//!     .with_orientation(Orientation::Vertical)
//!     .with_tick(TickConfig {
//!         visible: true,
//!         interval: 25,
//!         ..TickConfig::default()
//!     });
//! assert!(config.validate().is_ok());
//! ```

use peniko::Color;
use slideme_axis::{MAX_TICK_COUNT, Orientation, Position, is_tick_interval_valid, tick_count};
use slideme_style::{SliderType, StyleInputs, effective_positions, tooltip_position_compatible};

use crate::error::ConfigError;

/// Track sizes and colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackConfig {
    /// Main track stroke width.
    pub height: f64,
    /// Second track stroke width; `0.0` derives it from `height`.
    pub second_height: f64,
    /// Main track color.
    pub main_color: Color,
    /// Second track color, used by [`SliderType::DiffColor`].
    pub second_color: Color,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            height: 4.0,
            second_height: 0.0,
            main_color: Color::WHITE,
            second_color: Color::BLACK,
        }
    }
}

/// Thumb size, color and starting tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbConfig {
    /// Thumb radius. Raised to `1.5·track height` if the thumb would otherwise
    /// look thinner than the track.
    pub radius: f64,
    /// 1-based tick index the thumb starts on. Unset or out of range means the
    /// first tick.
    pub default_position: Option<u32>,
    /// Thumb color, used by [`SliderType::DiffColor`].
    pub color: Color,
}

impl Default for ThumbConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            default_position: None,
            color: Color::BLACK,
        }
    }
}

/// Tick circles and their descriptions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickConfig {
    /// Whether tick circles are drawn.
    pub visible: bool,
    /// Distance in value units between ticks.
    pub interval: i32,
    /// Tick circle radius.
    pub radius: f64,
    /// Tick circle color.
    pub color: Color,
    /// Whether each tick shows its value.
    pub label_visible: bool,
    /// Text size of tick labels.
    pub label_size: f64,
    /// Text color of tick labels.
    pub label_color: Color,
    /// Side of the track where tick labels go.
    pub label_position: Position,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            visible: false,
            interval: 100,
            radius: 3.0,
            color: Color::WHITE,
            label_visible: false,
            label_size: 12.0,
            label_color: Color::BLACK,
            label_position: Position::Bottom,
        }
    }
}

/// Value tooltip shown while the thumb is pressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipConfig {
    /// Whether the tooltip is shown at all.
    pub visible: bool,
    /// Fully expanded bubble diameter.
    pub width: f64,
    /// Bubble color.
    pub color: Color,
    /// Side of the track where the tooltip goes.
    pub position: Position,
    /// Fully expanded text size.
    pub text_size: f64,
    /// Text color.
    pub text_color: Color,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            visible: false,
            width: 48.0,
            color: Color::WHITE,
            position: Position::Top,
            text_size: 14.0,
            text_color: Color::BLACK,
        }
    }
}

/// Complete slider configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    /// Axis the thumb travels along.
    pub orientation: Orientation,
    /// Second-track style.
    pub kind: SliderType,
    /// Lowest value.
    pub value_from: i32,
    /// Highest value.
    pub value_to: i32,
    /// Track appearance.
    pub track: TrackConfig,
    /// Thumb appearance and starting tick.
    pub thumb: ThumbConfig,
    /// Tick appearance and spacing.
    pub tick: TickConfig,
    /// Tooltip appearance.
    pub tooltip: TooltipConfig,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new(0, 100)
    }
}

impl SliderConfig {
    /// Horizontal overlay slider over `value_from..=value_to` with default styling.
    #[must_use]
    pub fn new(value_from: i32, value_to: i32) -> Self {
        Self {
            orientation: Orientation::default(),
            kind: SliderType::default(),
            value_from,
            value_to,
            track: TrackConfig::default(),
            thumb: ThumbConfig::default(),
            tick: TickConfig::default(),
            tooltip: TooltipConfig::default(),
        }
    }

    /// Sets the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the second-track style.
    #[must_use]
    pub fn with_kind(mut self, kind: SliderType) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the tick interval, keeping the rest of the tick group.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: i32) -> Self {
        self.tick.interval = interval;
        self
    }

    /// Sets the 1-based starting tick.
    #[must_use]
    pub fn with_default_thumb_position(mut self, position: u32) -> Self {
        self.thumb.default_position = Some(position);
        self
    }

    /// Replaces the track group.
    #[must_use]
    pub fn with_track(mut self, track: TrackConfig) -> Self {
        self.track = track;
        self
    }

    /// Replaces the thumb group.
    #[must_use]
    pub fn with_thumb(mut self, thumb: ThumbConfig) -> Self {
        self.thumb = thumb;
        self
    }

    /// Replaces the tick group.
    #[must_use]
    pub fn with_tick(mut self, tick: TickConfig) -> Self {
        self.tick = tick;
        self
    }

    /// Replaces the tooltip group.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Checks the configuration invariants.
    ///
    /// The tick interval is always checked because snapping needs ticks even
    /// when they are not drawn. Label and tooltip sides are checked against
    /// the sides that will actually be used, and only when both are visible.
    /// Ranges needing more than [`MAX_TICK_COUNT`] ticks are rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.value_from >= self.value_to {
            return Err(ConfigError::InvalidRange {
                value_from: self.value_from,
                value_to: self.value_to,
            });
        }
        if !is_tick_interval_valid(self.value_from, self.value_to, self.tick.interval) {
            return Err(ConfigError::InvalidTickInterval {
                value_from: self.value_from,
                value_to: self.value_to,
                tick_interval: self.tick.interval,
            });
        }
        let count = tick_count(self.value_from, self.value_to, self.tick.interval);
        if count > MAX_TICK_COUNT {
            return Err(ConfigError::TooManyTicks {
                tick_count: count,
                max: MAX_TICK_COUNT,
            });
        }
        let (tick_label, tooltip) = effective_positions(
            self.orientation,
            self.tick.label_position,
            self.tooltip.position,
        );
        if self.tick.label_visible
            && self.tooltip.visible
            && !tooltip_position_compatible(tick_label, tooltip)
        {
            return Err(ConfigError::IncompatiblePositions {
                tick_label,
                tooltip,
            });
        }
        Ok(())
    }

    /// Style-relevant subset of the configuration.
    #[must_use]
    pub fn style_inputs(&self) -> StyleInputs {
        StyleInputs {
            orientation: self.orientation,
            kind: self.kind,
            track_height: self.track.height,
            second_track_height: self.track.second_height,
            main_track_color: self.track.main_color,
            second_track_color: self.track.second_color,
            thumb_radius: self.thumb.radius,
            thumb_color: self.thumb.color,
            tick_visible: self.tick.visible,
            tick_radius: self.tick.radius,
            tick_label_position: self.tick.label_position,
            tooltip_position: self.tooltip.position,
        }
    }
}
