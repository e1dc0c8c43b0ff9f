// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use slideme_axis::{Orientation, Position};

use crate::resolve::{
    SliderType, effective_positions, second_track_color, second_track_height, thumb_color,
    thumb_size,
};

/// Raw style values as configured, before any derivation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleInputs {
    /// Slider orientation.
    pub orientation: Orientation,
    /// Second-track style.
    pub kind: SliderType,
    /// Stroke width of the main track.
    pub track_height: f64,
    /// Configured second-track stroke width; `0.0` means "derive it".
    pub second_track_height: f64,
    /// Main track color.
    pub main_track_color: Color,
    /// Second track color, used by [`SliderType::DiffColor`].
    pub second_track_color: Color,
    /// Configured thumb radius.
    pub thumb_radius: f64,
    /// Thumb color, used by [`SliderType::DiffColor`].
    pub thumb_color: Color,
    /// Whether tick circles are drawn.
    pub tick_visible: bool,
    /// Tick circle radius.
    pub tick_radius: f64,
    /// Configured side for tick labels.
    pub tick_label_position: Position,
    /// Configured side for the tooltip.
    pub tooltip_position: Position,
}

/// Every style value derived from [`StyleInputs`].
///
/// Resolution happens once; the result replaces the raw inputs for all later
/// reads, which is why the thumb radius here may differ from the configured one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle {
    /// Main track color.
    pub main_track_color: Color,
    /// Main track stroke width.
    pub main_track_height: f64,
    /// Second track color.
    pub second_track_color: Color,
    /// Second track stroke width.
    pub second_track_height: f64,
    /// Thumb color.
    pub thumb_color: Color,
    /// Thumb radius, never thinner than the track.
    pub thumb_radius: f64,
    /// Side used for tick labels.
    pub tick_label_position: Position,
    /// Side used for the tooltip.
    pub tooltip_position: Position,
}

impl ResolvedStyle {
    /// Derives the effective style.
    #[must_use]
    pub fn resolve(inputs: &StyleInputs) -> Self {
        let (tick_label_position, tooltip_position) = effective_positions(
            inputs.orientation,
            inputs.tick_label_position,
            inputs.tooltip_position,
        );
        Self {
            main_track_color: inputs.main_track_color,
            main_track_height: inputs.track_height,
            second_track_color: second_track_color(
                inputs.kind,
                inputs.main_track_color,
                inputs.second_track_color,
            ),
            second_track_height: second_track_height(
                inputs.track_height,
                inputs.second_track_height,
                inputs.tick_visible,
                inputs.tick_radius,
                inputs.kind,
            ),
            thumb_color: thumb_color(inputs.kind, inputs.main_track_color, inputs.thumb_color),
            thumb_radius: thumb_size(inputs.thumb_radius, inputs.track_height),
            tick_label_position,
            tooltip_position,
        }
    }
}
