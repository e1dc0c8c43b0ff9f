// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing contract between the slider and the host's layout pass.
//!
//! Hosts describe each proposed dimension with a [`MeasureSpec`]. The cross
//! axis always honors the three-mode contract of [`resolve_measured_extent`];
//! the main axis takes whatever space is offered and only falls back to its
//! default when nothing was proposed.

use kurbo::Size;

use crate::model::Orientation;

/// Default cross-axis thickness.
pub const DEFAULT_THICKNESS: f64 = 100.0;
/// Default main-axis length of a horizontal slider.
pub const DEFAULT_HORIZONTAL_LENGTH: f64 = 320.0;
/// Default main-axis length of a vertical slider.
pub const DEFAULT_VERTICAL_LENGTH: f64 = 480.0;

/// How the host constrains a proposed dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MeasureMode {
    /// The slider must be exactly this size.
    Exact,
    /// The slider may be at most this size.
    AtMost,
    /// No constraint; the slider picks.
    #[default]
    Unspecified,
}

/// A proposed size along one dimension.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MeasureSpec {
    /// Constraint kind.
    pub mode: MeasureMode,
    /// Proposed size; ignored for [`MeasureMode::Unspecified`].
    pub size: f64,
}

impl MeasureSpec {
    /// The slider must be exactly `size`.
    #[must_use]
    pub const fn exact(size: f64) -> Self {
        Self {
            mode: MeasureMode::Exact,
            size,
        }
    }

    /// The slider may be at most `size`.
    #[must_use]
    pub const fn at_most(size: f64) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// No constraint.
    #[must_use]
    pub const fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0.0,
        }
    }
}

/// Axis selector relative to an [`Orientation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The axis the thumb travels along.
    Main,
    /// The perpendicular axis.
    Cross,
}

/// Default extent for `axis` under `orientation`.
#[must_use]
pub fn default_extent(orientation: Orientation, axis: Axis) -> f64 {
    match (axis, orientation) {
        (Axis::Cross, _) => DEFAULT_THICKNESS,
        (Axis::Main, Orientation::Horizontal) => DEFAULT_HORIZONTAL_LENGTH,
        (Axis::Main, Orientation::Vertical) => DEFAULT_VERTICAL_LENGTH,
    }
}

/// Resolves one proposed dimension against a default.
///
/// - [`MeasureMode::Exact`]: the proposed size.
/// - [`MeasureMode::AtMost`]: the smaller of default and proposed size.
/// - [`MeasureMode::Unspecified`]: the default.
#[must_use]
pub fn resolve_measured_extent(spec: MeasureSpec, default: f64) -> f64 {
    match spec.mode {
        MeasureMode::Exact => spec.size,
        MeasureMode::AtMost => default.min(spec.size),
        MeasureMode::Unspecified => default,
    }
}

/// Measures a slider from the host's width and height proposals.
#[must_use]
pub fn measure(orientation: Orientation, width: MeasureSpec, height: MeasureSpec) -> Size {
    let (main_spec, cross_spec) = match orientation {
        Orientation::Horizontal => (width, height),
        Orientation::Vertical => (height, width),
    };
    let main = match main_spec.mode {
        MeasureMode::Exact | MeasureMode::AtMost => main_spec.size,
        MeasureMode::Unspecified => default_extent(orientation, Axis::Main),
    };
    let cross = resolve_measured_extent(cross_spec, default_extent(orientation, Axis::Cross));
    match orientation {
        Orientation::Horizontal => Size::new(main, cross),
        Orientation::Vertical => Size::new(cross, main),
    }
}
