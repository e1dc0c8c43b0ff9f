// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain data shared by every geometry helper: ticks, margins, and the two
//! small enums that select an axis and a side.

use kurbo::{Insets, Point, Size};
use smallvec::SmallVec;

/// Inline capacity for [`TickList`].
///
/// Sliders rarely show more than a handful of ticks, so this avoids a heap
/// allocation in the common case.
pub const INLINE_TICKS: usize = 16;

/// An ordered tick sequence, co-sorted by value and main-axis coordinate.
pub type TickList = SmallVec<[Tick; INLINE_TICKS]>;

/// Axis along which the thumb travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Main axis is `x`; values grow to the right.
    #[default]
    Horizontal,
    /// Main axis is `y`; values grow upwards, so the minimum sits at the bottom.
    Vertical,
}

impl Orientation {
    /// Returns the main-axis component of `pt`.
    #[must_use]
    pub fn main(self, pt: Point) -> f64 {
        match self {
            Self::Horizontal => pt.x,
            Self::Vertical => pt.y,
        }
    }

    /// Returns the cross-axis component of `pt`.
    #[must_use]
    pub fn cross(self, pt: Point) -> f64 {
        match self {
            Self::Horizontal => pt.y,
            Self::Vertical => pt.x,
        }
    }

    /// Builds a point from main and cross components.
    #[must_use]
    pub fn compose(self, main: f64, cross: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// Length of `size` along the main axis.
    #[must_use]
    pub fn main_extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Length of `size` along the cross axis.
    #[must_use]
    pub fn cross_extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Center of `size` on the cross axis, where the track runs.
    #[must_use]
    pub fn cross_center(self, size: Size) -> f64 {
        self.cross_extent(size) / 2.0
    }
}

/// A side of the track, used to place tooltips and tick labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// Toward negative `x`.
    Left,
    /// Toward negative `y`.
    Top,
    /// Toward positive `x`.
    Right,
    /// Toward positive `y`.
    Bottom,
}

impl Position {
    /// The side facing this one across the track.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
        }
    }

    /// Unit direction pointing from the track toward this side, in screen space.
    #[must_use]
    pub fn direction(self) -> kurbo::Vec2 {
        match self {
            Self::Left => kurbo::Vec2::new(-1.0, 0.0),
            Self::Top => kurbo::Vec2::new(0.0, -1.0),
            Self::Right => kurbo::Vec2::new(1.0, 0.0),
            Self::Bottom => kurbo::Vec2::new(0.0, 1.0),
        }
    }
}

/// A discrete point on the track together with the value it represents.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Tick {
    /// Position along the main axis (`x` when horizontal, `y` when vertical).
    pub coordinate_main: f64,
    /// Fixed position on the cross axis (the track center).
    pub coordinate_cross: f64,
    /// Value from the slider range this tick stands for.
    pub value: i32,
}

impl Tick {
    /// Creates a tick.
    #[must_use]
    pub const fn new(coordinate_main: f64, coordinate_cross: f64, value: i32) -> Self {
        Self {
            coordinate_main,
            coordinate_cross,
            value,
        }
    }

    /// Fallback tick used when no ticks exist yet (for example before the
    /// first layout pass).
    #[must_use]
    pub const fn synthetic_default() -> Self {
        Self::new(0.0, 0.0, 0)
    }

    /// Screen-space point of this tick for the given orientation.
    #[must_use]
    pub fn point(&self, orientation: Orientation) -> Point {
        orientation.compose(self.coordinate_main, self.coordinate_cross)
    }
}

/// Optional per-side offsets. Unset sides have no effect.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Margin {
    /// Leading offset, pushes right.
    pub start: Option<f64>,
    /// Top offset, pushes down.
    pub top: Option<f64>,
    /// Trailing offset, pulls left.
    pub end: Option<f64>,
    /// Bottom offset, pulls up.
    pub bottom: Option<f64>,
}

impl Margin {
    /// Creates a margin from any subset of sides.
    #[must_use]
    pub const fn new(
        start: Option<f64>,
        top: Option<f64>,
        end: Option<f64>,
        bottom: Option<f64>,
    ) -> Self {
        Self {
            start,
            top,
            end,
            bottom,
        }
    }

    /// Margin with only the given side populated.
    #[must_use]
    pub fn on(side: Position, amount: f64) -> Self {
        let mut margin = Self::default();
        match side {
            Position::Left => margin.start = Some(amount),
            Position::Top => margin.top = Some(amount),
            Position::Right => margin.end = Some(amount),
            Position::Bottom => margin.bottom = Some(amount),
        }
        margin
    }

    /// Moves `pt` by the populated sides.
    #[must_use]
    pub fn offset(&self, pt: Point) -> Point {
        Point::new(
            pt.x + self.start.unwrap_or(0.0) - self.end.unwrap_or(0.0),
            pt.y + self.top.unwrap_or(0.0) - self.bottom.unwrap_or(0.0),
        )
    }

    /// Converts to [`Insets`], treating unset sides as zero.
    #[must_use]
    pub fn to_insets(&self) -> Insets {
        Insets::new(
            self.start.unwrap_or(0.0),
            self.top.unwrap_or(0.0),
            self.end.unwrap_or(0.0),
            self.bottom.unwrap_or(0.0),
        )
    }
}
