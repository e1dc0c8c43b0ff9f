// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use slideme_axis::Position;

/// A configuration that cannot produce a usable slider.
///
/// These are fatal: there is no recovery path besides fixing the
/// configuration and building a new [`Slider`](crate::Slider). Everything
/// else (no ticks yet, unknown values, bad default positions) falls back
/// silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `value_from` is not below `value_to`.
    #[error("value range {value_from}..={value_to} is empty or reversed")]
    InvalidRange {
        /// Configured lower bound.
        value_from: i32,
        /// Configured upper bound.
        value_to: i32,
    },
    /// The tick interval does not evenly divide the value range.
    #[error("tick interval {tick_interval} does not evenly divide {value_from}..={value_to}")]
    InvalidTickInterval {
        /// Configured lower bound.
        value_from: i32,
        /// Configured upper bound.
        value_to: i32,
        /// Configured interval.
        tick_interval: i32,
    },
    /// The range and interval produce more than
    /// [`MAX_TICK_COUNT`](slideme_axis::MAX_TICK_COUNT) ticks.
    #[error("{tick_count} ticks exceed the limit of {max}")]
    TooManyTicks {
        /// Ticks the configuration would produce.
        tick_count: usize,
        /// Largest supported tick count.
        max: usize,
    },
    /// Tick labels and the tooltip are visible but not on opposite sides.
    #[error("tick labels ({tick_label:?}) and tooltip ({tooltip:?}) must be on opposite sides")]
    IncompatiblePositions {
        /// Side used for tick labels.
        tick_label: Position,
        /// Side used for the tooltip.
        tooltip: Position,
    },
}
