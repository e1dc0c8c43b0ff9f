// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap-to-tick lookup.
//!
//! [`locate`] works on main-axis coordinates only, so the same search serves
//! both orientations: for vertical sliders the sequence runs bottom to top
//! (decreasing `y`), and "lower index" means "greater `y`".

use crate::model::Tick;

/// Finds the tick nearest to `touch_main`.
///
/// An exact coordinate match is returned directly. Otherwise a converging
/// two-pointer search compares the distance to the outermost remaining ticks
/// and discards the farther one until a single candidate is left. On equal
/// distances the lower-value (left or bottom) candidate is kept.
///
/// `ticks` must be co-sorted by value and coordinate, as produced by
/// [`compute_ticks`](crate::compute_ticks). Returns `None` only when `ticks`
/// is empty.
///
/// ```
/// use slideme_axis::{Tick, locate};
///
/// let ticks = [
///     Tick::new(20.0, 50.0, 0),
///     Tick::new(65.0, 50.0, 25),
///     Tick::new(110.0, 50.0, 50),
/// ];
/// assert_eq!(locate(&ticks, 100.0).map(|t| t.value), Some(50));
/// ```
#[must_use]
pub fn locate(ticks: &[Tick], touch_main: f64) -> Option<&Tick> {
    if let Some(exact) = ticks.iter().find(|t| t.coordinate_main == touch_main) {
        return Some(exact);
    }
    if ticks.is_empty() {
        return None;
    }

    let mut left = 0;
    let mut right = ticks.len() - 1;
    while left < right {
        let left_range = (touch_main - ticks[left].coordinate_main).abs();
        let right_range = (touch_main - ticks[right].coordinate_main).abs();
        if left_range <= right_range {
            right -= 1;
        } else {
            left += 1;
        }
    }
    ticks.get(left)
}

/// Index of the tick whose value equals `value`, if any.
#[must_use]
pub fn position_of_value(ticks: &[Tick], value: i32) -> Option<usize> {
    ticks.iter().position(|t| t.value == value)
}
