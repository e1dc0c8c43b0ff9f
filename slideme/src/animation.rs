// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip show/hide animation.
//!
//! The animation is a plain value: the host's frame driver passes the current
//! time to [`TooltipAnimation::progress_at`] and maps the result onto tooltip
//! sizes. Nothing runs in the background; if the host stops delivering frames
//! the tooltip simply stays at its last size.

/// Duration of both the show and the hide animation, in milliseconds.
pub const TOOLTIP_ANIMATION_MS: u64 = 300;

/// Current phase of the tooltip animation. Times are in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TooltipAnimation {
    /// Not animating; holds the resting progress (`0.0` hidden, `1.0` shown).
    Idle {
        /// Resting progress.
        progress: f64,
    },
    /// Growing from hidden to fully shown.
    Showing {
        /// Time the phase started.
        start: u64,
        /// Phase length.
        duration: u64,
    },
    /// Shrinking from fully shown to hidden.
    Hiding {
        /// Time the phase started.
        start: u64,
        /// Phase length.
        duration: u64,
    },
}

impl Default for TooltipAnimation {
    fn default() -> Self {
        Self::Idle { progress: 0.0 }
    }
}

impl TooltipAnimation {
    /// Starts growing at `now`, replacing any phase in flight.
    pub fn show(&mut self, now: u64) {
        *self = Self::Showing {
            start: now,
            duration: TOOLTIP_ANIMATION_MS,
        };
    }

    /// Starts shrinking at `now`, replacing any phase in flight.
    pub fn hide(&mut self, now: u64) {
        *self = Self::Hiding {
            start: now,
            duration: TOOLTIP_ANIMATION_MS,
        };
    }

    /// Snaps to hidden without animating.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Linear progress at `now`, from `0.0` (hidden) to `1.0` (shown).
    #[must_use]
    pub fn progress_at(&self, now: u64) -> f64 {
        match *self {
            Self::Idle { progress } => progress,
            Self::Showing { start, duration } => fraction(start, duration, now),
            Self::Hiding { start, duration } => 1.0 - fraction(start, duration, now),
        }
    }

    /// Returns `true` while a phase is in flight at `now`.
    #[must_use]
    pub fn is_running(&self, now: u64) -> bool {
        match *self {
            Self::Idle { .. } => false,
            Self::Showing { start, duration } | Self::Hiding { start, duration } => {
                now < start.saturating_add(duration)
            }
        }
    }

    /// Collapses a finished phase into [`TooltipAnimation::Idle`].
    pub fn settle(&mut self, now: u64) {
        if !matches!(self, Self::Idle { .. }) && !self.is_running(now) {
            *self = Self::Idle {
                progress: self.progress_at(now),
            };
        }
    }
}

fn fraction(start: u64, duration: u64, now: u64) -> f64 {
    if duration == 0 {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start).min(duration);
    elapsed as f64 / duration as f64
}
