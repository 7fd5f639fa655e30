// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::curve::Curve;

/// Animates a 1D integer scroll offset toward a final position.
///
/// A freshly constructed scroller is finished and sits at offset `0`.
#[derive(Clone, Debug)]
pub struct Scroller {
    curve: Curve,
    start_x: i32,
    final_x: i32,
    curr_x: i32,
    start_time: u64,
    duration: u64,
    finished: bool,
}

impl Default for Scroller {
    fn default() -> Self {
        Self::with_curve(Curve::default())
    }
}

impl Scroller {
    /// Creates a finished scroller using the default [`Curve`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a finished scroller using `curve`.
    #[must_use]
    pub fn with_curve(curve: Curve) -> Self {
        Self {
            curve,
            start_x: 0,
            final_x: 0,
            curr_x: 0,
            start_time: 0,
            duration: 0,
            finished: true,
        }
    }

    /// The progress curve.
    #[must_use]
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Sets the progress curve used by subsequent frames.
    pub fn set_curve(&mut self, curve: Curve) {
        self.curve = curve;
    }

    /// Starts animating from `start_x` by `dx` over `duration`, beginning at `now`.
    ///
    /// Any animation in progress is replaced.
    pub fn start_scroll(&mut self, start_x: i32, dx: i32, duration: u64, now: u64) {
        self.finished = false;
        self.start_x = start_x;
        self.curr_x = start_x;
        self.final_x = start_x.saturating_add(dx);
        self.start_time = now;
        self.duration = duration;
    }

    /// Advances the animation to `now`.
    ///
    /// Returns `true` if [`curr_x`](Self::curr_x) holds a position the host should
    /// apply, which includes the frame that lands on the final position. Returns
    /// `false` once the animation is finished.
    pub fn compute_scroll_offset(&mut self, now: u64) -> bool {
        if self.finished {
            return false;
        }
        let elapsed = now.saturating_sub(self.start_time);
        if elapsed < self.duration {
            let t = elapsed as f64 / self.duration as f64;
            let dx = f64::from(self.final_x) - f64::from(self.start_x);
            #[expect(
                clippy::cast_possible_truncation,
                reason = "the interpolated value lies between two i32 endpoints"
            )]
            let offset = (self.curve.apply(t) * dx).round() as i32;
            self.curr_x = self.start_x.saturating_add(offset);
        } else {
            self.curr_x = self.final_x;
            self.finished = true;
        }
        true
    }

    /// Stops the animation and jumps to the final position.
    pub fn abort_animation(&mut self) {
        self.curr_x = self.final_x;
        self.finished = true;
    }

    /// Forces the finished flag without moving the current position.
    pub fn force_finished(&mut self, finished: bool) {
        self.finished = finished;
    }

    /// Returns `true` when no animation is in progress.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current position.
    #[must_use]
    pub fn curr_x(&self) -> i32 {
        self.curr_x
    }

    /// Start position of the most recent animation.
    #[must_use]
    pub fn start_x(&self) -> i32 {
        self.start_x
    }

    /// Final position of the most recent animation.
    #[must_use]
    pub fn final_x(&self) -> i32 {
        self.final_x
    }

    /// Duration of the most recent animation.
    #[must_use]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Time elapsed since the most recent animation started.
    #[must_use]
    pub fn time_passed(&self, now: u64) -> u64 {
        now.saturating_sub(self.start_time)
    }
}
