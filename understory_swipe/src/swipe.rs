// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe state machine: slop-gated dragging and release velocity.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`SwipeState::on_down`], telling it whether a settle
//!    animation was still running (interrupting one starts dragging at once).
//! 2) On each move, call [`SwipeState::on_move`]. Once the pointer has travelled
//!    more than [`SwipeConfig::touch_slop`] horizontally since the down event,
//!    the state becomes [`SwipePhase::Dragging`] and every move returns the
//!    scroll delta to apply.
//! 3) On pointer up, [`SwipeState::on_up`] returns the page-axis release velocity
//!    if a drag was in progress. Feed it to [`PageSnap`](crate::PageSnap).
//! 4) On cancel, [`SwipeState::on_cancel`] resets and reports whether a drag was
//!    interrupted.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`
use kurbo::Point;

use crate::velocity::VelocityTracker;

/// Tuning for swipe recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Horizontal distance the pointer must travel before a drag starts.
    pub touch_slop: f64,
    /// Minimum release speed, in units per second, that counts as a fling.
    pub fling_threshold: f64,
    /// Upper bound applied to measured release speeds.
    pub max_velocity: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            touch_slop: 16.0,
            fling_threshold: 1000.0,
            max_velocity: 8000.0,
        }
    }
}

/// Phase of the swipe state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipePhase {
    /// Not following the pointer.
    #[default]
    Rest,
    /// Following the pointer; moves produce scroll deltas.
    Dragging,
}

/// Tracks a single horizontal swipe gesture.
#[derive(Clone, Debug, Default)]
pub struct SwipeState {
    config: SwipeConfig,
    phase: SwipePhase,
    last_x: Option<f64>,
    tracker: VelocityTracker,
}

impl SwipeState {
    /// Creates a resting state machine with the given tuning.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The tuning in use.
    #[must_use]
    pub fn config(&self) -> SwipeConfig {
        self.config
    }

    /// Replaces the tuning. Takes effect from the next event.
    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Returns `true` while following the pointer.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == SwipePhase::Dragging
    }

    /// Handles pointer down.
    ///
    /// `settling` is whether a settle animation was in flight when the pointer
    /// went down; the caller is expected to have stopped it. Catching a moving
    /// surface starts dragging without waiting for the slop.
    pub fn on_down(&mut self, pos: Point, time: u64, settling: bool) {
        self.tracker.clear();
        self.tracker.add(pos, time);
        self.last_x = Some(pos.x);
        self.phase = if settling {
            SwipePhase::Dragging
        } else {
            SwipePhase::Rest
        };
    }

    /// Handles pointer move, returning the scroll delta while dragging.
    ///
    /// The delta is `previous_x - pos.x`: positive when the pointer moves left,
    /// which scrolls content toward higher pages. Returns `None` before the
    /// slop is exceeded and when no gesture is active.
    pub fn on_move(&mut self, pos: Point, time: u64) -> Option<f64> {
        let last_x = self.last_x?;
        self.tracker.add(pos, time);
        if (pos.x - last_x).abs() > self.config.touch_slop {
            self.phase = SwipePhase::Dragging;
        }
        if self.phase != SwipePhase::Dragging {
            return None;
        }
        self.last_x = Some(pos.x);
        Some(last_x - pos.x)
    }

    /// Handles pointer up, ending the gesture.
    ///
    /// Returns the page-axis release velocity (positive toward higher pages)
    /// if a drag was in progress.
    pub fn on_up(&mut self, pos: Point, time: u64) -> Option<f64> {
        let dragging = self.last_x.is_some() && self.is_dragging();
        let velocity = if dragging {
            self.tracker.add(pos, time);
            Some(-self.tracker.velocity(self.config.max_velocity).x)
        } else {
            None
        };
        self.reset();
        velocity
    }

    /// Handles pointer cancel, ending the gesture. Returns `true` if a drag was
    /// interrupted.
    pub fn on_cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.reset();
        was_dragging
    }

    fn reset(&mut self) {
        self.phase = SwipePhase::Rest;
        self.last_x = None;
        self.tracker.clear();
    }
}
