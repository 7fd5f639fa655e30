// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer velocity estimation over a short time horizon.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`
use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Samples older than this (relative to the newest sample) are ignored.
pub const HORIZON_MS: u64 = 100;

/// Maximum number of samples retained.
const MAX_SAMPLES: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    pos: Point,
    time: u64,
}

/// Records timestamped pointer positions and estimates the current velocity.
///
/// Timestamps are in milliseconds; velocities are reported in units per second.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[Sample; 8]>,
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sample. A timestamp earlier than the newest sample starts a new
    /// series.
    pub fn add(&mut self, pos: Point, time: u64) {
        if self.samples.last().is_some_and(|last| time < last.time) {
            self.samples.clear();
        }
        if self.samples.len() == MAX_SAMPLES {
            self.samples.remove(0);
        }
        self.samples.push(Sample { pos, time });
    }

    /// Forgets all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no samples are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Velocity in units per second across the samples inside [`HORIZON_MS`]
    /// of the newest one, with each component clamped to `±max_velocity`.
    ///
    /// Returns zero when fewer than two samples span a non-zero duration.
    #[must_use]
    pub fn velocity(&self, max_velocity: f64) -> Vec2 {
        let Some(newest) = self.samples.last() else {
            return Vec2::ZERO;
        };
        let Some(oldest) = self
            .samples
            .iter()
            .find(|s| newest.time - s.time <= HORIZON_MS)
        else {
            return Vec2::ZERO;
        };
        let dt = newest.time - oldest.time;
        if dt == 0 {
            return Vec2::ZERO;
        }
        let v = (newest.pos - oldest.pos) * (1000.0 / dt as f64);
        let max = max_velocity.abs();
        Vec2::new(v.x.clamp(-max, max), v.y.clamp(-max, max))
    }
}
