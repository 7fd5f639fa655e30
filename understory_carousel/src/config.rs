// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.

use understory_scroller::Curve;
use understory_swipe::SwipeConfig;

/// Tunables for a [`Carousel`](crate::Carousel).
///
/// ```rust
/// use understory_carousel::CarouselConfig;
///
/// let config = CarouselConfig::default().with_side_buffer(1);
/// assert_eq!(config.window_len(), 3);
/// assert_eq!(config.snap_duration_per_px, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Items kept materialized on each side of the selection.
    ///
    /// The default of `3` keeps a window of seven views.
    pub side_buffer: usize,
    /// Detached views retained per view type; one screen's worth by default.
    pub pool_capacity_per_type: usize,
    /// Drag and fling thresholds.
    pub swipe: SwipeConfig,
    /// Snap animation time per pixel travelled.
    pub snap_duration_per_px: u64,
    /// Progress curve of snap animations.
    pub curve: Curve,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            side_buffer: 3,
            pool_capacity_per_type: 1,
            swipe: SwipeConfig::default(),
            snap_duration_per_px: 2,
            curve: Curve::Decelerate,
        }
    }
}

impl CarouselConfig {
    /// Sets [`side_buffer`](Self::side_buffer).
    #[must_use]
    pub fn with_side_buffer(mut self, side_buffer: usize) -> Self {
        self.side_buffer = side_buffer;
        self
    }

    /// Sets [`pool_capacity_per_type`](Self::pool_capacity_per_type).
    #[must_use]
    pub fn with_pool_capacity_per_type(mut self, capacity: usize) -> Self {
        self.pool_capacity_per_type = capacity;
        self
    }

    /// Sets [`swipe`](Self::swipe).
    #[must_use]
    pub fn with_swipe(mut self, swipe: SwipeConfig) -> Self {
        self.swipe = swipe;
        self
    }

    /// Sets [`snap_duration_per_px`](Self::snap_duration_per_px).
    #[must_use]
    pub fn with_snap_duration_per_px(mut self, duration: u64) -> Self {
        self.snap_duration_per_px = duration;
        self
    }

    /// Sets [`curve`](Self::curve).
    #[must_use]
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Number of views in a full window, `2 * side_buffer + 1`.
    #[must_use]
    pub fn window_len(&self) -> usize {
        self.side_buffer.saturating_mul(2).saturating_add(1)
    }
}
