// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability a hosting layout consumes from a paging surface.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::error::{CarouselError, MeasureSpec};

/// Kind of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Primary pointer pressed.
    Down,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released.
    Up,
    /// Gesture taken away by the host.
    Cancel,
}

/// A pointer event in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub action: PointerAction,
    /// Where, relative to the surface's top-left corner.
    pub position: Point,
    /// When, in the host's monotonic time unit (milliseconds by convention).
    pub time: u64,
}

impl PointerEvent {
    /// Creates a pointer event.
    #[must_use]
    pub fn new(action: PointerAction, position: Point, time: u64) -> Self {
        Self {
            action,
            position,
            time,
        }
    }

    /// A [`PointerAction::Down`] at `(x, y)`.
    #[must_use]
    pub fn down(x: f64, y: f64, time: u64) -> Self {
        Self::new(PointerAction::Down, Point::new(x, y), time)
    }

    /// A [`PointerAction::Move`] to `(x, y)`.
    #[must_use]
    pub fn moved(x: f64, y: f64, time: u64) -> Self {
        Self::new(PointerAction::Move, Point::new(x, y), time)
    }

    /// A [`PointerAction::Up`] at `(x, y)`.
    #[must_use]
    pub fn up(x: f64, y: f64, time: u64) -> Self {
        Self::new(PointerAction::Up, Point::new(x, y), time)
    }

    /// A [`PointerAction::Cancel`].
    #[must_use]
    pub fn cancel(time: u64) -> Self {
        Self::new(PointerAction::Cancel, Point::ZERO, time)
    }
}

/// Screen orientation reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Taller than wide.
    Portrait,
    /// Wider than tall.
    Landscape,
}

/// Where one buffered page is placed, in surface content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagePlacement {
    /// Item shown on the page.
    pub index: isize,
    /// The page's rectangle.
    pub rect: Rect,
}

/// A horizontally paged surface driven by its host.
///
/// The host measures and lays the surface out, forwards pointer events, and
/// calls [`compute_scroll`](Self::compute_scroll) once per frame for as long
/// as it returns `true`.
pub trait PageableSurface {
    /// Records the page size. Both constraints must be exact.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Result<Size, CarouselError>;

    /// Places the buffered pages side by side, in buffer order.
    fn layout(&mut self) -> Vec<PagePlacement>;

    /// Observes a pointer event on its way to the surface's content.
    ///
    /// Returns `true` when the surface takes the gesture over.
    fn on_intercept_pointer(&mut self, event: PointerEvent) -> bool;

    /// Handles a pointer event. Returns `true` if it was consumed.
    fn on_pointer(&mut self, event: PointerEvent) -> bool;

    /// Advances animations to `now`. Returns `true` while more frames are
    /// needed.
    fn compute_scroll(&mut self, now: u64) -> bool;

    /// Current horizontal scroll offset.
    fn scroll_x(&self) -> i32;
}
