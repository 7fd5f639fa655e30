// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page indicator and selection listener capabilities.

/// What a page indicator needs to know about the carousel it tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowInfo {
    /// Number of items (the width of the current window for indeterminate
    /// providers).
    pub views_count: usize,
    /// Width of one page.
    pub page_width: i32,
    /// Selected item index, if anything is selected.
    pub selected_index: Option<isize>,
    /// Item index shown at perceived offset `0`.
    pub origin: isize,
}

/// A visual indicator that follows the carousel's scroll position.
///
/// The indicator is always notified of a page switch before the
/// [`SwitchListener`].
pub trait FlowIndicator<V> {
    /// Called when the indicator is installed and whenever the data set is
    /// reset underneath it.
    fn attach(&mut self, info: FlowInfo);

    /// Called on every scroll offset change.
    ///
    /// Horizontal offsets are perceived offsets: the position the surface
    /// would have if every item from the first one were laid out, not just
    /// the buffered window.
    fn on_scrolled(&mut self, h: i32, v: i32, old_h: i32, old_v: i32);

    /// Called when the selection changes. `direction` is `0` for programmatic
    /// selection and the sign of the page step for swipes.
    fn on_switched(&mut self, view: &V, index: isize, direction: i32);
}

/// Receives selection changes.
///
/// Implemented for every `FnMut(&V, isize, i32)` closure.
pub trait SwitchListener<V> {
    /// Called when the selection changes, after the indicator.
    fn on_switched(&mut self, view: &V, index: isize, direction: i32);
}

impl<V, F> SwitchListener<V> for F
where
    F: FnMut(&V, isize, i32),
{
    fn on_switched(&mut self, view: &V, index: isize, direction: i32) {
        self(view, index, direction);
    }
}
