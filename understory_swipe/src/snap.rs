// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Choosing the page to settle on after a swipe is released.

/// Snapshot of a paging surface at the moment a swipe is released.
///
/// Pages are `page_width` wide and laid out from offset `0`; page `i` is fully
/// visible at `scroll_offset == i * page_width`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSnap {
    /// Page the surface was settled on before the gesture.
    pub current_page: usize,
    /// Number of pages currently laid out.
    pub page_count: usize,
    /// Current scroll offset along the page axis.
    pub scroll_offset: i32,
    /// Width of a single page.
    pub page_width: i32,
}

impl PageSnap {
    /// Page to settle on for a release at the given page-axis `velocity`.
    ///
    /// A velocity beyond `-threshold` moves to the previous page and one beyond
    /// `threshold` to the next page, when such a page exists. Otherwise the
    /// nearest page to the scroll offset is chosen. The result is always within
    /// `0..page_count` (or `0` when there are no pages).
    #[must_use]
    pub fn target(self, velocity: f64, threshold: f64) -> usize {
        if velocity < -threshold && self.current_page > 0 {
            self.clamp(self.current_page - 1)
        } else if velocity > threshold && self.current_page + 1 < self.page_count {
            self.current_page + 1
        } else {
            self.nearest()
        }
    }

    /// Page whose left edge is nearest to the scroll offset.
    ///
    /// Computed as `(scroll_offset + page_width / 2) / page_width`, clamped to
    /// the page range. A non-positive page width keeps the current page.
    #[must_use]
    pub fn nearest(self) -> usize {
        if self.page_width <= 0 {
            return self.clamp(self.current_page);
        }
        let page = (self.scroll_offset + self.page_width / 2).div_euclid(self.page_width);
        self.clamp(usize::try_from(page).unwrap_or(0))
    }

    /// Clamps a page number into `0..page_count`.
    #[must_use]
    pub fn clamp(self, page: usize) -> usize {
        page.min(self.page_count.saturating_sub(1))
    }
}
