// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The item source contract consumed by the carousel.

use alloc::rc::Rc;
use core::cell::Cell;
use core::ops::RangeInclusive;

use kurbo::Size;

/// Stable identity of an item, used to find it again after the data changes.
pub type ItemId = u64;

/// The index space an [`ItemProvider`] exposes.
///
/// Which variant a provider uses is fixed when it is installed on a carousel;
/// the bounds of an [`Extent::Indeterminate`] provider may move freely between
/// calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extent {
    /// Items `0..count`.
    Counted(usize),
    /// Items `left_most..=right_most`, a window into an unbounded sequence.
    ///
    /// `right_most < left_most` describes an empty window.
    Indeterminate {
        /// Lowest valid index.
        left_most: isize,
        /// Highest valid index.
        right_most: isize,
    },
}

impl Extent {
    /// Inclusive range of valid indices, or `None` when there are no items.
    #[must_use]
    pub fn bounds(self) -> Option<RangeInclusive<isize>> {
        match self {
            Self::Counted(0) => None,
            Self::Counted(count) => {
                let last = isize::try_from(count - 1).unwrap_or(isize::MAX);
                Some(0..=last)
            }
            Self::Indeterminate {
                left_most,
                right_most,
            } => (left_most <= right_most).then_some(left_most..=right_most),
        }
    }

    /// Number of valid indices.
    #[must_use]
    pub fn len(self) -> usize {
        match self {
            Self::Counted(count) => count,
            Self::Indeterminate {
                left_most,
                right_most,
            } => {
                let span = right_most.saturating_sub(left_most).saturating_add(1);
                usize::try_from(span).unwrap_or(0)
            }
        }
    }

    /// Returns `true` if there are no valid indices.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.bounds().is_none()
    }

    /// Returns `true` for [`Extent::Indeterminate`].
    #[must_use]
    pub fn is_indeterminate(self) -> bool {
        matches!(self, Self::Indeterminate { .. })
    }

    /// Index that page `0` of the whole sequence corresponds to.
    #[must_use]
    pub fn origin(self) -> isize {
        match self {
            Self::Counted(_) => 0,
            Self::Indeterminate { left_most, .. } => left_most,
        }
    }

    /// Clamps `index` into the valid range. Returns `None` when empty.
    #[must_use]
    pub fn clamp(self, index: isize) -> Option<isize> {
        self.bounds()
            .map(|range| index.clamp(*range.start(), *range.end()))
    }
}

/// Handle through which a provider announces that its data set changed.
///
/// Cloning yields another handle to the same flag. The carousel installs one
/// with [`ItemProvider::register_observer`] and drains it on its next frame.
#[derive(Clone, Debug, Default)]
pub struct DataSetObserver {
    changed: Rc<Cell<bool>>,
}

impl DataSetObserver {
    /// Creates a handle with no pending change.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the data set as changed.
    pub fn notify_changed(&self) {
        self.changed.set(true);
    }

    /// Returns `true` if a change is pending, without clearing it.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.changed.get()
    }

    /// Clears and returns the pending change flag.
    pub fn take_changed(&self) -> bool {
        self.changed.replace(false)
    }

    /// Returns `true` if both handles share the same flag.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.changed, &other.changed)
    }
}

/// Supplies items and renders them into views.
///
/// Only [`extent`](Self::extent) and [`render`](Self::render) are required;
/// the defaults describe a single view type, no stable ids, and no change
/// notifications.
pub trait ItemProvider {
    /// The view type produced by [`render`](Self::render).
    type View;

    /// The valid index space.
    fn extent(&self) -> Extent;

    /// Number of distinct view types; one recycling bucket is kept per type.
    fn view_type_count(&self) -> usize {
        1
    }

    /// View type of the item at `index`, in `0..view_type_count()`.
    ///
    /// `None` marks a view that must never be recycled.
    fn item_view_type(&self, index: isize) -> Option<usize> {
        let _ = index;
        Some(0)
    }

    /// Whether [`item_id`](Self::item_id) stays attached to the same item when
    /// the data set changes.
    fn has_stable_ids(&self) -> bool {
        false
    }

    /// Identity of the item at `index`.
    ///
    /// Defaults to the index itself. Negative indices map to their two's
    /// complement bit pattern, so distinct indices keep distinct ids.
    fn item_id(&self, index: isize) -> ItemId {
        index.cast_unsigned() as ItemId
    }

    /// Renders the item at `index` into a view sized `page`.
    ///
    /// `recycled` may hold a detached view of the item's view type. To reuse it,
    /// take it out of the `Option`; a candidate left in place is treated as
    /// unused and goes back to the recycling pool.
    fn render(
        &mut self,
        index: isize,
        recycled: &mut Option<Self::View>,
        page: Size,
    ) -> Self::View;

    /// Receives a view the carousel no longer retains.
    fn release_view(&mut self, view: Self::View) {
        drop(view);
    }

    /// Installs the observer to notify on data changes.
    fn register_observer(&mut self, observer: DataSetObserver) {
        let _ = observer;
    }

    /// Removes a previously installed observer.
    fn unregister_observer(&mut self, observer: &DataSetObserver) {
        let _ = observer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counted_extent() {
        let extent = Extent::Counted(10);
        assert_eq!(extent.bounds(), Some(0..=9));
        assert_eq!(extent.len(), 10);
        assert_eq!(extent.origin(), 0);
        assert!(!extent.is_indeterminate());
        assert_eq!(extent.clamp(-4), Some(0));
        assert_eq!(extent.clamp(40), Some(9));
    }

    #[test]
    fn empty_extents() {
        assert!(Extent::Counted(0).is_empty());
        assert_eq!(Extent::Counted(0).clamp(3), None);
        let window = Extent::Indeterminate {
            left_most: 5,
            right_most: 4,
        };
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
    }

    #[test]
    fn indeterminate_extent() {
        let window = Extent::Indeterminate {
            left_most: -3,
            right_most: 2,
        };
        assert_eq!(window.bounds(), Some(-3..=2));
        assert_eq!(window.len(), 6);
        assert_eq!(window.origin(), -3);
        assert!(window.is_indeterminate());
    }

    struct Plain;

    impl ItemProvider for Plain {
        type View = ();

        fn extent(&self) -> Extent {
            Extent::Indeterminate {
                left_most: -2,
                right_most: 2,
            }
        }

        fn render(&mut self, _index: isize, _recycled: &mut Option<()>, _page: Size) {}
    }

    #[test]
    fn default_ids_stay_distinct_for_negative_indices() {
        let plain = Plain;
        assert_eq!(plain.item_id(3), 3);
        assert_eq!(plain.item_id(-1), ItemId::MAX);
        assert_ne!(plain.item_id(-1), plain.item_id(-2));
    }

    #[test]
    fn observer_handles_share_a_flag() {
        let observer = DataSetObserver::new();
        let provider_side = observer.clone();
        assert!(observer.same_as(&provider_side));
        assert!(!DataSetObserver::new().same_as(&observer));

        provider_side.notify_changed();
        assert!(observer.is_changed());
        assert!(observer.take_changed());
        assert!(!observer.take_changed());
    }
}
