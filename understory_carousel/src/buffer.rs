// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page buffer: the window of materialized item views around the selection.
//!
//! A [`PageBuffer`] holds one [`Slot`] per materialized item, contiguous and in
//! ascending item order, covering the selected item and up to `side_buffer`
//! items on each side (fewer at the ends of the index space). Moving the
//! selection by one page with [`PageBuffer::shift`] evicts the slot that falls
//! out of the window and materializes the one that enters it; everything else
//! is kept. [`PageBuffer::rebuild`] throws the whole window away and builds it
//! again around a new selection.
//!
//! Views leaving the buffer go to a [`ViewPool`]; views the pool refuses are
//! handed back to the provider through [`ItemProvider::release_view`].

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;
use core::ops::RangeInclusive;

use kurbo::Size;
use understory_view_pool::{Release, ViewPool};

use crate::provider::ItemProvider;

/// Direction of a one-page step along the item sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward lower item indices.
    Backward,
    /// Toward higher item indices.
    Forward,
}

impl Direction {
    /// `-1` for [`Backward`](Self::Backward), `1` for [`Forward`](Self::Forward).
    #[must_use]
    pub fn signum(self) -> isize {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }

    /// Direction of a non-zero delta.
    #[must_use]
    pub fn from_delta(delta: isize) -> Option<Self> {
        match delta.signum() {
            -1 => Some(Self::Backward),
            1 => Some(Self::Forward),
            _ => None,
        }
    }
}

/// A materialized view bound to one item.
#[derive(Clone, Debug)]
pub struct Slot<V> {
    index: isize,
    view_type: Option<usize>,
    view: V,
}

impl<V> Slot<V> {
    /// Item index the view is bound to.
    #[must_use]
    pub fn index(&self) -> isize {
        self.index
    }

    /// View type reported by the provider when the view was rendered.
    #[must_use]
    pub fn view_type(&self) -> Option<usize> {
        self.view_type
    }

    /// The view.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The view, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

/// Everything the buffer needs to create and dispose of views.
pub struct Recycler<'a, P: ItemProvider> {
    provider: &'a mut P,
    pool: &'a mut ViewPool<P::View>,
    page: Size,
}

impl<P: ItemProvider> fmt::Debug for Recycler<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recycler")
            .field("pooled", &self.pool.len())
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}

impl<'a, P: ItemProvider> Recycler<'a, P> {
    /// Bundles a provider, the pool for its views, and the page size views are
    /// rendered at.
    pub fn new(provider: &'a mut P, pool: &'a mut ViewPool<P::View>, page: Size) -> Self {
        Self {
            provider,
            pool,
            page,
        }
    }

    fn materialize(&mut self, index: isize) -> Slot<P::View> {
        let view_type = self.provider.item_view_type(index);
        let mut candidate = self.pool.take(view_type);
        let view = self.provider.render(index, &mut candidate, self.page);
        if let Some(unused) = candidate {
            let release = self.pool.restore(view_type, unused);
            self.dispose(release);
        }
        Slot {
            index,
            view_type,
            view,
        }
    }

    fn evict(&mut self, slot: Slot<P::View>) {
        let release = self.pool.release(slot.view_type, slot.view);
        self.dispose(release);
    }

    fn dispose(&mut self, release: Release<P::View>) {
        if let Release::Discarded(view) = release {
            self.provider.release_view(view);
        }
    }
}

/// Ordered window of materialized views around the selected item.
#[derive(Clone, Debug)]
pub struct PageBuffer<V> {
    slots: VecDeque<Slot<V>>,
    buffer_index: usize,
    selected: Option<isize>,
    side_buffer: usize,
}

impl<V> PageBuffer<V> {
    /// Creates an empty buffer keeping `side_buffer` items on each side of the
    /// selection.
    #[must_use]
    pub fn new(side_buffer: usize) -> Self {
        Self {
            slots: VecDeque::with_capacity(side_buffer.saturating_mul(2).saturating_add(1)),
            buffer_index: 0,
            selected: None,
            side_buffer,
        }
    }

    /// Items kept on each side of the selection.
    #[must_use]
    pub fn side_buffer(&self) -> usize {
        self.side_buffer
    }

    /// Changes the radius. The buffer is not touched until the next
    /// [`rebuild`](Self::rebuild).
    pub fn set_side_buffer(&mut self, side_buffer: usize) {
        self.side_buffer = side_buffer;
    }

    /// Number of materialized slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing is materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Item index of the selection, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<isize> {
        self.selected
    }

    /// Position of the selected slot within the buffer.
    #[must_use]
    pub fn buffer_index(&self) -> usize {
        self.buffer_index
    }

    /// The selected slot.
    #[must_use]
    pub fn selected_slot(&self) -> Option<&Slot<V>> {
        self.selected.and(self.slots.get(self.buffer_index))
    }

    /// The slot at buffer position `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Slot<V>> {
        self.slots.get(position)
    }

    /// Slots in ascending item order.
    pub fn slots(&self) -> impl ExactSizeIterator<Item = &Slot<V>> + '_ {
        self.slots.iter()
    }

    /// Item indices of the slots, in buffer order.
    #[must_use]
    pub fn indices(&self) -> Vec<isize> {
        self.slots.iter().map(Slot::index).collect()
    }

    /// Returns `true` if `index` is materialized.
    #[must_use]
    pub fn contains(&self, index: isize) -> bool {
        self.position_of(index).is_some()
    }

    /// Buffer position of the slot bound to `index`.
    #[must_use]
    pub fn position_of(&self, index: isize) -> Option<usize> {
        let first = self.slots.front()?.index;
        let position = usize::try_from(index - first).ok()?;
        (position < self.slots.len()).then_some(position)
    }

    /// Releases every slot and materializes a new window around `selected`.
    ///
    /// `bounds` is the provider's current valid index range; `None` leaves the
    /// buffer empty. `selected` is clamped into `bounds`, and the clamped value
    /// is returned.
    pub fn rebuild<P>(
        &mut self,
        selected: isize,
        bounds: Option<RangeInclusive<isize>>,
        recycler: &mut Recycler<'_, P>,
    ) -> Option<isize>
    where
        P: ItemProvider<View = V>,
    {
        self.clear(recycler);
        let bounds = bounds?;
        let selected = selected.clamp(*bounds.start(), *bounds.end());

        self.slots.push_back(recycler.materialize(selected));
        let mut leading = 0;
        for offset in 1..=self.side_buffer_isize() {
            let left = selected - offset;
            if bounds.contains(&left) {
                self.slots.push_front(recycler.materialize(left));
                leading += 1;
            }
            let right = selected + offset;
            if bounds.contains(&right) {
                self.slots.push_back(recycler.materialize(right));
            }
        }

        self.selected = Some(selected);
        self.buffer_index = leading;
        log::debug!(
            "page buffer: rebuilt around {selected}, {} slots, buffer index {}",
            self.slots.len(),
            self.buffer_index
        );
        Some(selected)
    }

    /// Moves the selection one item in `direction`.
    ///
    /// The slot leaving the `selected ± side_buffer` window is evicted and the
    /// item entering it is materialized if it lies within `bounds`. Returns
    /// `false`, changing nothing, when the neighbouring item is not buffered.
    pub fn shift<P>(
        &mut self,
        direction: Direction,
        bounds: Option<RangeInclusive<isize>>,
        recycler: &mut Recycler<'_, P>,
    ) -> bool
    where
        P: ItemProvider<View = V>,
    {
        let Some(selected) = self.selected else {
            return false;
        };
        let target = selected + direction.signum();
        if !self.contains(target) {
            return false;
        }
        self.selected = Some(target);

        let side = self.side_buffer_isize();
        let (low, high) = (target - side, target + side);
        while self.slots.front().is_some_and(|slot| slot.index < low) {
            if let Some(slot) = self.slots.pop_front() {
                recycler.evict(slot);
            }
        }
        while self.slots.back().is_some_and(|slot| slot.index > high) {
            if let Some(slot) = self.slots.pop_back() {
                recycler.evict(slot);
            }
        }

        if let Some(bounds) = bounds {
            match direction {
                Direction::Forward => {
                    while let Some(next) = self.slots.back().map(|slot| slot.index + 1) {
                        if next > high || !bounds.contains(&next) {
                            break;
                        }
                        self.slots.push_back(recycler.materialize(next));
                    }
                }
                Direction::Backward => {
                    while let Some(prev) = self.slots.front().map(|slot| slot.index - 1) {
                        if prev < low || !bounds.contains(&prev) {
                            break;
                        }
                        self.slots.push_front(recycler.materialize(prev));
                    }
                }
            }
        }

        self.buffer_index = self.position_of(target).unwrap_or(0);
        log::debug!(
            "page buffer: shifted {direction:?} to {target}, {} slots, buffer index {}",
            self.slots.len(),
            self.buffer_index
        );
        true
    }

    /// Releases every slot and clears the selection.
    pub fn clear<P>(&mut self, recycler: &mut Recycler<'_, P>)
    where
        P: ItemProvider<View = V>,
    {
        while let Some(slot) = self.slots.pop_front() {
            recycler.evict(slot);
        }
        self.selected = None;
        self.buffer_index = 0;
    }

    /// Drops every slot without recycling, returning the views.
    ///
    /// Used when the views' provider is being replaced and its pool with it.
    pub fn take_views(&mut self) -> Vec<V> {
        self.selected = None;
        self.buffer_index = 0;
        self.slots.drain(..).map(|slot| slot.view).collect()
    }

    fn side_buffer_isize(&self) -> isize {
        isize::try_from(self.side_buffer).unwrap_or(isize::MAX)
    }
}
