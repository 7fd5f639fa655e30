// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Rect, Size};
use understory_scroller::Scroller;
use understory_swipe::{PageSnap, SwipeState};
use understory_view_pool::ViewPool;

use crate::buffer::{Direction, PageBuffer, Recycler};
use crate::config::CarouselConfig;
use crate::error::{Axis, CarouselError, MeasureSpec};
use crate::indicator::{FlowIndicator, FlowInfo, SwitchListener};
use crate::provider::{DataSetObserver, ItemId, ItemProvider};
use crate::state::SavedState;
use crate::surface::{Orientation, PageableSurface, PagePlacement, PointerAction, PointerEvent};

/// A horizontally paged carousel over the items of an [`ItemProvider`].
///
/// The carousel keeps a [`PageBuffer`] of views around the selected item,
/// lays them out side by side one page wide, and turns pointer gestures into
/// page transitions animated by a [`Scroller`]. A transition is committed on
/// the first frame after the animation lands: the buffer shifts, then the
/// indicator and the switch listener are notified, in that order.
///
/// Pages here are buffer positions: page `i` is the `i`-th buffered view and is
/// fully visible at scroll offset `i * page_width`. After every commit the
/// scroll offset is moved to the selected view's buffer position.
pub struct Carousel<P: ItemProvider> {
    config: CarouselConfig,
    provider: Option<P>,
    indeterminate: bool,
    observer: DataSetObserver,
    buffer: PageBuffer<P::View>,
    pool: ViewPool<P::View>,
    scroller: Scroller,
    swipe: SwipeState,
    current_screen: usize,
    next_screen: Option<usize>,
    scroll_x: i32,
    page: Size,
    page_width: i32,
    first_layout: bool,
    current_id: Option<ItemId>,
    pending_reselect: bool,
    pending_restore: Option<isize>,
    orientation: Option<Orientation>,
    indicator: Option<Box<dyn FlowIndicator<P::View>>>,
    listener: Option<Box<dyn SwitchListener<P::View>>>,
}

impl<P> fmt::Debug for Carousel<P>
where
    P: ItemProvider + fmt::Debug,
    P::View: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("config", &self.config)
            .field("provider", &self.provider)
            .field("buffer", &self.buffer)
            .field("pool", &self.pool)
            .field("scroller", &self.scroller)
            .field("swipe", &self.swipe)
            .field("current_screen", &self.current_screen)
            .field("next_screen", &self.next_screen)
            .field("scroll_x", &self.scroll_x)
            .field("page", &self.page)
            .field("current_id", &self.current_id)
            .finish_non_exhaustive()
    }
}

impl<P: ItemProvider> Default for Carousel<P> {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl<P: ItemProvider> Carousel<P> {
    /// Creates a carousel with no provider.
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            provider: None,
            indeterminate: false,
            observer: DataSetObserver::new(),
            buffer: PageBuffer::new(config.side_buffer),
            pool: ViewPool::new(0, config.pool_capacity_per_type),
            scroller: Scroller::with_curve(config.curve),
            swipe: SwipeState::new(config.swipe),
            current_screen: 0,
            next_screen: None,
            scroll_x: 0,
            page: Size::ZERO,
            page_width: 0,
            first_layout: true,
            current_id: None,
            pending_reselect: false,
            pending_restore: None,
            orientation: None,
            indicator: None,
            listener: None,
        }
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The installed provider.
    #[must_use]
    pub fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    /// The installed provider, mutably.
    ///
    /// Changes to the data set should be announced through the observer the
    /// provider was given, or with
    /// [`notify_data_set_changed`](Self::notify_data_set_changed).
    pub fn provider_mut(&mut self) -> Option<&mut P> {
        self.provider.as_mut()
    }

    /// Installs `provider` and selects `initial`, returning the previous
    /// provider.
    ///
    /// The previous provider gets its views back and its observer removed. A
    /// fresh pool is created with one bucket per view type of the new
    /// provider. Nothing is selected if the new provider has no items. State
    /// restored before a provider was installed takes precedence over
    /// `initial`.
    pub fn set_adapter(&mut self, mut provider: P, initial: isize) -> Option<P> {
        let previous = self.take_adapter();

        let extent = provider.extent();
        self.indeterminate = extent.is_indeterminate();
        self.pool = ViewPool::new(
            provider.view_type_count(),
            self.config.pool_capacity_per_type,
        );
        self.observer = DataSetObserver::new();
        provider.register_observer(self.observer.clone());
        self.provider = Some(provider);
        log::debug!(
            "carousel: provider installed, {} items, indeterminate: {}",
            extent.len(),
            self.indeterminate
        );

        let initial = self.pending_restore.take().unwrap_or(initial);
        if !extent.is_empty() {
            self.set_selection(initial);
        }
        previous
    }

    /// Removes the provider, handing it every view the carousel holds.
    pub fn take_adapter(&mut self) -> Option<P> {
        let mut provider = self.provider.take()?;
        for view in self.buffer.take_views() {
            provider.release_view(view);
        }
        for view in self.pool.drain() {
            provider.release_view(view);
        }
        provider.unregister_observer(&self.observer);
        self.observer = DataSetObserver::new();
        self.scroller.force_finished(true);
        self.next_screen = None;
        self.current_screen = 0;
        self.current_id = None;
        self.scroll_x = 0;
        Some(provider)
    }

    /// Selects the item at `index`, rebuilding the buffer around it.
    ///
    /// Any animation and pending page transition is cancelled. `index` is
    /// clamped into the provider's bounds. The surface jumps to the selected
    /// page without animation and the indicator and listener are notified
    /// with direction `0`. Does nothing without a provider.
    pub fn set_selection(&mut self, index: isize) {
        self.next_screen = None;
        self.scroller.force_finished(true);
        let before = self.scroll_x.saturating_add(self.perceived_shift());
        let Some(provider) = self.provider.as_mut() else {
            return;
        };
        let bounds = provider.extent().bounds();
        let mut recycler = Recycler::new(provider, &mut self.pool, self.page);
        let Some(selected) = self.buffer.rebuild(index, bounds, &mut recycler) else {
            self.current_id = None;
            self.set_visible_view(0);
            return;
        };
        self.current_id = Some(provider.item_id(selected));

        let screen = self.buffer.buffer_index();
        self.set_visible_view(screen);
        self.notify_switched(0);
    }

    /// Changes the number of items kept on each side of the selection and
    /// rebuilds the buffer around the current item.
    pub fn set_side_buffer(&mut self, side_buffer: usize) {
        self.config.side_buffer = side_buffer;
        self.buffer.set_side_buffer(side_buffer);
        if let Some(selected) = self.buffer.selected_index() {
            self.set_selection(selected);
        }
    }

    /// Installs a page indicator and attaches it to this carousel.
    pub fn set_indicator(&mut self, indicator: impl FlowIndicator<P::View> + 'static) {
        let mut indicator: Box<dyn FlowIndicator<P::View>> = Box::new(indicator);
        indicator.attach(self.flow_info());
        self.indicator = Some(indicator);
    }

    /// Removes the page indicator.
    pub fn clear_indicator(&mut self) {
        self.indicator = None;
    }

    /// Installs the selection listener.
    pub fn set_switch_listener(&mut self, listener: impl SwitchListener<P::View> + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the selection listener.
    pub fn clear_switch_listener(&mut self) {
        self.listener = None;
    }

    /// Applies a data set change announced through the provider's observer.
    ///
    /// Every [`PageableSurface`] entry point does this first, so a change made
    /// while the carousel is idle shows up on the next layout or pointer event.
    /// Returns `true` if a change was pending.
    pub fn sync_data_set(&mut self) -> bool {
        if !self.observer.take_changed() {
            return false;
        }
        self.notify_data_set_changed();
        true
    }

    /// Re-selects after the provider's data set changed.
    ///
    /// - Indeterminate providers re-select the same item index.
    /// - Providers with stable ids re-select the previously selected item
    ///   wherever it moved, or the same index if it is gone.
    /// - Otherwise the buffer is rebuilt at the same index without notifying
    ///   the listener, and the indicator is attached again.
    pub fn notify_data_set_changed(&mut self) {
        self.observer.take_changed();
        let Some(provider) = self.provider.as_ref() else {
            return;
        };
        let extent = provider.extent();
        let selected = self.buffer.selected_index();
        log::debug!("carousel: data set changed, selected {selected:?}");

        if self.indeterminate {
            self.set_selection(selected.unwrap_or(extent.origin()));
            return;
        }

        if provider.has_stable_ids() {
            let found = self.current_id.and_then(|id| {
                extent
                    .bounds()
                    .and_then(|mut range| range.find(|&index| provider.item_id(index) == id))
            });
            self.set_selection(found.or(selected).unwrap_or(0));
            return;
        }

        self.reset_focus(selected.unwrap_or(0));
    }

    /// Starts animating toward page `screen`.
    ///
    /// The request is rejected while a previous animation is still running.
    /// `screen` is clamped to the buffered pages. The page transition is
    /// committed on the first frame after the animation lands. Returns `true`
    /// if the animation was started.
    pub fn snap_to_screen(&mut self, screen: usize, now: u64) -> bool {
        if !self.scroller.is_finished() || self.buffer.is_empty() {
            return false;
        }
        let screen = screen.min(self.buffer.len() - 1);
        self.next_screen = Some(screen);

        let delta = self.screen_offset(screen).saturating_sub(self.scroll_x);
        let duration =
            u64::from(delta.unsigned_abs()).saturating_mul(self.config.snap_duration_per_px);
        self.scroller.start_scroll(self.scroll_x, delta, duration, now);
        log::trace!(
            "carousel: snapping from page {} to {screen} over {duration}",
            self.current_screen
        );
        true
    }

    /// Snaps to the page nearest to the current scroll offset.
    pub fn snap_to_destination(&mut self, now: u64) -> bool {
        let target = self.page_snap().nearest();
        self.snap_to_screen(target, now)
    }

    /// Reports the host's orientation. A change re-selects the current item
    /// on the next [`layout`](PageableSurface::layout).
    pub fn on_configuration_changed(&mut self, orientation: Orientation) {
        if self.orientation != Some(orientation) {
            self.orientation = Some(orientation);
            self.pending_reselect = true;
        }
    }

    /// State to persist across host lifecycle boundaries.
    #[must_use]
    pub fn save_state(&self) -> SavedState {
        SavedState {
            selected: self.buffer.selected_index().or(self.pending_restore),
        }
    }

    /// Restores persisted state.
    ///
    /// Without a provider the selection is applied when one is installed.
    pub fn restore_state(&mut self, state: SavedState) {
        let Some(selected) = state.selected else {
            return;
        };
        if self.provider.is_some() {
            self.set_selection(selected);
        } else {
            self.pending_restore = Some(selected);
        }
    }

    /// The selected view.
    #[must_use]
    pub fn selected_view(&self) -> Option<&P::View> {
        self.buffer.selected_slot().map(|slot| slot.view())
    }

    /// The selected item index.
    #[must_use]
    pub fn selected_item_index(&self) -> Option<isize> {
        self.buffer.selected_index()
    }

    /// Id of the selected item, as of the last selection change.
    #[must_use]
    pub fn selected_item_id(&self) -> Option<ItemId> {
        self.current_id
    }

    /// Position of the selected view within the buffer.
    #[must_use]
    pub fn buffer_index(&self) -> usize {
        self.buffer.buffer_index()
    }

    /// Item indices of the buffered views.
    #[must_use]
    pub fn buffered_indices(&self) -> Vec<isize> {
        self.buffer.indices()
    }

    /// The page buffer.
    #[must_use]
    pub fn buffer(&self) -> &PageBuffer<P::View> {
        &self.buffer
    }

    /// The recycling pool.
    #[must_use]
    pub fn pool(&self) -> &ViewPool<P::View> {
        &self.pool
    }

    /// Page the surface is settled on.
    #[must_use]
    pub fn current_screen(&self) -> usize {
        self.current_screen
    }

    /// Page a running animation will commit, if any.
    #[must_use]
    pub fn next_screen(&self) -> Option<usize> {
        self.next_screen
    }

    /// Number of buffered pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.buffer.len()
    }

    /// Width of one page, as measured.
    #[must_use]
    pub fn page_width(&self) -> i32 {
        self.page_width
    }

    /// Number of items the provider exposes, or `1` without a provider.
    #[must_use]
    pub fn views_count(&self) -> usize {
        self.provider
            .as_ref()
            .map_or(1, |provider| provider.extent().len())
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.swipe.is_dragging()
    }

    /// Returns `true` while a snap animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.scroller.is_finished()
    }

    fn flow_info(&self) -> FlowInfo {
        FlowInfo {
            views_count: self.views_count(),
            page_width: self.page_width,
            selected_index: self.buffer.selected_index(),
            origin: self
                .provider
                .as_ref()
                .map_or(0, |provider| provider.extent().origin()),
        }
    }

    fn screen_offset(&self, screen: usize) -> i32 {
        i32::try_from(screen)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.page_width)
    }

    fn page_snap(&self) -> PageSnap {
        PageSnap {
            current_page: self.current_screen,
            page_count: self.buffer.len(),
            scroll_offset: self.scroll_x,
            page_width: self.page_width,
        }
    }

    /// Offset between the raw scroll position and the position the surface
    /// would have if every item were laid out from the provider's origin.
    fn perceived_shift(&self) -> i32 {
        let (Some(selected), Some(provider)) = (self.buffer.selected_index(), &self.provider)
        else {
            return 0;
        };
        let buffer_index = isize::try_from(self.buffer.buffer_index()).unwrap_or(isize::MAX);
        let pages = selected - provider.extent().origin() - buffer_index;
        saturate_i32(pages).saturating_mul(self.page_width)
    }

    fn scroll_to(&mut self, x: i32) {
        let old = self.scroll_x;
        if old == x {
            return;
        }
        self.scroll_x = x;
        let shift = self.perceived_shift();
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.on_scrolled(x.saturating_add(shift), 0, old.saturating_add(shift), 0);
        }
    }

    fn scroll_by(&mut self, delta: f64) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "per-event drag deltas are far inside i32 range"
        )]
        let delta = delta.round() as i32;
        let last_page = self.screen_offset(self.buffer.len().saturating_sub(1));
        let x = self.scroll_x.saturating_add(delta).clamp(0, last_page.max(0));
        self.scroll_to(x);
    }

    /// Jumps to page `screen` without animation.
    fn set_visible_view(&mut self, screen: usize) {
        self.current_screen = screen;
        self.scroller.force_finished(true);
        let target = self.screen_offset(screen);
        if target != self.scroll_x {
            self.scroll_to(target);
        } else {
            let perceived = self.scroll_x.saturating_add(self.perceived_shift());
            if let Some(indicator) = self.indicator.as_mut() {
                indicator.on_scrolled(perceived, 0, perceived, 0);
            }
        }
    }

    /// Commits the transition to page `next` once its animation has landed.
    fn commit_screen(&mut self, next: usize) {
        let current = self.current_screen;
        self.current_screen = next;
        let delta = isize::try_from(next).unwrap_or(isize::MAX)
            - isize::try_from(current).unwrap_or(isize::MAX);
        let Some(direction) = Direction::from_delta(delta) else {
            return;
        };
        let before = self.scroll_x.saturating_add(self.perceived_shift());
        let Some(provider) = self.provider.as_mut() else {
            return;
        };
        let bounds = provider.extent().bounds();
        let mut recycler = Recycler::new(provider, &mut self.pool, self.page);
        for _ in 0..delta.unsigned_abs() {
            if !self.buffer.shift(direction, bounds.clone(), &mut recycler) {
                break;
            }
        }
        self.current_id = self
            .buffer
            .selected_index()
            .map(|index| provider.item_id(index));

        // Recentre on the selected view. The perceived offset is unchanged
        // unless the animation was cut short.
        let screen = self.buffer.buffer_index();
        self.current_screen = screen;
        self.scroller.force_finished(true);
        self.scroll_x = self.screen_offset(screen);
        let after = self.scroll_x.saturating_add(self.perceived_shift());
        if after != before {
            if let Some(indicator) = self.indicator.as_mut() {
                indicator.on_scrolled(after, 0, before, 0);
            }
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "a direction sign is -1 or 1"
        )]
        let sign = direction.signum() as i32;
        self.notify_switched(sign);
        log::debug!(
            "carousel: committed page {next} ({sign:+}), selected {:?}, buffer index {}, {} buffered, scroll x {}",
            self.buffer.selected_index(),
            self.buffer.buffer_index(),
            self.buffer.len(),
            self.scroll_x
        );
    }

    fn notify_switched(&mut self, direction: i32) {
        let Some(slot) = self.buffer.selected_slot() else {
            return;
        };
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.on_switched(slot.view(), slot.index(), direction);
        }
        if let Some(listener) = self.listener.as_mut() {
            listener.on_switched(slot.view(), slot.index(), direction);
        }
    }

    /// Rebuilds the buffer at `index` from freshly rendered views.
    fn reset_focus(&mut self, index: isize) {
        let Some(provider) = self.provider.as_mut() else {
            return;
        };
        for view in self.buffer.take_views() {
            provider.release_view(view);
        }
        for view in self.pool.drain() {
            provider.release_view(view);
        }
        self.next_screen = None;
        self.scroller.force_finished(true);

        let before = self.scroll_x.saturating_add(self.perceived_shift());
        let Some(provider) = self.provider.as_mut() else {
            return;
        };
        let bounds = provider.extent().bounds();
        let mut recycler = Recycler::new(provider, &mut self.pool, self.page);
        let selected = self.buffer.rebuild(index, bounds, &mut recycler);
        self.current_id = selected.map(|index| provider.item_id(index));

        let screen = self.buffer.buffer_index();
        self.set_visible_view(screen);
        let info = self.flow_info();
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.attach(info);
        }
        log::debug!(
            "carousel: reset at {selected:?}, buffer index {}, {} buffered",
            self.buffer.buffer_index(),
            self.buffer.len()
        );
    }

    fn handle_pointer(&mut self, event: PointerEvent, consume: bool) -> bool {
        self.sync_data_set();
        if self.buffer.is_empty() {
            return false;
        }
        match event.action {
            PointerAction::Down => {
                let settling = !self.scroller.is_finished();
                if settling {
                    self.scroller.abort_animation();
                    let x = self.scroller.curr_x();
                    self.scroll_to(x);
                    if let Some(next) = self.next_screen.take() {
                        self.commit_screen(next);
                    }
                }
                self.swipe.on_down(event.position, event.time, settling);
                consume
            }
            PointerAction::Move => match self.swipe.on_move(event.position, event.time) {
                Some(delta) => {
                    self.scroll_by(delta);
                    true
                }
                None => consume,
            },
            PointerAction::Up => {
                if let Some(velocity) = self.swipe.on_up(event.position, event.time) {
                    let target = self
                        .page_snap()
                        .target(velocity, self.config.swipe.fling_threshold);
                    log::trace!("carousel: released at {velocity} px/s, target page {target}");
                    self.snap_to_screen(target, event.time);
                }
                consume
            }
            PointerAction::Cancel => {
                self.swipe.on_cancel();
                if consume {
                    self.snap_to_destination(event.time);
                }
                consume
            }
        }
    }
}

impl<P: ItemProvider> PageableSurface for Carousel<P> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Result<Size, CarouselError> {
        let w = width.exact().ok_or(CarouselError::InexactMeasure {
            axis: Axis::Horizontal,
            mode: width,
        })?;
        let h = height.exact().ok_or(CarouselError::InexactMeasure {
            axis: Axis::Vertical,
            mode: height,
        })?;
        self.sync_data_set();
        self.page = Size::new(w, h);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "surface widths are far inside i32 range"
        )]
        let page_width = w.round() as i32;
        self.page_width = page_width;

        if self.first_layout {
            self.first_layout = false;
            let x = self.screen_offset(self.current_screen);
            self.scroll_to(x);
        }
        Ok(self.page)
    }

    fn layout(&mut self) -> Vec<PagePlacement> {
        self.sync_data_set();
        if self.pending_reselect {
            self.pending_reselect = false;
            if let Some(selected) = self.buffer.selected_index() {
                self.set_selection(selected);
            }
        }
        let width = f64::from(self.page_width);
        let height = self.page.height;
        self.buffer
            .slots()
            .enumerate()
            .map(|(position, slot)| {
                let x0 = position as f64 * width;
                PagePlacement {
                    index: slot.index(),
                    rect: Rect::new(x0, 0.0, x0 + width, height),
                }
            })
            .collect()
    }

    fn on_intercept_pointer(&mut self, event: PointerEvent) -> bool {
        self.handle_pointer(event, false)
    }

    fn on_pointer(&mut self, event: PointerEvent) -> bool {
        self.handle_pointer(event, true)
    }

    fn compute_scroll(&mut self, now: u64) -> bool {
        self.sync_data_set();
        if self.scroller.compute_scroll_offset(now) {
            let x = self.scroller.curr_x();
            self.scroll_to(x);
            return true;
        }
        if let Some(next) = self.next_screen.take() {
            self.commit_screen(next);
        }
        false
    }

    fn scroll_x(&self) -> i32 {
        self.scroll_x
    }
}

fn saturate_i32(value: isize) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
