// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless, horizontally paged carousel.
//!
//! A [`Carousel`] shows one page of content at a time, one item per page,
//! populated from an [`ItemProvider`]. It does not paint anything: the host
//! measures it, places the pages it returns from
//! [`layout`](PageableSurface::layout), forwards pointer events, and ticks it
//! once per frame. In return it decides which items are materialized as views,
//! recycles views that scroll out of range, and turns swipes into discrete page
//! transitions with ordered notifications.
//!
//! ## Pieces
//!
//! - [`ItemProvider`]: the item source. It reports an [`Extent`], either a fixed
//!   count or a movable window into an unbounded sequence, and renders items
//!   into views, optionally reusing a recycled one.
//! - [`PageBuffer`]: the window of materialized views, the selected item plus
//!   up to `side_buffer` items on each side. Committed page transitions shift it
//!   by one slot at a time; programmatic selection rebuilds it.
//! - [`ViewPool`](understory_view_pool::ViewPool): detached views waiting for
//!   reuse, one bounded bucket per view type.
//! - Gestures come from [`understory_swipe`] and animation from
//!   [`understory_scroller`].
//! - [`FlowIndicator`] and [`SwitchListener`]: observers of the selection. On
//!   every change the indicator hears about it first, then the listener.
//!
//! ## Frame protocol
//!
//! A release snaps toward a target page with an animation. While the
//! animation runs, [`compute_scroll`](PageableSurface::compute_scroll) returns
//! `true`. On the first frame after it landed the transition is committed: the
//! buffer shifts, the scroll offset is recentred on the selected view, and the
//! observers run with the direction of travel. New snaps are refused while an
//! animation is running.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_carousel::{
//!     Carousel, CarouselConfig, Extent, ItemProvider, MeasureSpec, PageableSurface,
//!     PointerEvent,
//! };
//!
//! struct Labels(Vec<&'static str>);
//!
//! impl ItemProvider for Labels {
//!     type View = String;
//!
//!     fn extent(&self) -> Extent {
//!         Extent::Counted(self.0.len())
//!     }
//!
//!     fn render(&mut self, index: isize, recycled: &mut Option<String>, _page: Size) -> String {
//!         let mut view = recycled.take().unwrap_or_default();
//!         view.clear();
//!         view.push_str(self.0[index as usize]);
//!         view
//!     }
//! }
//!
//! let mut carousel = Carousel::new(CarouselConfig::default().with_side_buffer(1));
//! carousel.set_adapter(Labels(vec!["a", "b", "c", "d"]), 1);
//! carousel
//!     .measure(MeasureSpec::Exactly(400.0), MeasureSpec::Exactly(300.0))
//!     .unwrap();
//! assert_eq!(carousel.buffered_indices(), [0, 1, 2]);
//! assert_eq!(carousel.scroll_x(), 400);
//!
//! // A quick swipe to the left flings to the next page.
//! carousel.on_pointer(PointerEvent::down(300.0, 10.0, 0));
//! carousel.on_pointer(PointerEvent::moved(200.0, 10.0, 10));
//! carousel.on_pointer(PointerEvent::up(150.0, 10.0, 20));
//! assert_eq!(carousel.next_screen(), Some(2));
//!
//! let mut now = 20;
//! while carousel.compute_scroll(now) {
//!     now += 16;
//! }
//! assert_eq!(carousel.selected_view().map(String::as_str), Some("c"));
//! assert_eq!(carousel.buffered_indices(), [1, 2, 3]);
//! assert_eq!(carousel.scroll_x(), 400);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable the `serde` feature for
//! serializable [`SavedState`].

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod buffer;
mod carousel;
mod config;
mod error;
mod indicator;
mod provider;
mod state;
mod surface;

pub use buffer::{Direction, PageBuffer, Recycler, Slot};
pub use carousel::Carousel;
pub use config::CarouselConfig;
pub use error::{Axis, CarouselError, MeasureSpec};
pub use indicator::{FlowIndicator, FlowInfo, SwitchListener};
pub use provider::{DataSetObserver, Extent, ItemId, ItemProvider};
pub use state::SavedState;
pub use surface::{Orientation, PageableSurface, PagePlacement, PointerAction, PointerEvent};

pub use understory_scroller::Curve;
pub use understory_swipe::SwipeConfig;
