// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: horizontal swipe tracking for paging surfaces.
//!
//! This crate turns raw pointer down/move/up/cancel events into the small set
//! of decisions a horizontally paging surface needs:
//!
//! - [`swipe`]: a two-state machine ([`SwipePhase::Rest`] / [`SwipePhase::Dragging`])
//!   that only starts following the pointer after it moved beyond a touch-slop
//!   threshold, and reports per-move scroll deltas while dragging.
//! - [`velocity`]: a short-horizon [`VelocityTracker`] used to measure the
//!   release velocity of a gesture.
//! - [`snap`]: [`PageSnap`], which picks the page to settle on after release.
//!   A release faster than the fling threshold moves exactly one page in the
//!   direction of the fling; anything slower settles on the page nearest to the
//!   current scroll offset.
//!
//! Velocities reported by [`SwipeState::on_up`] are expressed along the *page
//! axis*: positive values move toward higher page numbers (the pointer travels
//! to the left), negative values toward lower page numbers.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_swipe::{PageSnap, SwipeConfig, SwipeState};
//!
//! let config = SwipeConfig::default();
//! let mut swipe = SwipeState::new(config);
//!
//! swipe.on_down(Point::new(300.0, 10.0), 0, false);
//! // Small jitter stays below the slop: nothing to scroll yet.
//! assert_eq!(swipe.on_move(Point::new(296.0, 10.0), 5), None);
//! // A decisive move starts dragging and reports the scroll delta.
//! assert_eq!(swipe.on_move(Point::new(250.0, 10.0), 20), Some(50.0));
//!
//! let velocity = swipe.on_up(Point::new(200.0, 10.0), 40).unwrap();
//! assert!(velocity > config.fling_threshold);
//!
//! let snap = PageSnap {
//!     current_page: 1,
//!     page_count: 3,
//!     scroll_offset: 400,
//!     page_width: 300,
//! };
//! assert_eq!(snap.target(velocity, config.fling_threshold), 2);
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod snap;
pub mod swipe;
pub mod velocity;

pub use snap::PageSnap;
pub use swipe::{SwipeConfig, SwipePhase, SwipeState};
pub use velocity::VelocityTracker;
