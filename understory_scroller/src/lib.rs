// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroller --heading-base-level=0

//! Understory Scroller: a frame-driven scroll animator.
//!
//! [`Scroller`] moves an integer scroll offset from a start position to a final
//! position over a fixed duration, shaped by a [`Curve`]. It owns no clock and
//! no surface: the host starts an animation with [`Scroller::start_scroll`] and
//! then, once per frame, calls [`Scroller::compute_scroll_offset`] with the
//! current time and applies [`Scroller::curr_x`] to whatever it is scrolling.
//!
//! The frame protocol mirrors a classic toolkit scroller:
//!
//! - `compute_scroll_offset` returns `true` while the animation has something
//!   to report, *including* the frame on which it lands on the final position.
//! - Afterwards it returns `false`; that is the frame on which hosts commit any
//!   work that waits for the scroll to settle.
//! - A zero-duration scroll lands on its first frame, which makes it a cheap
//!   way to jump.
//!
//! ```rust
//! use understory_scroller::Scroller;
//!
//! let mut scroller = Scroller::new();
//! scroller.start_scroll(0, 300, 600, 1_000);
//!
//! assert!(scroller.compute_scroll_offset(1_300));
//! assert!(scroller.curr_x() > 150); // decelerating: more than half way at half time
//!
//! assert!(scroller.compute_scroll_offset(1_600));
//! assert_eq!(scroller.curr_x(), 300);
//! assert!(scroller.is_finished());
//!
//! assert!(!scroller.compute_scroll_offset(1_616));
//! ```
//!
//! Times are in milliseconds (or any monotonic unit the host chooses, as long
//! as durations use the same unit).
//!
//! This crate is `no_std` compatible.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod curve;
mod scroller;

pub use curve::Curve;
pub use scroller::Scroller;
