// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_view_pool --heading-base-level=0

//! Understory View Pool: a bounded recycling pool for detached item views.
//!
//! Paging and list surfaces that materialize one view per visible item keep a
//! small reserve of views that scrolled out of range so the next item of the
//! same *view type* can be rendered into an existing view instead of a new
//! one. This crate provides that reserve:
//!
//! - [`ViewPool`] holds one bucket per view type declared by the item source.
//! - Each bucket is capped at a fixed capacity (typically one screen's worth of
//!   simultaneously visible views). Views released into a full bucket are
//!   handed back as [`Release::Discarded`] so the owner can dispose of them.
//! - [`ViewPool::take`] follows a first-available policy: it always returns the
//!   front of the bucket and never tries to find a "best match".
//! - [`ViewPool::restore`] puts an unused candidate back at the front, for
//!   sources that decided to build a fresh view instead.
//!
//! View types are `Option<usize>`: `None` marks an item that must never be
//! recycled, and types at or beyond the declared count are treated as a
//! contract violation of the source. Neither is ever pooled.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_view_pool::{Release, ViewPool};
//!
//! // Two view types, one reserve view per type.
//! let mut pool = ViewPool::new(2, 1);
//!
//! assert_eq!(pool.release(Some(0), "header"), Release::Pooled);
//! // The bucket for type 0 is full: the next view is discarded.
//! assert_eq!(pool.release(Some(0), "header-2"), Release::Discarded("header-2"));
//!
//! assert_eq!(pool.take(Some(0)), Some("header"));
//! assert_eq!(pool.take(Some(1)), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod pool;

pub use pool::{PoolStats, Release, ViewPool};
