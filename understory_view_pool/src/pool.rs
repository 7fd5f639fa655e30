// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recycling pool and its bookkeeping.

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Outcome of handing a view back to a [`ViewPool`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Release<V> {
    /// The view was retained for reuse.
    Pooled,
    /// The view was not retained and is returned to the caller for disposal.
    Discarded(V),
}

impl<V> Release<V> {
    /// Returns `true` if the view was retained by the pool.
    #[must_use]
    pub fn is_pooled(&self) -> bool {
        matches!(self, Self::Pooled)
    }

    /// Returns the discarded view, if any.
    #[must_use]
    pub fn into_discarded(self) -> Option<V> {
        match self {
            Self::Pooled => None,
            Self::Discarded(view) => Some(view),
        }
    }
}

/// Counters describing pool traffic since construction or the last
/// [`ViewPool::reset_stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Views accepted into a bucket.
    pub pooled: usize,
    /// Views handed out by [`ViewPool::take`].
    pub reused: usize,
    /// Views refused because their bucket was full or their type was invalid.
    pub discarded: usize,
}

/// A bounded pool of detached views, bucketed by view type.
///
/// Buckets are created up front from the view type count declared by the item
/// source; the pool never grows new buckets on demand.
#[derive(Clone, Debug)]
pub struct ViewPool<V> {
    buckets: Vec<SmallVec<[V; 2]>>,
    capacity_per_type: usize,
    stats: PoolStats,
}

impl<V> Default for ViewPool<V> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<V> ViewPool<V> {
    /// Creates a pool with `view_type_count` empty buckets, each holding at most
    /// `capacity_per_type` views.
    #[must_use]
    pub fn new(view_type_count: usize, capacity_per_type: usize) -> Self {
        let mut buckets = Vec::with_capacity(view_type_count);
        buckets.resize_with(view_type_count, SmallVec::new);
        Self {
            buckets,
            capacity_per_type,
            stats: PoolStats::default(),
        }
    }

    /// Number of view types this pool has buckets for.
    #[must_use]
    pub fn view_type_count(&self) -> usize {
        self.buckets.len()
    }

    /// Maximum number of views retained per view type.
    #[must_use]
    pub fn capacity_per_type(&self) -> usize {
        self.capacity_per_type
    }

    /// Total number of pooled views across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(SmallVec::len).sum()
    }

    /// Returns `true` if no views are pooled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(SmallVec::is_empty)
    }

    /// Number of pooled views of the given type.
    ///
    /// Returns `0` for `None` and for unknown types.
    #[must_use]
    pub fn bucket_len(&self, view_type: Option<usize>) -> usize {
        self.bucket(view_type).map_or(0, SmallVec::len)
    }

    /// Traffic counters.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.stats
    }

    /// Resets the traffic counters to zero.
    pub fn reset_stats(&mut self) {
        self.stats = PoolStats::default();
    }

    /// Removes and returns the first available view of `view_type`.
    pub fn take(&mut self, view_type: Option<usize>) -> Option<V> {
        let bucket = self.bucket_mut(view_type)?;
        if bucket.is_empty() {
            return None;
        }
        let view = bucket.remove(0);
        self.stats.reused += 1;
        log::trace!("view pool: reusing view of type {view_type:?}");
        Some(view)
    }

    /// Hands a detached view to the pool.
    ///
    /// The view is retained if its bucket holds fewer than
    /// [`capacity_per_type`](Self::capacity_per_type) views; otherwise, or if
    /// the type is `None` or out of range, it is returned as
    /// [`Release::Discarded`].
    pub fn release(&mut self, view_type: Option<usize>, view: V) -> Release<V> {
        self.insert(view_type, view, false)
    }

    /// Puts a view obtained from [`take`](Self::take) but left unused back at the
    /// front of its bucket.
    ///
    /// The capacity rule still applies, so restoring into a bucket that was
    /// refilled in the meantime may discard.
    pub fn restore(&mut self, view_type: Option<usize>, view: V) -> Release<V> {
        let release = self.insert(view_type, view, true);
        if release.is_pooled() {
            // The earlier `take` counted this view as reused.
            self.stats.reused = self.stats.reused.saturating_sub(1);
        }
        release
    }

    /// Removes every pooled view, returning them for disposal.
    pub fn drain(&mut self) -> Vec<V> {
        let mut drained = Vec::with_capacity(self.len());
        for bucket in &mut self.buckets {
            drained.extend(bucket.drain(..));
        }
        drained
    }

    fn insert(&mut self, view_type: Option<usize>, view: V, front: bool) -> Release<V> {
        let capacity = self.capacity_per_type;
        let Some(ty) = view_type else {
            self.stats.discarded += 1;
            return Release::Discarded(view);
        };
        let Some(bucket) = self.buckets.get_mut(ty) else {
            log::warn!(
                "view pool: view type {ty} is outside the declared range 0..{}; discarding",
                self.buckets.len()
            );
            self.stats.discarded += 1;
            return Release::Discarded(view);
        };
        if bucket.len() >= capacity {
            log::trace!("view pool: bucket {ty} is full; discarding");
            self.stats.discarded += 1;
            return Release::Discarded(view);
        }
        if front {
            bucket.insert(0, view);
        } else {
            bucket.push(view);
        }
        self.stats.pooled += 1;
        Release::Pooled
    }

    fn bucket(&self, view_type: Option<usize>) -> Option<&SmallVec<[V; 2]>> {
        self.buckets.get(view_type?)
    }

    fn bucket_mut(&mut self, view_type: Option<usize>) -> Option<&mut SmallVec<[V; 2]>> {
        self.buckets.get_mut(view_type?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn new_pool_is_empty() {
        let pool = ViewPool::<u32>::new(3, 1);
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.view_type_count(), 3);
        assert_eq!(pool.capacity_per_type(), 1);
    }

    #[test]
    fn release_respects_capacity_per_type() {
        let mut pool = ViewPool::new(2, 2);
        assert_eq!(pool.release(Some(0), 1), Release::Pooled);
        assert_eq!(pool.release(Some(0), 2), Release::Pooled);
        assert_eq!(pool.release(Some(0), 3), Release::Discarded(3));
        // Other buckets are unaffected by a full neighbour.
        assert_eq!(pool.release(Some(1), 4), Release::Pooled);

        assert_eq!(pool.bucket_len(Some(0)), 2);
        assert_eq!(pool.bucket_len(Some(1)), 1);
        assert_eq!(
            pool.stats(),
            PoolStats {
                pooled: 3,
                reused: 0,
                discarded: 1,
            }
        );
    }

    #[test]
    fn take_is_first_available() {
        let mut pool = ViewPool::new(1, 3);
        pool.release(Some(0), 'a');
        pool.release(Some(0), 'b');
        pool.release(Some(0), 'c');

        assert_eq!(pool.take(Some(0)), Some('a'));
        assert_eq!(pool.take(Some(0)), Some('b'));
        assert_eq!(pool.take(Some(0)), Some('c'));
        assert_eq!(pool.take(Some(0)), None);
        assert_eq!(pool.stats().reused, 3);
    }

    #[test]
    fn restore_puts_candidate_back_at_front() {
        let mut pool = ViewPool::new(1, 2);
        pool.release(Some(0), 'a');
        pool.release(Some(0), 'b');

        let candidate = pool.take(Some(0)).unwrap();
        assert_eq!(pool.restore(Some(0), candidate), Release::Pooled);
        assert_eq!(pool.take(Some(0)), Some('a'));
        // One successful take of 'a' counted, the restored one was not.
        assert_eq!(pool.stats().reused, 1);
    }

    #[test]
    fn ignored_and_unknown_types_are_never_pooled() {
        let mut pool = ViewPool::new(1, 4);
        assert_eq!(pool.release(None, 7), Release::Discarded(7));
        assert_eq!(pool.release(Some(5), 8), Release::Discarded(8));
        assert!(pool.is_empty());
        assert_eq!(pool.take(None), None);
        assert_eq!(pool.take(Some(5)), None);
        assert_eq!(pool.bucket_len(Some(5)), 0);
    }

    #[test]
    fn zero_capacity_discards_everything() {
        let mut pool = ViewPool::new(1, 0);
        assert_eq!(pool.release(Some(0), 1), Release::Discarded(1));
        assert!(pool.is_empty());
    }

    #[test]
    fn drain_empties_all_buckets() {
        let mut pool = ViewPool::new(2, 2);
        pool.release(Some(0), 1);
        pool.release(Some(1), 2);
        pool.release(Some(1), 3);

        let mut drained = pool.drain();
        drained.sort_unstable();
        assert_eq!(drained, vec![1, 2, 3]);
        assert!(pool.is_empty());
    }

    #[test]
    fn release_helpers() {
        let pooled: Release<u8> = Release::Pooled;
        assert!(pooled.is_pooled());
        assert_eq!(pooled.into_discarded(), None);
        assert_eq!(Release::Discarded(3_u8).into_discarded(), Some(3));
    }
}
