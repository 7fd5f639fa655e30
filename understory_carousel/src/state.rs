// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted carousel state.

/// State saved across host lifecycle boundaries.
///
/// Restoring it on a carousel with the same provider selects the same item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedState {
    /// The selected item index, if anything was selected.
    pub selected: Option<isize>,
}

impl SavedState {
    /// State selecting `index`.
    #[must_use]
    pub fn new(index: isize) -> Self {
        Self {
            selected: Some(index),
        }
    }
}
