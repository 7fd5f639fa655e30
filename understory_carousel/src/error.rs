// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measurement constraints and the carousel's configuration error.

use core::fmt;

/// Layout axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along the page axis.
    Horizontal,
    /// Across the page axis.
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("width"),
            Self::Vertical => f.write_str("height"),
        }
    }
}

/// Size constraint handed down by the hosting layout for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeasureSpec {
    /// The surface must be exactly this size.
    Exactly(f64),
    /// The surface may be at most this size.
    AtMost(f64),
    /// No constraint.
    Unspecified,
}

impl MeasureSpec {
    /// The exact size, if this is [`MeasureSpec::Exactly`].
    #[must_use]
    pub fn exact(self) -> Option<f64> {
        match self {
            Self::Exactly(size) => Some(size),
            _ => None,
        }
    }
}

/// Integration error reported by the carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselError {
    /// The carousel was measured without an exact size on `axis`.
    ///
    /// Pages are exactly one surface wide, so the host must fix both
    /// dimensions before measuring.
    InexactMeasure {
        /// The offending axis.
        axis: Axis,
        /// The constraint that was supplied.
        mode: MeasureSpec,
    },
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InexactMeasure { axis, mode } => write!(
                f,
                "carousel {axis} must be measured exactly, got {mode:?}"
            ),
        }
    }
}

impl core::error::Error for CarouselError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn exact_size() {
        assert_eq!(MeasureSpec::Exactly(320.0).exact(), Some(320.0));
        assert_eq!(MeasureSpec::AtMost(320.0).exact(), None);
        assert_eq!(MeasureSpec::Unspecified.exact(), None);
    }

    #[test]
    fn display_names_axis_and_mode() {
        let err = CarouselError::InexactMeasure {
            axis: Axis::Vertical,
            mode: MeasureSpec::AtMost(200.0),
        };
        assert_eq!(
            err.to_string(),
            "carousel height must be measured exactly, got AtMost(200.0)"
        );
    }
}
