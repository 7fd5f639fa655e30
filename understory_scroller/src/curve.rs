// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Progress curve applied to the normalized animation time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Quadratic ease-out: fast start, gentle landing.
    #[default]
    Decelerate,
    /// Constant speed.
    Linear,
    /// Cubic smoothstep: gentle start and landing.
    Smoothstep,
}

impl Curve {
    /// Maps normalized time `t` (clamped to `[0, 1]`) to normalized progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Linear => t,
            Self::Smoothstep => t * t * (3.0 - 2.0 * t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for curve in [Curve::Decelerate, Curve::Linear, Curve::Smoothstep] {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} at 0");
            assert_eq!(curve.apply(1.0), 1.0, "{curve:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Curve::Linear.apply(-3.0), 0.0);
        assert_eq!(Curve::Decelerate.apply(7.0), 1.0);
    }

    #[test]
    fn shapes() {
        assert_eq!(Curve::Linear.apply(0.5), 0.5);
        assert_eq!(Curve::Decelerate.apply(0.5), 0.75);
        assert_eq!(Curve::Smoothstep.apply(0.5), 0.5);
        assert!(Curve::Smoothstep.apply(0.25) < 0.25);
    }
}
