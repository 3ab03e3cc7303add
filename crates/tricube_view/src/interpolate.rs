//! Animation preferences and interpolation functions.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};
use strum::VariantArray;

/// Animation settings, fixed for the lifetime of a simulation so active jobs
/// are never retuned mid-flight.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Duration of one turn animation, in seconds.
    pub twist_duration: f32,
    /// Easing applied to each turn's progress fraction.
    pub interpolation: InterpolateFn,
}

impl Default for AnimationPreferences {
    fn default() -> Self {
        AnimationPreferences {
            twist_duration: 0.5,
            interpolation: InterpolateFn::default(),
        }
    }
}

/// Function that maps a float from the range 0.0 to 1.0 to another float
/// from 0.0 to 1.0.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, VariantArray)]
#[serde(rename_all = "snake_case")]
pub enum InterpolateFn {
    /// Quarter sine wave: fast start, gentle landing.
    #[default]
    Sin,
    /// Quadratic ramp: slow start, fast landing.
    Exponential,
    /// Constant speed.
    Linear,
}

impl InterpolateFn {
    /// Returns the interpolation value in the range [0, 1] for `t` in the
    /// range [0, 1]. All variants map 1.0 to exactly 1.0, which is what lets
    /// completed turns land on exact 90° multiples.
    pub fn interpolate(self, t: f32) -> f32 {
        match self {
            Self::Sin => (PI / 2.0 * t).sin(),
            Self::Exponential => t * t,
            Self::Linear => t,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;

    #[test]
    fn test_interpolation_endpoints() {
        for &f in InterpolateFn::VARIANTS {
            assert_eq!(0.0, f.interpolate(0.0), "{f:?} must start at 0");
            assert_eq!(1.0, f.interpolate(1.0), "{f:?} must end at exactly 1");
        }
    }

    #[test]
    fn test_interpolation_is_monotonic() {
        for &f in InterpolateFn::VARIANTS {
            let mut last = 0.0;
            for i in 1..=100 {
                let value = f.interpolate(i as f32 / 100.0);
                assert!(value >= last, "{f:?} is not monotonic at step {i}");
                last = value;
            }
        }
    }
}
