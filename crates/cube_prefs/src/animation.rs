use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

/// Shortest allowed twist duration, in seconds.
pub const MIN_TWIST_DURATION: f32 = 0.1;
/// Longest allowed twist duration, in seconds.
pub const MAX_TWIST_DURATION: f32 = 2.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Whether to speed up twists when many are queued.
    pub dynamic_twist_speed: bool,
    /// Seconds per quarter turn.
    pub twist_duration: f32,
    pub twist_interpolation: InterpolateFn,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            dynamic_twist_speed: true,
            twist_duration: 0.5,
            twist_interpolation: InterpolateFn::Cosine,
        }
    }
}
impl AnimationPreferences {
    /// Sets the twist duration, clamped to the allowed range.
    pub fn set_twist_duration(&mut self, seconds: f32) {
        self.twist_duration = clamp_twist_duration(seconds);
    }
}

/// Clamps a twist duration to the allowed range. `NaN` becomes the minimum.
pub fn clamp_twist_duration(seconds: f32) -> f32 {
    if seconds.is_nan() {
        return MIN_TWIST_DURATION;
    }
    seconds.clamp(MIN_TWIST_DURATION, MAX_TWIST_DURATION)
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    #[derive(
        Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, VariantArray, Display,
    )]
    #[serde(rename_all = "snake_case")]
    pub enum InterpolateFn {
        Lerp,
        #[default]
        Cosine,
        Cubic,
    }

    impl InterpolateFn {
        /// Returns the interpolation value in the range [0, 1] for `t` in the
        /// range [0, 1].
        pub fn interpolate(self, t: f32) -> f32 {
            match self {
                Self::Lerp => t,
                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,
                Self::Cubic => (3.0 - 2.0 * t) * t * t,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;

    #[test]
    fn test_interpolation_endpoints_and_monotonicity() {
        for &f in InterpolateFn::VARIANTS {
            assert!(f.interpolate(0.0).abs() < 1e-6, "{f}");
            assert!((f.interpolate(1.0) - 1.0).abs() < 1e-6, "{f}");
            let samples: Vec<f32> = (0..=100).map(|i| f.interpolate(i as f32 / 100.0)).collect();
            assert!(samples.windows(2).all(|w| w[0] <= w[1] + 1e-6), "{f}");
        }
    }

    #[test]
    fn test_clamp_twist_duration() {
        assert_eq!(clamp_twist_duration(0.0), MIN_TWIST_DURATION);
        assert_eq!(clamp_twist_duration(5.0), MAX_TWIST_DURATION);
        assert_eq!(clamp_twist_duration(0.5), 0.5);
        assert_eq!(clamp_twist_duration(f32::NAN), MIN_TWIST_DURATION);
    }
}
