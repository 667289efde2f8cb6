//! Animations.

mod twist;

pub use twist::{Commit, TwistAnimation, TwistAnimationState};
