use std::collections::VecDeque;

use cube_core::Move;
use cube_prefs::AnimationPreferences;
use web_time::Duration;

/// If at least this much of a twist is animated in one frame, just skip the
/// animation to reduce unnecessary flashing.
const MIN_TWIST_DELTA: f32 = 1.0 / 3.0;

/// Higher number means faster exponential increase in twist speed.
const EXP_TWIST_FACTOR: f32 = 0.5;

/// Shortest duration of one twist when sped up by a long queue, in seconds.
/// This is at least four frames at 60 FPS.
const MIN_DYNAMIC_TWIST_DURATION: f32 = 0.06;

/// How a finished twist is committed to the move engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Commit {
    /// Apply the move and append it to the history.
    Record,
    /// Apply the move and remove the last history entry, which it undoes.
    PopHistory,
}

/// Twist waiting to be displayed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TwistAnimation {
    /// Move being animated.
    pub mv: Move,
    /// How to commit the move once the animation finishes.
    pub commit: Commit,
}

/// Queue of twist animations. Idle when the queue is empty.
#[derive(Debug, Default, Clone)]
pub struct TwistAnimationState {
    /// Queue of twist animations to be displayed.
    queue: VecDeque<TwistAnimation>,
    /// Maximum number of animations in the queue (reset when queue is empty).
    queue_max: usize,
    /// Progress of the animation in the current twist, from 0.0 to 1.0.
    progress: f32,
}
impl TwistAnimationState {
    /// Steps the animation forward. Returns the twist that finished this
    /// frame, if any.
    pub fn proceed(
        &mut self,
        delta: Duration,
        prefs: &AnimationPreferences,
    ) -> Option<TwistAnimation> {
        if self.queue.is_empty() {
            self.queue_max = 0;
            return None;
        }

        // `twist_duration` is in seconds (per one twist); `base_speed` is
        // fraction of twist per frame.
        let base_speed = delta.as_secs_f32() / prefs.twist_duration;

        // Twist exponentially faster if there are/were more twists in the
        // queue.
        // The speedup is capped so that queued twists stay visible.
        let speed_mod = match prefs.dynamic_twist_speed {
            true => ((self.queue_max - 1) as f32 * EXP_TWIST_FACTOR)
                .exp()
                .min(prefs.twist_duration / MIN_DYNAMIC_TWIST_DURATION)
                .max(1.0),
            false => 1.0,
        };
        let mut twist_delta = base_speed * speed_mod;
        // Cap the twist delta at 1.0, and also handle the case where
        // something went wrong with the calculation (e.g., division by
        // zero).
        if !(0.0..MIN_TWIST_DELTA).contains(&twist_delta) {
            twist_delta = 1.0; // Instantly complete the twist.
        }

        self.progress += twist_delta;
        if self.progress < 1.0 {
            return None;
        }
        self.progress = 0.0;
        let finished = self.queue.pop_front();
        if self.queue.is_empty() {
            self.queue_max = 0;
        }
        finished
    }

    /// Adds a twist to the end of the queue.
    pub fn push(&mut self, anim: TwistAnimation) {
        self.queue.push_back(anim);

        // Update queue_max.
        self.queue_max = std::cmp::max(self.queue_max, self.queue.len());
    }

    /// Returns the twist currently being animated and its eased progress.
    pub fn current(&self, prefs: &AnimationPreferences) -> Option<(Move, f32)> {
        let anim = self.queue.front()?;
        Some((anim.mv, prefs.twist_interpolation.interpolate(self.progress)))
    }

    /// Returns whether there are no twists in flight or queued.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
    /// Returns the number of twists in flight or queued.
    pub fn len(&self) -> usize {
        self.queue.len()
    }
    /// Returns whether the queue is empty. Same as [`Self::is_idle()`].
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use cube_core::{Direction, Face};

    use super::*;

    fn anim(face: Face) -> TwistAnimation {
        TwistAnimation {
            mv: Move::new(face, Direction::Cw),
            commit: Commit::Record,
        }
    }

    fn prefs() -> AnimationPreferences {
        AnimationPreferences {
            dynamic_twist_speed: false,
            twist_duration: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_proceed_does_nothing() {
        let mut state = TwistAnimationState::default();
        assert!(state.is_idle());
        assert_eq!(state.proceed(Duration::from_millis(16), &prefs()), None);
        assert_eq!(state.current(&prefs()), None);
    }

    #[test]
    fn test_twist_finishes_once() {
        let prefs = prefs();
        let mut state = TwistAnimationState::default();
        state.push(anim(Face::U));

        let frame = Duration::from_millis(50); // 10% of a twist
        let mut finished = vec![];
        let mut last_t = 0.0;
        for _ in 0..20 {
            if let Some((_, t)) = state.current(&prefs) {
                assert!(t >= last_t, "progress went backwards");
                last_t = t;
            }
            finished.extend(state.proceed(frame, &prefs));
        }
        assert_eq!(finished, vec![anim(Face::U)]);
        assert!(state.is_idle());
    }

    #[test]
    fn test_large_delta_completes_instantly() {
        let mut state = TwistAnimationState::default();
        state.push(anim(Face::R));
        let finished = state.proceed(Duration::from_secs(1), &prefs());
        assert_eq!(finished, Some(anim(Face::R)));
    }

    #[test]
    fn test_queue_plays_in_order() {
        let prefs = AnimationPreferences {
            dynamic_twist_speed: true,
            ..prefs()
        };
        let mut state = TwistAnimationState::default();
        for face in [Face::R, Face::U, Face::F] {
            state.push(anim(face));
        }
        assert_eq!(state.len(), 3);

        let mut finished = vec![];
        while !state.is_idle() {
            finished.extend(state.proceed(Duration::from_millis(10), &prefs));
        }
        assert_eq!(finished, vec![anim(Face::R), anim(Face::U), anim(Face::F)]);
    }

    #[test]
    fn test_long_queue_still_animates_each_twist() {
        let prefs = AnimationPreferences {
            dynamic_twist_speed: true,
            ..prefs()
        };
        let mut state = TwistAnimationState::default();
        for _ in 0..20 {
            state.push(anim(Face::U));
        }

        let frame = Duration::from_secs_f32(1.0 / 60.0);
        let mut partial_frames = 0;
        let mut finished = 0;
        let mut frames = 0;
        while !state.is_idle() {
            if state.proceed(frame, &prefs).is_some() {
                finished += 1;
            }
            if let Some((_, t)) = state.current(&prefs) {
                if t > 0.0 && t < 1.0 {
                    partial_frames += 1;
                }
            }
            frames += 1;
            assert!(frames < 10_000, "animation never finished");
        }
        assert_eq!(finished, 20);
        // Each twist spans several frames even at full speedup.
        assert!(partial_frames >= 20 * 3, "only {partial_frames} partial frames");
        assert!(frames < 20 * 30, "queue was not sped up: {frames} frames");
    }
}
