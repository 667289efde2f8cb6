use cube_core::{Cube, Move, MoveEngine, ScrambleParams};
use cube_prefs::{AnimationPreferences, Preferences};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use web_time::{Duration, Instant};

use crate::animations::{Commit, TwistAnimation, TwistAnimationState};
use crate::Scene;

const ASSUMED_FPS: f32 = 120.0;

/// Error returned when an action is rejected because a twist is animating.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("cannot {action} while a move is animating")]
pub struct InputLocked {
    /// Action that was rejected.
    pub action: &'static str,
}

/// Cube simulation, which manages the logical cube state, move history, and
/// twist animations.
///
/// Moves are committed to the cube when their animation finishes. While any
/// twist is animating or queued, every action that changes the cube is
/// rejected.
#[derive(Debug)]
pub struct CubeSimulation {
    /// Latest committed state and history.
    engine: MoveEngine,
    /// Random number generator for scrambles.
    rng: ChaCha8Rng,

    /// Time of last frame, or `None` if we are not in the middle of an
    /// animation.
    last_frame_time: Option<Instant>,
    /// Twist animation state.
    twist_anim: TwistAnimationState,
}
impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new(None)
    }
}
impl CubeSimulation {
    /// Constructs a new simulation with a solved cube. If `seed` is given,
    /// scrambles are deterministic.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self {
            engine: MoveEngine::new(),
            rng,

            last_frame_time: None,
            twist_anim: TwistAnimationState::default(),
        }
    }

    /// Returns the latest committed cube state, not including the twist in
    /// progress.
    pub fn cube(&self) -> &Cube {
        self.engine.cube()
    }
    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        self.engine.history()
    }
    /// Returns whether the committed cube state is solved.
    pub fn is_solved(&self) -> bool {
        self.engine.is_solved()
    }
    /// Returns whether a twist is animating or queued. While this is true,
    /// all inputs that change the cube are rejected.
    pub fn is_animating(&self) -> bool {
        !self.twist_anim.is_idle()
    }
    /// Returns the number of twists animating or queued.
    pub fn queued_twists(&self) -> usize {
        self.twist_anim.len()
    }
    /// Returns the twist in progress and its eased progress.
    pub fn current_twist(&self, prefs: &AnimationPreferences) -> Option<(Move, f32)> {
        self.twist_anim.current(prefs)
    }

    fn check_unlocked(&self, action: &'static str) -> Result<(), InputLocked> {
        match self.is_animating() {
            true => {
                log::debug!("Rejected {action}: a move is animating");
                Err(InputLocked { action })
            }
            false => Ok(()),
        }
    }

    /// Starts animating a move. The move is applied when the animation
    /// finishes.
    pub fn do_move(&mut self, mv: Move) -> Result<(), InputLocked> {
        self.check_unlocked("turn a face")?;
        log::info!("Move {mv} ({})", mv.label());
        self.twist_anim.push(TwistAnimation {
            mv,
            commit: Commit::Record,
        });
        Ok(())
    }

    /// Applies random moves immediately, without animation. Returns the moves
    /// applied.
    pub fn scramble(&mut self, params: &ScrambleParams) -> Result<Vec<Move>, InputLocked> {
        self.check_unlocked("scramble")?;
        let moves = self.engine.scramble(params, &mut self.rng);
        log::info!(
            "Scrambled with {} moves: {}",
            moves.len(),
            moves.iter().map(|mv| mv.to_string()).collect::<Vec<_>>().join(" "),
        );
        Ok(moves)
    }

    /// Queues the inverse of the history for playback, one move per
    /// animation. Returns the number of moves queued, which is zero if the
    /// history is empty.
    pub fn solve(&mut self) -> Result<usize, InputLocked> {
        self.check_unlocked("solve")?;
        let solution = self.engine.solution();
        if solution.is_empty() {
            log::info!("Nothing to solve");
            return Ok(0);
        }
        log::info!("Solving with {} moves", solution.len());
        for mv in &solution {
            self.twist_anim.push(TwistAnimation {
                mv: *mv,
                commit: Commit::PopHistory,
            });
        }
        Ok(solution.len())
    }

    /// Animates the inverse of the last move. Returns whether there was a move
    /// to undo.
    pub fn undo(&mut self) -> Result<bool, InputLocked> {
        self.check_unlocked("undo")?;
        let Some(&last) = self.engine.history().last() else {
            return Ok(false);
        };
        log::info!("Undo {last}");
        self.twist_anim.push(TwistAnimation {
            mv: last.inverse(),
            commit: Commit::PopHistory,
        });
        Ok(true)
    }

    /// Restores the solved state and clears the history.
    pub fn reset(&mut self) -> Result<(), InputLocked> {
        self.check_unlocked("reset")?;
        log::info!("Resetting cube to solved state");
        self.engine.reset();
        Ok(())
    }

    /// Steps the simulation forward using the time since the last frame.
    /// Returns whether the cube should be redrawn next frame.
    pub fn step(&mut self, prefs: &AnimationPreferences) -> bool {
        let now = Instant::now();
        let delta = match self.last_frame_time {
            Some(then) => now - then,
            None => Duration::from_secs_f32(1.0 / ASSUMED_FPS),
        };

        let needs_redraw = self.step_by(delta, prefs);

        if needs_redraw {
            self.last_frame_time = Some(now);
        } else {
            self.last_frame_time = None;
        }

        needs_redraw
    }

    /// Steps the simulation forward by `delta`. Returns whether the cube
    /// should be redrawn next frame.
    pub fn step_by(&mut self, delta: Duration, prefs: &AnimationPreferences) -> bool {
        if self.twist_anim.is_idle() {
            return false;
        }
        if let Some(finished) = self.twist_anim.proceed(delta, prefs) {
            self.commit(finished);
        }
        true
    }

    fn commit(&mut self, anim: TwistAnimation) {
        match anim.commit {
            Commit::Record => self.engine.apply(anim.mv),
            Commit::PopHistory => {
                let expected = self.engine.pop_for_undo();
                debug_assert_eq!(expected, Some(anim.mv), "playback out of sync with history");
                self.engine.apply_untracked(anim.mv);
            }
        }
        log::debug!("Committed {}", anim.mv);
        if self.twist_anim.is_idle() && self.is_solved() {
            log::info!("Cube is solved");
        }
    }

    /// Builds the scene for the current frame.
    pub fn scene(&self, prefs: &Preferences) -> Scene {
        Scene::new(
            self.cube(),
            self.current_twist(&prefs.animation),
            &prefs.view,
            &prefs.colors,
        )
    }
}

#[cfg(test)]
mod tests {
    use cube_core::{Direction, Face};
    use pretty_assertions::assert_eq;

    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn prefs() -> AnimationPreferences {
        AnimationPreferences::default()
    }

    fn run_until_idle(sim: &mut CubeSimulation) -> usize {
        let prefs = prefs();
        let mut frames = 0;
        while sim.step_by(FRAME, &prefs) {
            frames += 1;
            assert!(frames < 100_000, "animation never finished");
        }
        frames
    }

    fn top_cw() -> Move {
        Move::new(Face::U, Direction::Cw)
    }

    #[test]
    fn test_move_commits_when_animation_finishes() {
        let mut sim = CubeSimulation::new(Some(1));
        sim.do_move(top_cw()).unwrap();
        assert!(sim.is_animating());
        assert!(sim.is_solved(), "state must not change until the twist finishes");

        sim.step_by(FRAME, &prefs());
        assert!(sim.is_solved());
        let (mv, t) = sim.current_twist(&prefs()).unwrap();
        assert_eq!(mv, top_cw());
        assert!(t > 0.0 && t < 1.0);

        run_until_idle(&mut sim);
        assert!(!sim.is_animating());
        assert!(!sim.is_solved());
        assert_eq!(sim.history(), &[top_cw()]);
    }

    #[test]
    fn test_input_locked_while_animating() {
        let mut sim = CubeSimulation::new(Some(1));
        sim.do_move(top_cw()).unwrap();
        sim.step_by(FRAME, &prefs());

        let second = Move::new(Face::R, Direction::Cw);
        assert_eq!(sim.do_move(second), Err(InputLocked { action: "turn a face" }));
        assert!(sim.scramble(&ScrambleParams::default()).is_err());
        assert!(sim.solve().is_err());
        assert!(sim.undo().is_err());
        assert!(sim.reset().is_err());
        assert_eq!(sim.queued_twists(), 1);

        run_until_idle(&mut sim);
        assert_eq!(sim.history(), &[top_cw()]);
        assert!(sim.do_move(second).is_ok());
    }

    #[test]
    fn test_scramble_then_solve() {
        let mut sim = CubeSimulation::new(Some(99));
        let moves = sim.scramble(&ScrambleParams::default()).unwrap();
        assert_eq!(moves.len(), 20);
        assert!(!sim.is_animating(), "scrambles are applied immediately");

        assert_eq!(sim.solve(), Ok(20));
        assert!(sim.is_animating());
        run_until_idle(&mut sim);
        assert!(sim.is_solved());
        assert!(sim.history().is_empty());
    }

    #[test]
    fn test_solve_animates_every_move() {
        let mut sim = CubeSimulation::new(Some(99));
        sim.scramble(&ScrambleParams::default()).unwrap();
        assert_eq!(sim.solve(), Ok(20));

        let prefs = prefs();
        assert!(prefs.dynamic_twist_speed);
        let frame = Duration::from_secs_f32(1.0 / 60.0);
        let mut partial_frames = 0;
        while sim.step_by(frame, &prefs) {
            if let Some((_, t)) = sim.current_twist(&prefs) {
                if t > 0.0 && t < 1.0 {
                    partial_frames += 1;
                }
            }
            assert!(partial_frames < 100_000, "animation never finished");
        }
        assert!(sim.is_solved());
        assert!(partial_frames >= 20, "only {partial_frames} partial frames");
    }

    #[test]
    fn test_solve_empty_history_is_noop() {
        let mut sim = CubeSimulation::new(None);
        assert_eq!(sim.solve(), Ok(0));
        assert!(!sim.is_animating());
        assert!(sim.is_solved());
    }

    #[test]
    fn test_undo() {
        let mut sim = CubeSimulation::new(None);
        assert_eq!(sim.undo(), Ok(false));
        sim.do_move(top_cw()).unwrap();
        run_until_idle(&mut sim);
        assert_eq!(sim.undo(), Ok(true));
        run_until_idle(&mut sim);
        assert!(sim.is_solved());
        assert!(sim.history().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut sim = CubeSimulation::new(Some(5));
        sim.scramble(&ScrambleParams::default()).unwrap();
        sim.reset().unwrap();
        assert!(sim.is_solved());
        assert!(sim.history().is_empty());
    }

    #[test]
    fn test_seeded_simulations_agree() {
        let params = ScrambleParams::default();
        let a = CubeSimulation::new(Some(3)).scramble(&params).unwrap();
        let b = CubeSimulation::new(Some(3)).scramble(&params).unwrap();
        assert_eq!(a, b);
    }
}
