use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{Cube, Move};

/// Number of distinct quarter turns.
const MOVE_COUNT: usize = 12;

/// Parameters for generating a random move sequence.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScrambleParams {
    /// Number of moves to draw.
    pub num_moves: usize,
    /// Whether to avoid turning the same face twice in a row.
    pub avoid_same_face: bool,
}
impl Default for ScrambleParams {
    fn default() -> Self {
        Self {
            num_moves: 20,
            avoid_same_face: true,
        }
    }
}

/// Applies moves to a cube and keeps the history needed to solve it.
///
/// Every change to the cube goes through this type, so reversing the history
/// always restores the solved state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveEngine {
    cube: Cube,
    history: Vec<Move>,
}
impl MoveEngine {
    /// Constructs a move engine with a solved cube and empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current cube state.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    /// Returns every move applied since the cube was last solved or reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
    /// Returns whether the cube is solved.
    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    /// Applies a move and records it.
    pub fn apply(&mut self, mv: Move) {
        self.cube.apply(mv);
        self.history.push(mv);
    }

    /// Applies `params.num_moves` random moves and records them. Returns the
    /// moves that were applied.
    pub fn scramble<R: Rng + ?Sized>(&mut self, params: &ScrambleParams, rng: &mut R) -> Vec<Move> {
        let mut prev_face = self.history.last().map(|mv| mv.face);
        let mut moves = Vec::with_capacity(params.num_moves);
        for _ in 0..params.num_moves {
            let excluded = prev_face.filter(|_| params.avoid_same_face);
            let candidate_count = match excluded {
                Some(_) => MOVE_COUNT - 2,
                None => MOVE_COUNT,
            };
            let i = rng.random_range(0..candidate_count);
            let Some(mv) = Move::iter()
                .filter(|mv| Some(mv.face) != excluded)
                .nth(i)
            else {
                unreachable!("candidate index out of range");
            };
            self.apply(mv);
            prev_face = Some(mv.face);
            moves.push(mv);
        }
        log::debug!("scrambled with {} moves", moves.len());
        moves
    }

    /// Same as [`Self::scramble()`], but deterministic for a given `seed`.
    pub fn scramble_seeded(&mut self, params: &ScrambleParams, seed: u64) -> Vec<Move> {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        self.scramble(params, &mut rng)
    }

    /// Returns the moves that undo the history: the inverse of each move, in
    /// reverse order.
    pub fn solution(&self) -> Vec<Move> {
        self.history.iter().rev().map(|mv| mv.inverse()).collect()
    }

    /// Applies [`Self::solution()`] and clears the history. Returns the moves
    /// applied, which is empty if there was no history.
    pub fn solve(&mut self) -> Vec<Move> {
        let solution = self.solution();
        self.cube.apply_all(solution.iter().copied());
        self.history.clear();
        solution
    }

    /// Removes the last move from the history and returns its inverse,
    /// without applying it.
    ///
    /// The caller is expected to apply the returned move with
    /// [`Self::apply_untracked()`].
    pub fn pop_for_undo(&mut self) -> Option<Move> {
        self.history.pop().map(Move::inverse)
    }

    /// Applies a move without recording it. Used to play back moves that the
    /// history has already accounted for.
    pub fn apply_untracked(&mut self, mv: Move) {
        self.cube.apply(mv);
    }

    /// Restores the solved state and clears the history.
    pub fn reset(&mut self) {
        self.cube.reset();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_scramble_then_solve() {
        let mut engine = MoveEngine::new();
        let moves = engine.scramble(&ScrambleParams::default(), &mut rand::rng());
        assert_eq!(moves.len(), 20);
        assert_eq!(engine.history(), moves.as_slice());

        let solution = engine.solve();
        assert_eq!(solution.len(), 20);
        assert!(engine.is_solved());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_solve_empty_history_is_noop() {
        let mut engine = MoveEngine::new();
        assert_eq!(engine.solve(), vec![]);
        assert!(engine.is_solved());
    }

    #[test]
    fn test_solution_is_reverse_inverse() {
        let mut engine = MoveEngine::new();
        for s in ["R", "U", "F'"] {
            engine.apply(s.parse().unwrap());
        }
        let solution = engine.solution().iter().map(|mv| mv.to_string()).collect_vec();
        assert_eq!(solution, vec!["F", "U'", "R'"]);
    }

    #[test]
    fn test_scramble_avoids_same_face() {
        let mut engine = MoveEngine::new();
        let params = ScrambleParams {
            num_moves: 500,
            avoid_same_face: true,
        };
        let moves = engine.scramble_seeded(&params, 7);
        for (a, b) in moves.iter().tuple_windows() {
            assert_ne!(a.face, b.face);
        }
    }

    #[test]
    fn test_scramble_covers_every_move() {
        for avoid_same_face in [false, true] {
            let mut engine = MoveEngine::new();
            let params = ScrambleParams {
                num_moves: 1000,
                avoid_same_face,
            };
            let moves = engine.scramble_seeded(&params, 3);
            for mv in Move::iter() {
                assert!(moves.contains(&mv), "{mv} never drawn");
            }
        }
    }

    #[test]
    fn test_seeded_scramble_is_reproducible() {
        let params = ScrambleParams::default();
        let a = MoveEngine::new().scramble_seeded(&params, 42);
        let b = MoveEngine::new().scramble_seeded(&params, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_undo() {
        let mut engine = MoveEngine::new();
        engine.apply("R".parse().unwrap());
        engine.apply("U".parse().unwrap());
        let undo = engine.pop_for_undo().unwrap();
        assert_eq!(undo.to_string(), "U'");
        engine.apply_untracked(undo);
        assert_eq!(engine.history().len(), 1);
        engine.solve();
        assert!(engine.is_solved());
    }
}
