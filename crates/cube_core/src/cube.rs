use std::collections::HashSet;

use itertools::iproduct;
use smallvec::SmallVec;
use strum::IntoEnumIterator;

use crate::{Face, Move, Orientation};

/// Number of visible cubies in a 3x3x3 cube.
pub const CUBIE_COUNT: usize = 26;

/// Grid cell of a cubie; each coordinate is `-1`, `0`, or `1`.
pub type GridPos = [i8; 3];

/// One of the 26 small cubes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cubie {
    home: GridPos,
    pos: GridPos,
    orientation: Orientation,
}
impl Cubie {
    fn new(home: GridPos) -> Self {
        Self {
            home,
            pos: home,
            orientation: Orientation::IDENTITY,
        }
    }

    /// Returns the grid cell the cubie occupies in the solved state. This
    /// never changes and identifies the cubie.
    pub fn home(&self) -> GridPos {
        self.home
    }
    /// Returns the grid cell the cubie currently occupies.
    pub fn pos(&self) -> GridPos {
        self.pos
    }
    /// Returns the rotation of the cubie relative to its solved orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the faces of the solved cube that this cubie carries stickers
    /// for (3 for corners, 2 for edges, 1 for centers).
    pub fn home_faces(&self) -> SmallVec<[Face; 3]> {
        Face::iter()
            .filter(|f| self.home[f.axis().index()] == f.sign().int())
            .collect()
    }

    /// Returns the stickers on the cubie as `(color, facing)` pairs, where
    /// `color` is the face the sticker belongs to when solved and `facing` is
    /// the direction it currently points.
    pub fn stickers(&self) -> SmallVec<[(Face, Face); 3]> {
        self.home_faces()
            .into_iter()
            .filter_map(|color| Some((color, self.sticker_facing(color)?)))
            .collect()
    }

    /// Returns the direction that the sticker of color `color` currently
    /// points, or `None` if the cubie has no such sticker.
    pub fn sticker_facing(&self, color: Face) -> Option<Face> {
        if self.home[color.axis().index()] != color.sign().int() {
            return None;
        }
        Face::from_normal(self.orientation.transform(color.normal()))
    }

    /// Returns the color of the sticker facing `direction`, or `None` if no
    /// sticker faces that way.
    pub fn color_facing(&self, direction: Face) -> Option<Face> {
        let home_normal = self.orientation.inverse().transform(direction.normal());
        let color = Face::from_normal(home_normal)?;
        (self.home[color.axis().index()] == color.sign().int()).then_some(color)
    }

    fn rotate(&mut self, rotation: Orientation) {
        self.pos = rotation.transform(self.pos);
        self.orientation = rotation * self.orientation;
    }
}

/// State of a 3x3x3 Rubik's Cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    cubies: Box<[Cubie]>,
}
impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
impl Cube {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        let cubies = iproduct!(-1..=1, -1..=1, -1..=1)
            .map(|(x, y, z)| [x, y, z])
            .filter(|&pos| pos != [0, 0, 0])
            .map(Cubie::new)
            .collect();
        Self { cubies }
    }

    /// Restores the solved state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns all cubies, in a fixed order by identity.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// Returns the cubie currently occupying `pos`, or `None` if `pos` is not
    /// one of the 26 outer cells.
    pub fn cubie_at(&self, pos: GridPos) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.pos == pos)
    }

    /// Returns whether a cubie at `pos` is in the layer turned by `face`.
    pub fn is_in_layer(face: Face, pos: GridPos) -> bool {
        pos[face.axis().index()] == face.sign().int()
    }

    /// Returns the cubies currently in the layer of `face`.
    pub fn layer(&self, face: Face) -> impl Iterator<Item = &Cubie> {
        self.cubies
            .iter()
            .filter(move |c| Self::is_in_layer(face, c.pos))
    }

    /// Applies a quarter turn.
    pub fn apply(&mut self, mv: Move) {
        let rotation = mv.rotation();
        for cubie in &mut self.cubies[..] {
            if Self::is_in_layer(mv.face, cubie.pos) {
                cubie.rotate(rotation);
            }
        }
        debug_assert!(self.is_valid(), "invalid cube state after {mv}");
    }

    /// Applies a sequence of quarter turns in order.
    pub fn apply_all(&mut self, moves: impl IntoIterator<Item = Move>) {
        for mv in moves {
            self.apply(mv);
        }
    }

    /// Returns whether every cubie is at home with its solved orientation.
    pub fn is_solved(&self) -> bool {
        self.cubies
            .iter()
            .all(|c| c.orientation == Orientation::IDENTITY)
    }

    /// Returns the colors on a face as a 3x3 grid in reading order, as seen
    /// looking at the face from outside the cube with "up" given by
    /// [`Face::net_basis()`].
    pub fn face_grid(&self, face: Face) -> [[Face; 3]; 3] {
        let [right, up] = face.net_basis().map(|f| f.normal());
        let n = face.normal();
        std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                let (c, r) = (col as i8 - 1, 1 - row as i8);
                let pos = std::array::from_fn(|i| n[i] + right[i] * c + up[i] * r);
                self.cubie_at(pos)
                    .and_then(|cubie| cubie.color_facing(face))
                    .unwrap_or(face) // unreachable for a valid cube
            })
        })
    }

    /// Checks the structural invariants: every cubie sits in a distinct outer
    /// cell reached by rotating its home cell by its orientation.
    pub fn is_valid(&self) -> bool {
        let mut seen = HashSet::new();
        self.cubies.len() == CUBIE_COUNT
            && self.cubies.iter().all(|c| {
                c.orientation.is_valid()
                    && c.orientation.transform(c.home) == c.pos
                    && c.pos != [0, 0, 0]
                    && c.pos.iter().all(|x| (-1..=1).contains(x))
                    && seen.insert(c.pos)
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Direction;

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_cube() {
        let cube = Cube::new();
        assert_eq!(cube.cubies().len(), CUBIE_COUNT);
        assert!(cube.is_valid());
        assert!(cube.is_solved());

        let sticker_count: usize = cube.cubies().iter().map(|c| c.stickers().len()).sum();
        assert_eq!(sticker_count, 54);
    }

    #[test]
    fn test_layer_has_nine_cubies() {
        let cube = Cube::new();
        for face in Face::iter() {
            assert_eq!(cube.layer(face).count(), 9);
        }
    }

    #[test]
    fn test_top_cw_then_ccw() {
        let mut cube = Cube::new();
        cube.apply(mv("U"));
        assert!(!cube.is_solved());
        cube.apply(mv("U'"));
        assert!(cube.is_solved());
    }

    #[test]
    fn test_solved_face_grids_are_uniform() {
        let cube = Cube::new();
        for face in Face::iter() {
            assert_eq!(cube.face_grid(face), [[face; 3]; 3]);
        }
    }

    #[test]
    fn test_top_turn_face_grid() {
        use Face::*;

        let mut cube = Cube::new();
        cube.apply(mv("U"));
        // The right face's top row moves to the front.
        assert_eq!(cube.face_grid(F), [[R, R, R], [F, F, F], [F, F, F]]);
        assert_eq!(cube.face_grid(R), [[B, B, B], [R, R, R], [R, R, R]]);
        assert_eq!(cube.face_grid(U), [[U; 3]; 3]);
        assert_eq!(cube.face_grid(D), [[D; 3]; 3]);
    }

    #[test]
    fn test_right_turn_face_grid() {
        use Face::*;

        let mut cube = Cube::new();
        cube.apply(mv("R"));
        // The front face's right column moves to the top.
        assert_eq!(cube.face_grid(U), [[U, U, F], [U, U, F], [U, U, F]]);
        assert_eq!(cube.face_grid(F), [[F, F, D], [F, F, D], [F, F, D]]);
    }

    #[test]
    fn test_single_move_is_not_solved() {
        for m in Move::iter() {
            let mut cube = Cube::new();
            cube.apply(m);
            assert!(!cube.is_solved(), "{m} should not be solved");
            assert!(cube.is_valid());
        }
    }

    #[test]
    fn test_stickers_follow_cubie() {
        let mut cube = Cube::new();
        cube.apply(Move::new(Face::F, Direction::Cw));
        // The corner that started at up-front-right is now at down-front-right.
        let cubie = cube
            .cubies()
            .iter()
            .find(|c| c.home() == [1, 1, 1])
            .unwrap();
        assert_eq!(cubie.pos(), [1, -1, 1]);
        assert_eq!(cubie.sticker_facing(Face::F), Some(Face::F));
        assert_eq!(cubie.sticker_facing(Face::U), Some(Face::R));
        assert_eq!(cubie.sticker_facing(Face::R), Some(Face::D));
        assert_eq!(cubie.sticker_facing(Face::L), None);
    }
}
