use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::{Axis, Orientation, Sign};

/// Face of the cube, which is also the layer turned by a [`Move`].
#[derive(
    EnumIter, Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Face {
    /// Right face (`+X`).
    #[default]
    R = 0,
    /// Left face (`-X`).
    L = 1,
    /// Top face (`+Y`).
    U = 2,
    /// Bottom face (`-Y`).
    D = 3,
    /// Front face (`+Z`).
    F = 4,
    /// Back face (`-Z`).
    B = 5,
}
impl Face {
    /// Returns the axis perpendicular to the face.
    pub fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }
    /// Returns which end of the axis the face is on.
    pub fn sign(self) -> Sign {
        use Face::*;

        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }
    /// Returns the face on the opposite side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        use Face::*;

        match self {
            R => L,
            L => R,
            U => D,
            D => U,
            F => B,
            B => F,
        }
    }

    /// Returns the outward unit normal of the face.
    pub fn normal(self) -> [i8; 3] {
        self.axis().unit().map(|x| x * self.sign().int())
    }
    /// Returns the face whose outward normal is `v`, or `None` if `v` is not
    /// an axis-aligned unit vector.
    pub fn from_normal(v: [i8; 3]) -> Option<Self> {
        Face::iter().find(|f| f.normal() == v)
    }
    /// Returns the face with the given axis and sign.
    pub fn from_axis_sign(axis: Axis, sign: Sign) -> Self {
        use Face::*;

        match (axis, sign) {
            (Axis::X, Sign::Pos) => R,
            (Axis::X, Sign::Neg) => L,
            (Axis::Y, Sign::Pos) => U,
            (Axis::Y, Sign::Neg) => D,
            (Axis::Z, Sign::Pos) => F,
            (Axis::Z, Sign::Neg) => B,
        }
    }

    /// Returns the single-letter symbol for the face in standard notation.
    pub fn symbol(self) -> &'static str {
        use Face::*;

        match self {
            R => "R",
            L => "L",
            U => "U",
            D => "D",
            F => "F",
            B => "B",
        }
    }
    /// Returns the human-friendly name of the face.
    pub fn name(self) -> &'static str {
        use Face::*;

        match self {
            R => "Right",
            L => "Left",
            U => "Top",
            D => "Bottom",
            F => "Front",
            B => "Back",
        }
    }

    /// Returns the directions that are "right" and "up" when looking at the
    /// face from outside the cube, as used by the unfolded net.
    ///
    /// Side faces use the top face as "up"; the top face uses the back face
    /// and the bottom face uses the front face.
    pub fn net_basis(self) -> [Face; 2] {
        use Face::*;

        match self {
            F => [R, U],
            B => [L, U],
            R => [B, U],
            L => [F, U],
            U => [R, B],
            D => [R, F],
        }
    }
}

/// Direction of a quarter turn, as seen looking at the face from outside the
/// cube.
#[derive(
    EnumIter, Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Direction {
    /// Clockwise.
    #[default]
    Cw,
    /// Counterclockwise.
    Ccw,
}
impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Direction::Cw => Direction::Ccw,
            Direction::Ccw => Direction::Cw,
        }
    }
    /// Returns the suffix for the direction in standard notation.
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::Cw => "",
            Direction::Ccw => "'",
        }
    }
    /// Returns the short human-friendly name of the direction.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Cw => "CW",
            Direction::Ccw => "CCW",
        }
    }
}

/// Quarter turn of one face layer.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face whose layer is turned.
    pub face: Face,
    /// Direction of the turn.
    pub direction: Direction,
}
impl Move {
    /// Constructs a move.
    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// Returns an iterator over all 12 quarter turns.
    pub fn iter() -> impl Iterator<Item = Move> {
        Face::iter().flat_map(|face| Direction::iter().map(move |dir| Move::new(face, dir)))
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.rev(),
        }
    }

    /// Returns the rotation applied by this move to the cubies in its layer.
    pub fn rotation(self) -> Orientation {
        let [a, b] = self.face.axis().perpendiculars();
        // Clockwise on the negative face is counterclockwise about the axis.
        let clockwise_about_axis = match self.face.sign() {
            Sign::Pos => self.direction == Direction::Cw,
            Sign::Neg => self.direction == Direction::Ccw,
        };
        match clockwise_about_axis {
            true => Orientation::quarter_turn(a, b),
            false => Orientation::quarter_turn(b, a),
        }
    }

    /// Returns the signed angle of the move in degrees about the positive end
    /// of its axis, using the right-hand rule.
    pub fn angle_degrees(self) -> f32 {
        let about_face_normal = match self.direction {
            Direction::Cw => -90.0,
            Direction::Ccw => 90.0,
        };
        about_face_normal * self.face.sign().float()
    }

    /// Returns a label such as `Top CW`.
    pub fn label(self) -> String {
        format!("{} {}", self.face.name(), self.direction.name())
    }
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.symbol(), self.direction.symbol())
    }
}
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (face_str, direction) = match s.strip_suffix('\'') {
            Some(rest) => (rest, Direction::Ccw),
            None => (s, Direction::Cw),
        };
        let face = Face::iter()
            .find(|f| f.symbol() == face_str)
            .ok_or_else(|| ParseMoveError::BadMove(s.to_string()))?;
        Ok(Move::new(face, direction))
    }
}

/// Error returned when parsing a move fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// The string is not one of the 12 quarter turns.
    #[error("invalid move {0:?}; expected one of R L U D F B, optionally followed by '")]
    BadMove(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_notation_roundtrip() {
        for mv in Move::iter() {
            assert_eq!(mv.to_string().parse::<Move>(), Ok(mv));
        }
        assert_eq!(Move::iter().count(), 12);
    }

    #[test]
    fn test_move_parse_errors() {
        assert!("X".parse::<Move>().is_err());
        assert!("U2".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
        assert_eq!(" F' ".parse::<Move>(), Ok(Move::new(Face::F, Direction::Ccw)));
    }

    #[test]
    fn test_face_normals() {
        for face in Face::iter() {
            assert_eq!(Face::from_normal(face.normal()), Some(face));
            assert_eq!(face.opposite().normal(), face.normal().map(|x| -x));
            assert_eq!(Face::from_axis_sign(face.axis(), face.sign()), face);
        }
    }

    #[test]
    fn test_rotation_matches_angle() {
        // A clockwise top turn brings the right face to the front.
        let u = Move::new(Face::U, Direction::Cw);
        assert_eq!(u.rotation().transform(Face::R.normal()), Face::F.normal());
        assert_eq!(u.angle_degrees(), -90.0);

        // A clockwise bottom turn brings the front face to the right.
        let d = Move::new(Face::D, Direction::Cw);
        assert_eq!(d.rotation().transform(Face::F.normal()), Face::R.normal());
        assert_eq!(d.angle_degrees(), 90.0);

        // A clockwise right turn brings the front face to the top.
        let r = Move::new(Face::R, Direction::Cw);
        assert_eq!(r.rotation().transform(Face::F.normal()), Face::U.normal());
    }
}
