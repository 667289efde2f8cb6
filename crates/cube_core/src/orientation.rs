use std::ops::Mul;

use crate::Axis;

/// Rotation of a cubie relative to its solved orientation.
///
/// Stored as a signed permutation matrix (row-major) with determinant `+1`,
/// so it is always one of the 24 rotations of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Orientation([[i8; 3]; 3]);
impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
impl Orientation {
    /// Identity rotation.
    pub const IDENTITY: Self = Self([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);

    /// Returns the quarter turn that rotates `from` onto `to`.
    ///
    /// # Panics
    ///
    /// Panics if `from == to`.
    pub fn quarter_turn(from: Axis, to: Axis) -> Self {
        assert_ne!(from, to, "quarter turn needs two distinct axes");
        let (a, b) = (from.index(), to.index());
        let mut m = Self::IDENTITY.0;
        m[a][a] = 0;
        m[b][b] = 0;
        m[b][a] = 1;
        m[a][b] = -1;
        Self(m)
    }

    /// Returns the rows of the matrix.
    pub fn rows(self) -> [[i8; 3]; 3] {
        self.0
    }

    /// Applies the rotation to a vector.
    pub fn transform(self, v: [i8; 3]) -> [i8; 3] {
        std::array::from_fn(|i| (0..3).map(|j| self.0[i][j] * v[j]).sum())
    }

    /// Returns the inverse rotation.
    #[must_use]
    pub fn inverse(self) -> Self {
        // Rotation matrices are orthogonal.
        Self(std::array::from_fn(|i| std::array::from_fn(|j| self.0[j][i])))
    }

    /// Returns whether the matrix is a proper rotation of the cube: one
    /// nonzero `±1` entry per row and column, with determinant `+1`.
    pub fn is_valid(self) -> bool {
        let m = self.0;
        let entries_ok = m.iter().flatten().all(|&x| (-1..=1).contains(&x));
        let rows_ok = m.iter().all(|row| row.iter().filter(|&&x| x != 0).count() == 1);
        let cols_ok = (0..3).all(|j| (0..3).filter(|&i| m[i][j] != 0).count() == 1);
        entries_ok && rows_ok && cols_ok && self.determinant() == 1
    }

    fn determinant(self) -> i32 {
        let m = self.0.map(|row| row.map(i32::from));
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }
}
impl Mul for Orientation {
    type Output = Self;

    /// Composes two rotations. `a * b` applies `b` first.
    fn mul(self, rhs: Self) -> Self::Output {
        Self(std::array::from_fn(|i| {
            std::array::from_fn(|j| (0..3).map(|k| self.0[i][k] * rhs.0[k][j]).sum())
        }))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_quarter_turn() {
        let r = Orientation::quarter_turn(Axis::X, Axis::Y);
        assert_eq!(r.transform([1, 0, 0]), [0, 1, 0]);
        assert_eq!(r.transform([0, 1, 0]), [-1, 0, 0]);
        assert_eq!(r.transform([0, 0, 1]), [0, 0, 1]);
        assert!(r.is_valid());
    }

    #[test]
    fn test_quarter_turn_period() {
        for from in Axis::iter() {
            for to in Axis::iter().filter(|&to| to != from) {
                let r = Orientation::quarter_turn(from, to);
                assert_eq!(r * r * r * r, Orientation::IDENTITY);
                assert_ne!(r * r, Orientation::IDENTITY);
                assert_eq!(r * r.inverse(), Orientation::IDENTITY);
                assert_eq!(r.inverse(), Orientation::quarter_turn(to, from));
            }
        }
    }

    #[test]
    fn test_invalid_orientation() {
        assert!(Orientation::IDENTITY.is_valid());
        assert!(!Orientation([[1, 0, 0], [0, 1, 0], [0, 0, -1]]).is_valid());
        assert!(!Orientation([[1, 1, 0], [0, 1, 0], [0, 0, 1]]).is_valid());
    }
}
