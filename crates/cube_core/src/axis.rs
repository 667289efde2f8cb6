use strum::EnumIter;

/// 3-dimensional axis.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// Returns the perpendicular axes from this one, using the left-hand rule.
    /// (The cross product of the returned axes is the opposite of the input.)
    ///
    /// Rotating from the first axis toward the second is a clockwise quarter
    /// turn as seen from the positive end of `self`.
    pub fn perpendiculars(self) -> [Axis; 2] {
        use Axis::*;
        match self {
            X => [Z, Y], // X+ => rotate from Z+ to Y+.
            Y => [X, Z], // Y+ => rotate from X+ to Z+.
            Z => [Y, X], // Z+ => rotate from Y+ to X+.
        }
    }

    /// Returns the index of the axis in a coordinate triple.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the unit vector along this axis.
    pub fn unit(self) -> [i8; 3] {
        let mut ret = [0; 3];
        ret[self.index()] = 1;
        ret
    }

    /// Returns the name of the axis.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Positive or negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Positive.
    Pos = 1,
}
impl Sign {
    /// Returns the sign as an integer (`-1` or `1`).
    pub fn int(self) -> i8 {
        self as i8
    }
    /// Returns the sign as a float (`-1.0` or `1.0`).
    pub fn float(self) -> f32 {
        self.int() as f32
    }
    /// Returns the sign of a nonzero integer, or `None` for zero.
    pub fn of(x: i8) -> Option<Self> {
        match x.signum() {
            1 => Some(Sign::Pos),
            -1 => Some(Sign::Neg),
            _ => None,
        }
    }
}
impl std::ops::Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Pos => Sign::Neg,
        }
    }
}
