//! 3x3x3 Rubik's Cube state model and move engine.
//!
//! The cube is described in a right-handed coordinate system with `+X` to
//! the right, `+Y` up, and `+Z` toward the viewer (front).

mod axis;
mod cube;
mod engine;
mod face;
mod orientation;

pub use axis::{Axis, Sign};
pub use cube::{Cube, Cubie, CUBIE_COUNT, GridPos};
pub use engine::{MoveEngine, ScrambleParams};
pub use face::{Direction, Face, Move, ParseMoveError};
pub use orientation::Orientation;
