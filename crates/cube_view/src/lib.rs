//! Cube simulation, twist animation, camera, and renderer-facing scene.
//!
//! Nothing in this crate depends on a particular graphics backend. Renderers
//! read a [`Scene`] built from a [`CubeSimulation`] and a [`Camera`].

mod animations;
mod camera;
mod scene;
mod simulation;

pub use animations::{Commit, TwistAnimation, TwistAnimationState};
pub use camera::Camera;
pub use cube_core;
pub use cube_prefs;
pub use scene::{CubieInstance, Scene};
pub use simulation::{CubeSimulation, InputLocked};
