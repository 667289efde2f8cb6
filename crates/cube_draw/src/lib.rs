//! Cube rendering engine.

mod gfx;
mod mesh;

pub use gfx::*;
