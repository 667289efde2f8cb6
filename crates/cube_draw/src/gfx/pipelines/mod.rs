//! Render pipelines.

pub(super) mod render_cubies;
