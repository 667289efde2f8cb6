//! Unit cube mesh shared by every cubie.

use cube_view::cube_core::Face;
use strum::IntoEnumIterator;

use crate::gfx::CubeVertex;

/// Corners of a face in UV space, counterclockwise when seen from outside.
const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Returns the vertices and triangle indices of a cube spanning `-0.5..=0.5`
/// on each axis, with four vertices per side so that each side has its own
/// normal and UV coordinates.
pub(crate) fn unit_cube() -> (Vec<CubeVertex>, Vec<u16>) {
    let mut verts = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for face in Face::iter() {
        let normal = face.normal().map(f32::from);
        let [right, up] = face.net_basis().map(|f| f.normal().map(f32::from));

        let base = verts.len() as u16;
        for uv @ [u, v] in FACE_UVS {
            let position =
                std::array::from_fn(|i| normal[i] * 0.5 + (u - 0.5) * right[i] + (v - 0.5) * up[i]);
            verts.push(CubeVertex {
                position,
                normal,
                uv,
                face: face as u32,
            });
        }
        indices.extend([0, 1, 2, 0, 2, 3].map(|i| base + i));
    }

    (verts, indices)
}
