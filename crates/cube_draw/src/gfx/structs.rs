//! Structs shared between the CPU and GPU.

/// Vertex of the unit cube mesh.
#[derive(Debug, Default, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    /// Position within the face, from 0.0 to 1.0 on each axis.
    pub uv: [f32; 2],
    /// Index of the face, used to look up its color.
    pub face: u32,
}
impl CubeVertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x2, // uv
        3 => Uint32,    // face
    ];
}

/// Per-cubie data.
#[derive(Debug, Default, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct CubieInstanceData {
    /// Columns of the model matrix.
    pub model: [[f32; 4]; 4],
    /// Color of each face; alpha is unused.
    pub colors: [[f32; 4]; 6],
}
impl CubieInstanceData {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 10] = wgpu::vertex_attr_array![
        4 => Float32x4,  // model column 0
        5 => Float32x4,  // model column 1
        6 => Float32x4,  // model column 2
        7 => Float32x4,  // model column 3
        8 => Float32x4,  // color R
        9 => Float32x4,  // color L
        10 => Float32x4, // color U
        11 => Float32x4, // color D
        12 => Float32x4, // color F
        13 => Float32x4, // color B
    ];
}

/// Per-frame uniform data.
#[derive(Debug, Default, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub(crate) struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    /// Normalized direction toward the light (xyz) and ambient brightness (w).
    pub light: [f32; 4],
    /// Outline width (x); other components are unused.
    pub params: [f32; 4],
}
