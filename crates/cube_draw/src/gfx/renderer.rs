use std::sync::Arc;

use cgmath::Matrix4;
use cube_view::Scene;
use eyre::{Result, bail};

use super::cache::CachedTexture2d;
use super::pipelines::render_cubies;
use super::structs::{CubieInstanceData, FrameUniforms};
use super::{COLOR_FORMAT, DEPTH_FORMAT, GraphicsState, srgb_to_linear};

/// Converts OpenGL clip space (`z` from -1 to 1) to WGPU clip space (`z` from
/// 0 to 1).
#[rustfmt::skip]
const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Renders a [`Scene`] to an offscreen texture.
#[derive(Debug)]
pub struct CubeRenderer {
    gfx: Arc<GraphicsState>,
    pipeline: render_cubies::Pipeline,

    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,

    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,

    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    color_texture: CachedTexture2d,
    depth_texture: CachedTexture2d,
}
impl CubeRenderer {
    /// Constructs a new cube renderer and uploads the cubie mesh.
    pub fn new(gfx: &Arc<GraphicsState>) -> Self {
        let pipeline = render_cubies::Pipeline::new(gfx);

        let (verts, indices) = crate::mesh::unit_cube();
        let vertex_buffer =
            gfx.create_buffer_init("cubie_vertices", &verts, wgpu::BufferUsages::VERTEX);
        let index_buffer =
            gfx.create_buffer_init("cubie_indices", &indices, wgpu::BufferUsages::INDEX);

        let instance_capacity = 26;
        let instance_buffer = create_instance_buffer(gfx, instance_capacity);

        let uniform_buffer = gfx.create_uniform_buffer::<FrameUniforms>("frame_uniforms");
        let bind_group = gfx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("render_cubies_bind_group"),
            layout: &pipeline.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let color_texture = CachedTexture2d::new(
            Arc::clone(gfx),
            "cube_color",
            COLOR_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        );
        let depth_texture = CachedTexture2d::new(
            Arc::clone(gfx),
            "cube_depth",
            DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );

        Self {
            gfx: Arc::clone(gfx),
            pipeline,

            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,

            instance_buffer,
            instance_capacity,

            uniform_buffer,
            bind_group,

            color_texture,
            depth_texture,
        }
    }

    /// Draws the scene and returns a view of the rendered texture.
    ///
    /// `view_proj` uses OpenGL clip space conventions. The commands are
    /// recorded into the shared encoder; call [`GraphicsState::submit()`]
    /// before displaying the texture.
    pub fn draw(
        &mut self,
        scene: &Scene,
        view_proj: Matrix4<f32>,
        size: [u32; 2],
    ) -> Result<wgpu::TextureView> {
        if size.contains(&0) {
            bail!("cube view has zero size");
        }

        let instances: Vec<CubieInstanceData> = scene
            .cubies
            .iter()
            .map(|cubie| CubieInstanceData {
                model: cubie.transform.into(),
                colors: cubie.face_colors.map(|[r, g, b]| [r, g, b, 1.0]),
            })
            .collect();
        if instances.len() > self.instance_capacity {
            self.instance_capacity = instances.len();
            self.instance_buffer = create_instance_buffer(&self.gfx, self.instance_capacity);
        }
        self.gfx.write_buffer(&self.instance_buffer, 0, &instances);

        let [lx, ly, lz] = scene.light_direction;
        let uniforms = FrameUniforms {
            view_proj: (OPENGL_TO_WGPU_MATRIX * view_proj).into(),
            light: [lx, ly, lz, scene.ambient_light],
            params: [scene.outline_width, 0.0, 0.0, 0.0],
        };
        self.gfx.write_buffer(&self.uniform_buffer, 0, &[uniforms]);

        let [r, g, b] = scene.background_color.map(|c| srgb_to_linear(c) as f64);
        let clear_color = wgpu::Color { r, g, b, a: 1.0 };

        let (color_texture, _) = self.color_texture.at_size(size);
        let (depth_texture, _) = self.depth_texture.at_size(size);

        {
            let mut encoder = self.gfx.encoder.lock();
            let mut render_pass = render_cubies::PassParams {
                clear_color,
                color_texture,
                depth_texture,
            }
            .begin_pass(&mut encoder);

            render_pass.set_pipeline(&self.pipeline.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..self.index_count, 0, 0..instances.len() as u32);
        }

        Ok(color_texture.clone())
    }
}

fn create_instance_buffer(gfx: &GraphicsState, capacity: usize) -> wgpu::Buffer {
    gfx.create_buffer::<CubieInstanceData>(
        "cubie_instances",
        capacity,
        wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    )
}
