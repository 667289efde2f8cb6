use std::fmt;

use parking_lot::Mutex;
use wgpu::util::DeviceExt;

/// WGPU graphics state.
#[allow(missing_docs)]
pub struct GraphicsState {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub(super) encoder: Mutex<wgpu::CommandEncoder>,
}
impl fmt::Debug for GraphicsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphicsState").finish_non_exhaustive()
    }
}
impl GraphicsState {
    /// Constructs a new [`GraphicsState`].
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let encoder = Mutex::new(create_command_encoder(device));

        Self {
            device: device.clone(),
            queue: queue.clone(),
            encoder,
        }
    }

    /// Submit enqueued commands for the frame. **This must be called each frame
    /// before egui does its rendering.**
    pub fn submit(&self) -> wgpu::SubmissionIndex {
        let new_encoder = create_command_encoder(&self.device);
        let old_encoder = std::mem::replace(&mut *self.encoder.lock(), new_encoder);
        self.queue.submit([old_encoder.finish()])
    }

    pub(super) fn create_buffer_init<T: Default + bytemuck::NoUninit>(
        &self,
        label: impl fmt::Display,
        contents: &[T],
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        let mut contents = contents.to_vec();
        super::pad_buffer_to_wgpu_copy_buffer_alignment(&mut contents);

        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&label.to_string()),
                contents: bytemuck::cast_slice::<T, u8>(contents.as_slice()),
                usage,
            })
    }
    pub(super) fn create_buffer<T>(
        &self,
        label: impl fmt::Display,
        len: usize,
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        let size = size_of::<T>() * std::cmp::max(1, len); // don't make an empty buffer
        self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&label.to_string()),
            size: wgpu::util::align_to(size as u64, wgpu::COPY_BUFFER_ALIGNMENT),
            usage,
            mapped_at_creation: false,
        })
    }

    pub(super) fn create_uniform_buffer<T>(&self, label: impl fmt::Display) -> wgpu::Buffer {
        self.create_buffer::<T>(
            label,
            1,
            wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::UNIFORM,
        )
    }

    /// Creates a 2D texture, clamping its size to the device limits.
    pub(super) fn create_texture_2d(
        &self,
        label: &str,
        size: [u32; 2],
        format: wgpu::TextureFormat,
        usage: wgpu::TextureUsages,
    ) -> wgpu::Texture {
        let max = self.device.limits().max_texture_dimension_2d;
        let [w, h] = size.map(|x| x.clamp(1, max));

        self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: w,
                height: h,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage,
            view_formats: &[],
        })
    }

    pub(super) fn write_buffer<T: bytemuck::NoUninit>(
        &self,
        buffer: &wgpu::Buffer,
        offset: wgpu::BufferAddress,
        data: &[T],
    ) {
        self.queue
            .write_buffer(buffer, offset, bytemuck::cast_slice(data));
    }
}

fn create_command_encoder(device: &wgpu::Device) -> wgpu::CommandEncoder {
    device.create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None })
}
