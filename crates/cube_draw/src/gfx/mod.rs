//! Rendering logic.

mod cache;
mod pipelines;
mod renderer;
mod state;
mod structs;

pub use renderer::CubeRenderer;
pub use state::GraphicsState;
pub(crate) use structs::CubeVertex;

/// Format of the offscreen color texture that egui samples.
pub const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;
/// Format of the depth buffer.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Pads a buffer to `wgpu::COPY_BUFFER_ALIGNMENT`.
fn pad_buffer_to_wgpu_copy_buffer_alignment<T: Default + bytemuck::NoUninit>(buf: &mut Vec<T>) {
    loop {
        let bytes_len = bytemuck::cast_slice::<T, u8>(buf).len();
        if bytes_len > 0 && bytes_len as u64 % wgpu::COPY_BUFFER_ALIGNMENT == 0 {
            break;
        }
        buf.push(T::default());
    }
}

/// Converts an sRGB color component to linear.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_buffer() {
        let mut buf: Vec<u8> = vec![1, 2, 3];
        pad_buffer_to_wgpu_copy_buffer_alignment(&mut buf);
        assert_eq!(buf, vec![1, 2, 3, 0]);

        let mut empty: Vec<u16> = vec![];
        pad_buffer_to_wgpu_copy_buffer_alignment(&mut empty);
        assert_eq!(empty.len(), 2);
    }

    #[test]
    fn test_srgb_to_linear() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!(srgb_to_linear(0.5) < 0.5);
    }
}
