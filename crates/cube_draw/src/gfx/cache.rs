use std::sync::Arc;

use super::GraphicsState;

/// 2D texture that is recreated only when its size changes.
#[derive(Debug)]
pub(crate) struct CachedTexture2d {
    gfx: Arc<GraphicsState>,
    label: &'static str,
    format: wgpu::TextureFormat,
    usage: wgpu::TextureUsages,

    contents: Option<([u32; 2], wgpu::TextureView)>,
}
impl CachedTexture2d {
    pub fn new(
        gfx: Arc<GraphicsState>,
        label: &'static str,
        format: wgpu::TextureFormat,
        usage: wgpu::TextureUsages,
    ) -> Self {
        Self {
            gfx,
            label,
            format,
            usage,

            contents: None,
        }
    }

    /// Returns a view of the texture, creating a new one if `size` differs
    /// from the size of the existing one. The second value is `true` if the
    /// texture was recreated.
    pub fn at_size(&mut self, size: [u32; 2]) -> (&wgpu::TextureView, bool) {
        let recreated = !matches!(&self.contents, Some((old_size, _)) if *old_size == size);
        if recreated {
            log::trace!("Creating {} texture with size {size:?}", self.label);
            let texture = self
                .gfx
                .create_texture_2d(self.label, size, self.format, self.usage);
            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
            self.contents = Some((size, view));
        }
        match &self.contents {
            Some((_, view)) => (view, recreated),
            None => unreachable!("texture was just created"),
        }
    }
}
