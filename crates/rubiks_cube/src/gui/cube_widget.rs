use std::fmt;
use std::sync::Arc;

use cube_draw::{CubeRenderer, GraphicsState};
use egui::mutex::RwLock;
use eyre::Result;

use super::util::rounded_pixel_rect;
use crate::app::App;

/// Interactive 3D view of the cube.
pub(crate) struct CubeWidget {
    gfx: Arc<GraphicsState>,
    renderer: CubeRenderer,

    egui_wgpu_renderer: Arc<RwLock<eframe::egui_wgpu::Renderer>>,
    egui_texture_id: Option<egui::TextureId>,
}
impl Drop for CubeWidget {
    fn drop(&mut self) {
        if let Some(id) = self.egui_texture_id {
            self.egui_wgpu_renderer.write().free_texture(&id);
        }
    }
}
impl fmt::Debug for CubeWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CubeWidget")
            .field("egui_texture_id", &self.egui_texture_id)
            .finish_non_exhaustive()
    }
}
impl CubeWidget {
    pub(crate) fn new(render_state: &eframe::egui_wgpu::RenderState) -> Self {
        let gfx = Arc::new(GraphicsState::new(&render_state.device, &render_state.queue));
        let renderer = CubeRenderer::new(&gfx);
        log::info!(
            "Initialized 3D view on {:?}",
            render_state.adapter.get_info().backend,
        );

        Self {
            gfx,
            renderer,

            egui_wgpu_renderer: Arc::clone(&render_state.renderer),
            egui_texture_id: None,
        }
    }

    /// Submits the frame's GPU commands. This must be called each frame
    /// before egui renders.
    pub(crate) fn submit(&self) {
        self.gfx.submit();
    }

    /// Handles camera input and draws the cube into the remaining space.
    pub(crate) fn show(&mut self, ui: &mut egui::Ui, app: &mut App) -> Result<()> {
        let (rect, target_size) = rounded_pixel_rect(ui, ui.available_rect_before_wrap());
        let r = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        let interaction = &app.prefs.interaction;
        if r.dragged() {
            let delta = r.drag_delta();
            app.camera
                .drag(delta.x, delta.y, interaction.drag_sensitivity);
        }
        if r.hovered() {
            let scroll = ui.input(|input| input.smooth_scroll_delta.y);
            if scroll != 0.0 {
                app.camera.zoom(-scroll * interaction.zoom_sensitivity);
            }
        }

        if target_size.contains(&0) {
            // Minimized or collapsed; nothing to draw.
            return Ok(());
        }

        let view_proj = app.camera.view_projection(target_size)?;
        let scene = app.sim.scene(&app.prefs);
        let texture_view = self.renderer.draw(&scene, view_proj, target_size)?;

        register_or_update_egui_texture(
            &self.gfx.device,
            texture_view,
            &mut self.egui_texture_id,
            &mut self.egui_wgpu_renderer.write(),
        );
        if let Some(texture_id) = self.egui_texture_id {
            egui::Image::new((texture_id, r.rect.size())).paint_at(ui, r.rect);
        }

        Ok(())
    }
}

fn register_or_update_egui_texture(
    device: &wgpu::Device,
    texture_view: wgpu::TextureView,
    cached_egui_texture_id: &mut Option<egui::TextureId>,
    egui_wgpu_renderer: &mut eframe::egui_wgpu::Renderer,
) {
    let filter_mode = wgpu::FilterMode::Linear;
    match *cached_egui_texture_id {
        Some(egui_texture_id) => egui_wgpu_renderer.update_egui_texture_from_wgpu_texture(
            device,
            &texture_view,
            filter_mode,
            egui_texture_id,
        ),
        None => {
            *cached_egui_texture_id = Some(egui_wgpu_renderer.register_native_texture(
                device,
                &texture_view,
                filter_mode,
            ));
        }
    }
}
