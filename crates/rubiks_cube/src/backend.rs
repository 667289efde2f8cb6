//! Graphics backend selection.

/// Environment variable listing the renderers to try, in order.
pub(crate) const RENDERER_ENV_VAR: &str = "RUBIKS_CUBE_RENDERER";
const DEFAULT_RENDERERS: &str = "wgpu,glow";

/// Returns the renderers to try, in order, from [`RENDERER_ENV_VAR`].
pub(crate) fn candidates_from_env() -> Vec<eframe::Renderer> {
    match std::env::var(RENDERER_ENV_VAR) {
        Ok(list) => parse_candidates(&list),
        Err(_) => parse_candidates(DEFAULT_RENDERERS),
    }
}

/// Parses a comma-separated list of renderer names. Unknown names are logged
/// and skipped.
pub(crate) fn parse_candidates(list: &str) -> Vec<eframe::Renderer> {
    let mut ret = vec![];
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let renderer = match name.to_ascii_lowercase().as_str() {
            "wgpu" => eframe::Renderer::Wgpu,
            "glow" | "opengl" | "gl" => eframe::Renderer::Glow,
            _ => {
                log::warn!("Unknown renderer {name:?} in {RENDERER_ENV_VAR}");
                continue;
            }
        };
        if !ret.contains(&renderer) {
            ret.push(renderer);
        }
    }
    ret
}

/// Requests only what the cube renderer needs, using WebGL2 limits so that
/// the same device works on systems with only OpenGL.
pub(crate) fn make_wgpu_configuration() -> eframe::egui_wgpu::WgpuConfiguration {
    let mut wgpu_setup = eframe::egui_wgpu::WgpuSetupCreateNew::default();

    let old_device_descriptor_fn = std::sync::Arc::clone(&wgpu_setup.device_descriptor);

    wgpu_setup.device_descriptor = std::sync::Arc::new(move |adapter| {
        let mut device_descriptor = old_device_descriptor_fn(adapter);

        let mut new_limits = wgpu::Limits::downlevel_webgl2_defaults();
        new_limits.max_texture_dimension_2d =
            device_descriptor.required_limits.max_texture_dimension_2d;
        device_descriptor.required_limits = new_limits;

        device_descriptor
    });

    eframe::egui_wgpu::WgpuConfiguration {
        wgpu_setup: eframe::egui_wgpu::WgpuSetup::CreateNew(wgpu_setup),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use eframe::Renderer::{Glow, Wgpu};

    use super::*;

    #[test]
    fn test_default_order() {
        assert_eq!(parse_candidates(DEFAULT_RENDERERS), vec![Wgpu, Glow]);
    }

    #[test]
    fn test_parse_candidates() {
        assert_eq!(parse_candidates("glow"), vec![Glow]);
        assert_eq!(parse_candidates(" GLOW , wgpu "), vec![Glow, Wgpu]);
        assert_eq!(parse_candidates("vulkan,wgpu"), vec![Wgpu]);
        assert_eq!(parse_candidates("wgpu,wgpu"), vec![Wgpu]);
        assert_eq!(parse_candidates(""), vec![]);
    }
}
