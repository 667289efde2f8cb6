/// Rounds `rect` to pixel boundaries and returns the rounded rectangle along
/// with its size in physical pixels.
pub(super) fn rounded_pixel_rect(ui: &egui::Ui, rect: egui::Rect) -> (egui::Rect, [u32; 2]) {
    let dpi = ui.ctx().pixels_per_point();

    // Round rectangle to pixel boundary for crisp image.
    let pixels_rect = egui::Rect::from_min_max(
        egui::pos2((dpi * rect.left()).ceil(), (dpi * rect.top()).ceil()),
        egui::pos2((dpi * rect.right()).floor(), (dpi * rect.bottom()).floor()),
    );

    // Convert back from pixel coordinates to egui coordinates.
    let egui_rect = egui::Rect::from_min_max(
        (pixels_rect.min.to_vec2() / dpi).to_pos2(),
        (pixels_rect.max.to_vec2() / dpi).to_pos2(),
    );

    let pixel_size = [
        pixels_rect.width().max(0.0) as u32,
        pixels_rect.height().max(0.0) as u32,
    ];
    (egui_rect, pixel_size)
}
