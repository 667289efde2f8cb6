/// Window background.
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x1e, 0x1e, 0x1e);
/// Highlight color for selected and hovered widgets.
const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x3a, 0x8e, 0xe6);

/// Applies the dark theme.
pub(super) fn apply(ctx: &egui::Context) {
    ctx.set_theme(egui::Theme::Dark);
    ctx.style_mut_of(egui::Theme::Dark, |style| {
        let visuals = &mut style.visuals;
        visuals.panel_fill = BACKGROUND;
        visuals.window_fill = BACKGROUND;
        visuals.selection.bg_fill = ACCENT;
        visuals.hyperlink_color = ACCENT;
        visuals.widgets.hovered.bg_stroke.color = ACCENT;
        visuals.widgets.active.bg_fill = ACCENT;
        visuals.widgets.active.weak_bg_fill = ACCENT;

        style.spacing.button_padding = egui::vec2(8.0, 4.0);
        style.spacing.scroll = egui::style::ScrollStyle::solid();
    });
}

/// Converts an RGB color in the range 0.0 to 1.0 to an egui color.
pub(super) fn color32(rgb: [f32; 3]) -> egui::Color32 {
    let [r, g, b] = rgb.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color32() {
        assert_eq!(color32([0.0, 0.5, 1.0]), egui::Color32::from_rgb(0, 128, 255));
        assert_eq!(color32([-1.0, 2.0, 0.12]), egui::Color32::from_rgb(0, 255, 31));
    }
}
