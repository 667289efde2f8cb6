use cube_core::{Cube, Face};
use cube_prefs::ColorPreferences;

use super::theme::color32;
use crate::app::App;

/// Position of each face in the net, in units of whole faces. The top face is
/// above the front face and the bottom face is below it.
const NET_LAYOUT: [(Face, [usize; 2]); 6] = [
    (Face::U, [1, 0]),
    (Face::L, [0, 1]),
    (Face::F, [1, 1]),
    (Face::R, [2, 1]),
    (Face::B, [3, 1]),
    (Face::D, [1, 2]),
];
const NET_WIDTH: usize = 4 * 3;
const NET_HEIGHT: usize = 3 * 3;

/// Gap between stickers, relative to the sticker size.
const STICKER_GAP: f32 = 0.08;
const MARGIN: f32 = 16.0;

/// Paints the cube as an unfolded net, filling the available space.
pub(super) fn show(ui: &mut egui::Ui, app: &App) {
    let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
    let area = rect.shrink(MARGIN);
    if area.width() <= 0.0 || area.height() <= 0.0 {
        return;
    }

    let cell = f32::min(
        area.width() / NET_WIDTH as f32,
        area.height() / NET_HEIGHT as f32,
    );
    let net_size = egui::vec2(cell * NET_WIDTH as f32, cell * NET_HEIGHT as f32);
    let origin = area.center() - net_size / 2.0;

    let painter = ui.painter_at(rect);
    let gap = cell * STICKER_GAP;
    for (face_offset, row, col, color) in net_cells(app.sim.cube(), &app.prefs.colors) {
        let [fx, fy] = face_offset;
        let min = origin + egui::vec2((fx * 3 + col) as f32, (fy * 3 + row) as f32) * cell;
        let sticker = egui::Rect::from_min_size(min, egui::vec2(cell, cell)).shrink(gap / 2.0);
        painter.rect_filled(sticker, gap, color32(color));
    }
}

/// Returns every sticker of the net as `(face offset, row, column, color)`.
fn net_cells(
    cube: &Cube,
    colors: &ColorPreferences,
) -> impl Iterator<Item = ([usize; 2], usize, usize, [f32; 3])> {
    NET_LAYOUT.into_iter().flat_map(move |(face, offset)| {
        let grid = cube.face_grid(face);
        (0..3).flat_map(move |row| {
            (0..3).map(move |col| (offset, row, col, colors.face_color(grid[row][col])))
        })
    })
}
