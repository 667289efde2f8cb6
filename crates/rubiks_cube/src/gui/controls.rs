use cube_core::{Direction, Face, Move};
use cube_prefs::{MAX_TWIST_DURATION, MIN_TWIST_DURATION};
use strum::IntoEnumIterator;

use crate::app::App;

const BUTTON_WIDTH: f32 = 56.0;
const LABEL_WIDTH: f32 = 56.0;

/// Faces in the order they are listed in the controls.
const FACE_ORDER: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

pub(super) fn show(ui: &mut egui::Ui, app: &mut App) {
    let locked = app.sim.is_animating();

    ui.heading("Face Rotation");
    ui.add_enabled_ui(!locked, |ui| {
        egui::Grid::new("face_buttons")
            .num_columns(3)
            .show(ui, |ui| {
                for face in FACE_ORDER {
                    ui.add_sized([LABEL_WIDTH, 0.0], egui::Label::new(face.name()));
                    for direction in Direction::iter() {
                        let button = egui::Button::new(direction.name())
                            .min_size(egui::vec2(BUTTON_WIDTH, 0.0));
                        if ui.add(button).on_hover_text(notation(face, direction)).clicked() {
                            app.do_move(face, direction);
                        }
                    }
                    ui.end_row();
                }
            });
    });

    ui.separator();
    ui.heading("Camera");
    egui::Grid::new("camera_buttons").show(ui, |ui| {
        ui.label("");
        if ui.button("⬆").clicked() {
            app.nudge_camera(-1.0, 0.0);
        }
        ui.label("");
        ui.end_row();

        if ui.button("⬅").clicked() {
            app.nudge_camera(0.0, -1.0);
        }
        if ui.button("⬇").clicked() {
            app.nudge_camera(1.0, 0.0);
        }
        if ui.button("➡").clicked() {
            app.nudge_camera(0.0, 1.0);
        }
        ui.end_row();
    });
    if ui.button("Reset View").clicked() {
        app.camera.reset();
    }

    ui.separator();
    ui.heading("Cube");
    ui.add_enabled_ui(!locked, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Reset Cube").clicked() {
                app.reset_cube();
            }
            if ui
                .button("Randomize")
                .on_hover_text(format!("{} random moves", app.prefs.scramble.num_moves))
                .clicked()
            {
                app.scramble();
            }
        });
        ui.horizontal(|ui| {
            let has_history = !app.sim.history().is_empty();
            if ui.add_enabled(has_history, egui::Button::new("Solve")).clicked() {
                app.solve();
            }
            if ui.add_enabled(has_history, egui::Button::new("Undo")).clicked() {
                app.undo();
            }
        });
    });

    ui.separator();
    ui.heading("Animation");
    let mut twist_duration = app.prefs.animation.twist_duration;
    let r = ui.add(
        egui::Slider::new(&mut twist_duration, MIN_TWIST_DURATION..=MAX_TWIST_DURATION)
            .suffix(" s")
            .text("per twist"),
    );
    if r.changed() {
        app.prefs.animation.set_twist_duration(twist_duration);
    }

    ui.separator();
    ui.heading("Status");
    match app.sim.is_solved() {
        true => ui.colored_label(egui::Color32::LIGHT_GREEN, "Solved"),
        false => ui.colored_label(ui.visuals().warn_fg_color, "Scrambled"),
    };
    ui.label(format!("Moves: {}", app.sim.history().len()));
    if locked {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(format!("Animating ({} queued)", app.sim.queued_twists()));
        });
    }
    if let Some(rejected) = app.last_rejection {
        ui.colored_label(ui.visuals().error_fg_color, capitalize(&rejected.to_string()));
    }
}

/// Standard notation for a face button, such as `U` or `U'`.
fn notation(face: Face, direction: Direction) -> String {
    Move::new(face, direction).to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("cannot undo"), "Cannot undo");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_notation() {
        assert_eq!(notation(Face::U, Direction::Cw), "U");
        assert_eq!(notation(Face::U, Direction::Ccw), "U'");
        assert_eq!(notation(Face::B, Direction::Ccw), "B'");
    }

    #[test]
    fn test_every_face_has_buttons() {
        let mut faces = FACE_ORDER.to_vec();
        faces.sort();
        assert_eq!(faces, Face::iter().collect::<Vec<_>>());
    }
}
