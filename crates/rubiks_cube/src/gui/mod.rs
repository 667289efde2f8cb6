use cube_core::{Direction, Face};
use cube_prefs::Preferences;

mod controls;
mod cube_widget;
mod net_view;
mod theme;
mod util;

use crate::app::App;
use cube_widget::CubeWidget;

/// Settings chosen before the window opens.
#[derive(Debug, Clone)]
pub(crate) struct StartupOptions {
    /// Whether to show the 2D net even if the 3D view is available.
    pub force_fallback: bool,
    /// Seed for the scramble generator.
    pub seed: Option<u64>,
    pub prefs: Preferences,
}

/// How the cube is displayed in the central panel.
enum CubeDisplay {
    /// Rendered in 3D on the GPU.
    Gpu(Box<CubeWidget>),
    /// Unfolded 2D net painted with egui.
    Net,
}

pub(crate) struct AppUi {
    pub app: App,
    display: CubeDisplay,
}

impl AppUi {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, options: StartupOptions) -> Self {
        let app = App::new(options.prefs, options.seed);

        theme::apply(&cc.egui_ctx);

        let display = match (&cc.wgpu_render_state, options.force_fallback) {
            (_, true) => {
                log::info!("Using 2D net view");
                CubeDisplay::Net
            }
            (Some(render_state), false) => {
                CubeDisplay::Gpu(Box::new(CubeWidget::new(render_state)))
            }
            (None, false) => {
                log::warn!("No wgpu render state; falling back to 2D net view");
                CubeDisplay::Net
            }
        };

        AppUi { app, display }
    }

    pub fn build(&mut self, ctx: &egui::Context) {
        if self.app.step() {
            ctx.request_repaint();
        }

        handle_keyboard(ctx, &mut self.app);

        egui::SidePanel::left("controls")
            .resizable(false)
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(12.0))
            .show(ctx, |ui| controls::show(ui, &mut self.app));

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::color32(self.app.prefs.view.background_color)))
            .show(ctx, |ui| match &mut self.display {
                CubeDisplay::Gpu(widget) => {
                    if let Err(e) = widget.show(ui, &mut self.app) {
                        log::warn!("Error drawing 3D view; falling back to 2D net view: {e}");
                        self.display = CubeDisplay::Net;
                    }
                }
                CubeDisplay::Net => net_view::show(ui, &self.app),
            });

        // Submit wgpu commands before egui does.
        if let CubeDisplay::Gpu(widget) = &self.display {
            widget.submit();
        }
    }
}

/// Turns faces from the keyboard. Shift turns counterclockwise.
fn handle_keyboard(ctx: &egui::Context, app: &mut App) {
    if !app.prefs.interaction.keyboard_moves || ctx.wants_keyboard_input() {
        return;
    }

    let moves: Vec<(Face, Direction)> = ctx.input(|input| {
        let direction = match input.modifiers.shift {
            true => Direction::Ccw,
            false => Direction::Cw,
        };
        [
            (egui::Key::R, Face::R),
            (egui::Key::L, Face::L),
            (egui::Key::U, Face::U),
            (egui::Key::D, Face::D),
            (egui::Key::F, Face::F),
            (egui::Key::B, Face::B),
        ]
        .into_iter()
        .filter(|&(key, _)| input.key_pressed(key))
        .map(|(_, face)| (face, direction))
        .collect()
    });

    for (face, direction) in moves {
        app.do_move(face, direction);
    }
}
