//! 3D Rubik's Cube simulator.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod backend;
mod cli;
mod gui;

use clap::Parser;
use cube_prefs::Preferences;

const TITLE: &str = "Rubik's Cube Simulator";
const APP_ID: &str = "rubiks_cube";

fn main() -> eyre::Result<()> {
    let args = cli::Args::parse();

    // Initialize logging.
    let default_filter = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    #[cfg(debug_assertions)]
    color_eyre::install().expect("error initializing panic handler");
    #[cfg(not(debug_assertions))]
    std::panic::set_hook(Box::new(|panic_info| {
        let title = format!("{TITLE} crashed");
        let backtrace = std::backtrace::Backtrace::force_capture();
        let contents = format!("{title}\n\n{panic_info}\n\n{backtrace}");
        // IIFE to mimic try_block
        let fs_result = (|| {
            let dir = cube_prefs::paths::crash_report_dir()?;
            std::fs::create_dir_all(dir)?;
            let timestamp = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            let filename = dir.join(format!("crash_{timestamp}.log"));
            std::fs::write(&filename, &contents)?;
            eyre::Ok(filename)
        })();
        let msg = match fs_result {
            Ok(filename) => format!("Crash report saved to {}", filename.to_string_lossy()),
            Err(e) => format!("Error saving crash report to file: {e}\n\n{contents}"),
        };
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(msg)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }));

    let result = pollster::block_on(run(args));
    if let Err(e) = &result {
        log::error!("{e}");
    }
    result
}

async fn run(args: cli::Args) -> eyre::Result<()> {
    let prefs = Preferences::load();

    let candidates = backend::candidates_from_env();
    if candidates.is_empty() {
        eyre::bail!("no usable renderer in {}", backend::RENDERER_ENV_VAR);
    }

    let mut last_error = None;
    for renderer in candidates {
        log::info!("Starting with {renderer} renderer");
        let options = gui::StartupOptions {
            force_fallback: args.fallback,
            seed: args.seed,
            prefs: prefs.clone(),
        };
        match eframe::run_native(
            TITLE,
            native_options(renderer),
            Box::new(move |cc| Ok(Box::new(gui::AppUi::new(cc, options)))),
        ) {
            Ok(()) => return Ok(()),
            Err(e) => {
                log::warn!("Error starting {renderer} renderer: {e}");
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(eyre::eyre!("every renderer failed to start; last error: {e}")),
        None => Ok(()),
    }
}

fn native_options(renderer: eframe::Renderer) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_app_id(APP_ID)
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([800.0, 600.0]),
        renderer,
        wgpu_options: backend::make_wgpu_configuration(),
        ..Default::default()
    }
}

impl eframe::App for gui::AppUi {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Build all the UI.
        self.build(ctx);
    }
}
