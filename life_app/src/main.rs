// main.rs - Conway's Game of Life in an eframe window
//
// Keys: Space pause/resume, Right arrow single step, R randomize, C clear,
// T stamp the vertical line, W/A/S/D move the cursor (hold Ctrl for 5 cells),
// Enter toggles the cell under the cursor.

use std::process::ExitCode;

use eframe::egui;
use env_logger::Env;
use life_core::{Config, ConfigError, Simulation};

mod error;
mod keys;
mod ui;

use error::AppError;
use ui::LifeApp;

fn main() -> ExitCode {
    let env = Env::default()
        .filter_or("LOG_LVL", "info")
        .write_style_or("LOG_STYLE", "always");
    env_logger::init_from_env(env);

    match run(Config::default()) {
        Ok(()) => {
            log::info!("window closed, shutting down");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<(), AppError> {
    config.validate()?;
    let sim = Simulation::new(&config).map_err(ConfigError::from)?;
    let app = LifeApp::new(&config, sim);

    let width = config.window_width as f32;
    let height = config.window_height as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title)
            .with_inner_size([width, height])
            .with_resizable(false),
        ..Default::default()
    };

    log::info!(
        "opening {}x{} window for a {}x{} grid",
        config.window_width, config.window_height, config.rows, config.cols
    );
    eframe::run_native(
        config.title,
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(AppError::Window)
}
