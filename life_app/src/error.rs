//! Fatal startup errors.

use life_core::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Window or renderer creation failed inside eframe.
    #[error("could not open the window: {0}")]
    Window(eframe::Error),
}
