//! Error types for grid construction and configuration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyDimensions { rows: usize, cols: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("window {width}x{height} leaves no room for a {rows}x{cols} grid (border {border})")]
    WindowTooSmall {
        width: u32,
        height: u32,
        rows: usize,
        cols: usize,
        border: u32,
    },

    #[error("cell spacing {spacing} swallows the whole {cell_width}x{cell_height} cell")]
    SpacingTooLarge {
        spacing: u32,
        cell_width: u32,
        cell_height: u32,
    },
}
