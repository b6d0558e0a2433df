// config.rs - Compiled-in settings for the simulator window and grid

use std::time::Duration;

use crate::color::Color;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::layout::Layout;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title          : &'static str,
    pub window_width   : u32,
    pub window_height  : u32,
    pub rows           : usize,
    pub cols           : usize,
    /// Empty frame around the whole grid, in pixels.
    pub border         : u32,
    /// Gap between neighboring cells, in pixels.
    pub spacing        : u32,
    /// Minimum time between two generations while running.
    pub step_delay     : Duration,
    /// Cursor step while the modifier key is held.
    pub fast_step      : usize,
    pub dead_color     : Color,
    pub alive_color    : Color,
    pub cursor_color   : Color,
    pub start_paused   : bool,
    /// Fill the grid with noise before the first frame.
    pub randomize_on_start : bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Conway's Game of Life",
            window_width: 800,
            window_height: 800,
            rows: 100,
            cols: 100,
            border: 0,
            spacing: 0,
            step_delay: Duration::from_millis(50),
            fast_step: 5,
            dead_color: Color::WHITE,
            alive_color: Color::BLACK,
            cursor_color: Color::CURSOR_AMBER,
            start_paused: true,
            randomize_on_start: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn with_grid_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    pub fn with_colors(mut self, dead: Color, alive: Color, cursor: Color) -> Self {
        self.dead_color = dead;
        self.alive_color = alive;
        self.cursor_color = cursor;
        self
    }

    pub fn with_randomize_on_start(mut self, randomize: bool) -> Self {
        self.randomize_on_start = randomize;
        self
    }

    /// Pixel layout of the grid inside the window.
    pub fn layout(&self) -> Layout {
        Layout::new(self.window_width, self.window_height, self.rows, self.cols)
            .with_border(self.border)
            .with_spacing(self.spacing)
    }

    /// Checks that the grid exists and every cell gets at least one visible pixel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Grid::new(self.rows, self.cols)?;

        let layout = Layout::new(self.window_width, self.window_height, self.rows, self.cols)
            .with_border(self.border);
        let (cell_width, cell_height) = (layout.cell_width(), layout.cell_height());
        if cell_width == 0 || cell_height == 0 {
            return Err(ConfigError::WindowTooSmall {
                width: self.window_width,
                height: self.window_height,
                rows: self.rows,
                cols: self.cols,
                border: self.border,
            });
        }
        if self.spacing >= cell_width || self.spacing >= cell_height {
            return Err(ConfigError::SpacingTooLarge {
                spacing: self.spacing,
                cell_width,
                cell_height,
            });
        }
        Ok(())
    }
}
