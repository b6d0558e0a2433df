//! Selection cursor
//!
//! The cursor marks one cell for editing. It is moved in whole cells and
//! always stays on the grid: a move past an edge stops at the edge.

use crate::color::Color;
use crate::layout::{Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// Column, `0..cols`
    pub x: usize,
    /// Row, `0..rows`
    pub y: usize,
    pub color: Color,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            color: Color::CURSOR_AMBER,
        }
    }
}

impl Cursor {
    pub fn new(color: Color) -> Self {
        Self { color, ..Self::default() }
    }

    /// Moves `step` cells in `direction`, clamped to a `rows x cols` grid.
    pub fn move_by(&mut self, direction: Direction, step: usize, rows: usize, cols: usize) {
        let max_x = cols.saturating_sub(1);
        let max_y = rows.saturating_sub(1);
        match direction {
            Direction::Up    => self.y = self.y.saturating_sub(step),
            Direction::Down  => self.y = self.y.saturating_add(step).min(max_y),
            Direction::Left  => self.x = self.x.saturating_sub(step),
            Direction::Right => self.x = self.x.saturating_add(step).min(max_x),
        }
    }

    /// `(row, col)` of the selected cell.
    pub fn position(&self) -> (usize, usize) {
        (self.y, self.x)
    }

    /// Screen rectangle covering the selected cell.
    pub fn rect(&self, layout: &Layout) -> Rect {
        layout.cell_rect(self.y, self.x)
    }
}
