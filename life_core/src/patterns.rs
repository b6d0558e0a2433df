// patterns.rs - Built-in patterns that can be stamped onto a grid

use crate::grid::{Cell, Grid};

/// Rows left untouched above and below the vertical line.
const LINE_MARGIN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A single column of live cells down the middle of the grid.
    ///
    /// Historically bound to the "Sierpinski triangle" key. It has always
    /// drawn a plain vertical line and that is what it keeps drawing.
    VerticalLine,
}

pub const PATTERNS: &[Pattern] = &[Pattern::VerticalLine];

impl Pattern {
    pub fn name(self) -> &'static str {
        match self {
            Pattern::VerticalLine => "Vertical line",
        }
    }

    /// Cells the pattern turns on for a grid of the given size.
    pub fn cells(self, rows: usize, cols: usize) -> impl Iterator<Item = (usize, usize)> {
        match self {
            Pattern::VerticalLine => {
                let col = cols / 2;
                (LINE_MARGIN..rows.saturating_sub(LINE_MARGIN)).map(move |row| (row, col))
            }
        }
    }
}

/// Turns the pattern's cells on, leaving every other cell as it was.
pub fn stamp_pattern(grid: &mut Grid, pattern: Pattern) {
    for (row, col) in pattern.cells(grid.rows(), grid.cols()) {
        grid.set(row, col, Cell::Alive);
    }
}

/// Clears the grid, then stamps the pattern.
pub fn apply_pattern(grid: &mut Grid, pattern: Pattern) {
    grid.clear();
    stamp_pattern(grid, pattern);
}
