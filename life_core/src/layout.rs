// layout.rs - Mapping grid coordinates to pixel rectangles

/// Axis-aligned pixel rectangle, origin at the top-left of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Cell geometry for one frame.
///
/// Cell size is the window size over the grid size with integer division,
/// so a window that does not divide evenly leaves an unused margin on the
/// right and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    window_width  : u32,
    window_height : u32,
    rows          : usize,
    cols          : usize,
    border        : u32,
    spacing       : u32,
}

impl Layout {
    pub fn new(window_width: u32, window_height: u32, rows: usize, cols: usize) -> Self {
        Self {
            window_width,
            window_height,
            rows,
            cols,
            border: 0,
            spacing: 0,
        }
    }

    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn window_rect(&self) -> Rect {
        Rect::new(0, 0, self.window_width, self.window_height)
    }

    pub fn cell_width(&self) -> u32 {
        Self::divide(self.window_width, self.border, self.cols)
    }

    pub fn cell_height(&self) -> u32 {
        Self::divide(self.window_height, self.border, self.rows)
    }

    fn divide(extent: u32, border: u32, count: usize) -> u32 {
        let inner = extent.saturating_sub(border.saturating_mul(2));
        match u32::try_from(count) {
            Ok(0) => 0,
            Ok(count) => inner / count,
            Err(_) => 0,
        }
    }

    /// Screen rectangle of the cell at `(row, col)`, spacing already removed.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let (cw, ch) = (self.cell_width(), self.cell_height());
        Rect::new(
            self.border + col as u32 * cw,
            self.border + row as u32 * ch,
            cw.saturating_sub(self.spacing),
            ch.saturating_sub(self.spacing),
        )
    }
}
