//! Frame rendering, independent of the windowing backend.
//!
//! [`render`] walks the grid and cursor and issues draw calls to a
//! [`Canvas`]. It only reads the simulation. Draw order is fixed: background,
//! then every cell, then the cursor overlay on top.

use crate::color::Color;
use crate::config::Config;
use crate::grid::Cell;
use crate::layout::{Layout, Rect};
use crate::sim::Simulation;

/// Something that can fill rectangles.
///
/// `fill_rect` must alpha-blend translucent colors over what is already
/// drawn; the cursor relies on it.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// Cell colors for one frame. The cursor brings its own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dead  : Color,
    pub alive : Color,
}

impl Palette {
    pub fn from_config(config: &Config) -> Self {
        Self {
            dead: config.dead_color,
            alive: config.alive_color,
        }
    }

    pub fn cell(&self, cell: Cell) -> Color {
        match cell {
            Cell::Dead  => self.dead,
            Cell::Alive => self.alive,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub fn render<C: Canvas + ?Sized>(sim: &Simulation, layout: &Layout, palette: &Palette, canvas: &mut C) {
    canvas.clear(palette.dead);

    for (row, cells) in sim.grid().iter_rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            canvas.fill_rect(layout.cell_rect(row, col), palette.cell(cell));
        }
    }

    canvas.fill_rect(sim.cursor().rect(layout), sim.cursor().color);
}

/// A canvas that records draw calls instead of drawing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect(Rect, Color),
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Direction;

    fn small_sim() -> Simulation {
        let config = Config::new().with_grid_size(2, 3).with_randomize_on_start(false);
        let mut sim = Simulation::with_seed(&config, 0).unwrap();
        sim.move_cursor(Direction::Right);
        sim.toggle_at_cursor();
        sim.move_cursor(Direction::Down);
        sim
    }

    #[test]
    fn draws_background_then_cells_then_cursor() {
        let sim = small_sim();
        let layout = Layout::new(30, 20, 2, 3);
        let palette = Palette::default();
        let mut list = DrawList::default();
        render(&sim, &layout, &palette, &mut list);

        assert_eq!(list.commands.len(), 1 + 6 + 1);
        assert_eq!(list.commands[0], DrawCommand::Clear(Color::WHITE));
        assert_eq!(list.commands[1], DrawCommand::FillRect(Rect::new(0, 0, 10, 10), Color::WHITE));
        assert_eq!(list.commands[2], DrawCommand::FillRect(Rect::new(10, 0, 10, 10), Color::BLACK));
        assert_eq!(
            list.commands.last(),
            Some(&DrawCommand::FillRect(Rect::new(10, 10, 10, 10), Color::CURSOR_AMBER))
        );
    }

    #[test]
    fn rendering_leaves_state_alone() {
        let sim = small_sim();
        let before = (sim.grid().clone(), sim.cursor().clone(), sim.is_paused(), sim.generation());
        let mut list = DrawList::default();
        render(&sim, &Layout::new(300, 200, 2, 3), &Palette::default(), &mut list);
        render(&sim, &Layout::new(300, 200, 2, 3), &Palette::default(), &mut list);
        let after = (sim.grid().clone(), sim.cursor().clone(), sim.is_paused(), sim.generation());
        assert_eq!(before, after);
    }

    #[test]
    fn cursor_color_is_translucent() {
        assert!(!Color::CURSOR_AMBER.is_opaque());
        assert!(Palette::default().dead.is_opaque());
        assert!(Palette::default().alive.is_opaque());
    }
}
