// sim.rs - Simulation state: double-buffered grid, cursor and run flags

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::cursor::{Cursor, Direction};
use crate::error::GridError;
use crate::grid::{Grid, advance_into};
use crate::patterns::{self, Pattern};

/// Everything the main loop mutates.
///
/// The two grid buffers live in fixed slots; `current` says which slot
/// holds the displayed generation. A generation writes into the other slot
/// and then flips the index, so no grid is ever copied.
#[derive(Debug)]
pub struct Simulation {
    buffers       : [Grid; 2],
    current       : usize,
    cursor        : Cursor,
    paused        : bool,
    modifier_down : bool,
    fast_step     : usize,
    generation    : u64,
    rng           : StdRng,
}

impl Simulation {
    /// Builds the simulation described by `config`, seeded from the OS.
    pub fn new(config: &Config) -> Result<Self, GridError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Same as [`Simulation::new`] with a fixed seed, for reproducible runs.
    pub fn with_seed(config: &Config, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &Config, rng: StdRng) -> Result<Self, GridError> {
        let grid = Grid::new(config.rows, config.cols)?;
        let mut sim = Self {
            buffers: [grid.clone(), grid],
            current: 0,
            cursor: Cursor::new(config.cursor_color),
            paused: config.start_paused,
            modifier_down: false,
            fast_step: config.fast_step,
            generation: 0,
            rng,
        };
        if config.randomize_on_start {
            sim.randomize();
        }
        log::debug!(
            "simulation ready: {}x{} grid, {} live cells, paused={}",
            config.rows, config.cols, sim.population(), sim.paused
        );
        Ok(sim)
    }

    pub fn grid(&self) -> &Grid {
        &self.buffers[self.current]
    }

    fn grid_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.current]
    }

    pub fn rows(&self) -> usize {
        self.grid().rows()
    }

    pub fn cols(&self) -> usize {
        self.grid().cols()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_running(&self) -> bool {
        !self.paused
    }

    pub fn modifier_down(&self) -> bool {
        self.modifier_down
    }

    /// Generations computed since the grid was last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid().population()
    }

    /// Advances one generation and swaps the buffers. Works whether paused or not.
    pub fn step(&mut self) {
        let (front, back) = self.buffers.split_at_mut(1);
        let (current, next) = if self.current == 0 {
            (&front[0], &mut back[0])
        } else {
            (&back[0], &mut front[0])
        };
        advance_into(current, next);
        self.current ^= 1;
        self.generation += 1;
        log::trace!("generation {}: {} live cells", self.generation, self.population());
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("{}", if self.paused { "paused" } else { "running" });
    }

    pub fn set_modifier(&mut self, down: bool) {
        self.modifier_down = down;
    }

    /// Cursor step for the current modifier state.
    pub fn cursor_step(&self) -> usize {
        if self.modifier_down { self.fast_step } else { 1 }
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let (rows, cols, step) = (self.rows(), self.cols(), self.cursor_step());
        self.cursor.move_by(direction, step, rows, cols);
        log::trace!("cursor at ({}, {})", self.cursor.x, self.cursor.y);
    }

    pub fn toggle_at_cursor(&mut self) {
        let (row, col) = self.cursor.position();
        self.grid_mut().toggle(row, col);
    }

    pub fn randomize(&mut self) {
        let Self { buffers, current, rng, .. } = self;
        buffers[*current].randomize(rng);
        self.generation = 0;
        log::debug!("randomized grid: {} live cells", self.population());
    }

    pub fn clear(&mut self) {
        self.grid_mut().clear();
        self.generation = 0;
        log::debug!("cleared grid");
    }

    /// Clears the grid and stamps `pattern` on it.
    pub fn apply_pattern(&mut self, pattern: Pattern) {
        patterns::apply_pattern(self.grid_mut(), pattern);
        self.generation = 0;
        log::debug!("applied pattern {:?}", pattern.name());
    }
}
