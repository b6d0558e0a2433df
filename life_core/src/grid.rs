// grid.rs - Cell grid and the generation rule for Conway's Game of Life

use rand::Rng;

use crate::error::GridError;

/// Relative positions of the Moore neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn flipped(self) -> Self {
        match self {
            Cell::Dead  => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    /// Next state of a cell from its current state and live-neighbor count.
    pub fn next(self, live_neighbors: u8) -> Self {
        match (self, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,  // Survival
            (Cell::Dead, 3)                     => Cell::Alive,  // Birth
            _                                   => Cell::Dead,   // Death or stays dead
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Fixed-size `rows x cols` grid stored row-major in one buffer.
///
/// Coordinates are always `(row, col)`. Cells outside the grid do not
/// exist: the edges are hard walls, not a torus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows  : usize,
    cols  : usize,
    cells : Vec<Cell>,
}

impl Grid {
    /// All-dead grid. Both dimensions must be non-zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Builds a grid from rows of `0`/`1` style booleans. Handy for fixtures.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut grid = Self::new(rows.len(), cols)?;
        for (row, values) in rows.iter().enumerate() {
            for (col, &alive) in values.as_ref().iter().take(cols).enumerate() {
                grid.set(row, col, Cell::from(alive));
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn same_shape(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of bounds");
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Flips exactly one cell between dead and alive.
    pub fn toggle(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].flipped();
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Sets every cell alive or dead with even odds.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = Cell::from(rng.gen_bool(0.5));
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Rows top to bottom, each as a slice of `cols` cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Live cells among the eight neighbors; anything past the edge counts as dead.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                continue;
            };
            if nr < self.rows && nc < self.cols && self.get(nr, nc).is_alive() {
                count += 1;
            }
        }
        count
    }
}

/// Computes the next generation of `current` into `next`.
///
/// `current` is only read, so every neighbor count sees the same generation.
/// Panics if the two grids differ in shape.
pub fn advance_into(current: &Grid, next: &mut Grid) {
    assert!(
        current.same_shape(next),
        "generation buffers differ in shape: {}x{} vs {}x{}",
        current.rows, current.cols, next.rows, next.cols
    );
    for row in 0..current.rows {
        for col in 0..current.cols {
            let state = current.get(row, col).next(current.live_neighbors(row, col));
            next.set(row, col, state);
        }
    }
}

/// Returns the next generation of `current` as a fresh grid.
pub fn advance(current: &Grid) -> Grid {
    let mut next = Grid {
        rows: current.rows,
        cols: current.cols,
        cells: vec![Cell::Dead; current.cells.len()],
    };
    advance_into(current, &mut next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_strategy() -> impl Strategy<Value = Grid> {
        (1usize..12, 1usize..12).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(any::<bool>(), rows * cols).prop_map(move |bits| {
                let mut grid = Grid::new(rows, cols).unwrap();
                for (i, alive) in bits.into_iter().enumerate() {
                    grid.set(i / cols, i % cols, Cell::from(alive));
                }
                grid
            })
        })
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(Grid::new(0, 4), Err(GridError::EmptyDimensions { rows: 0, cols: 4 }));
        assert_eq!(Grid::new(4, 0), Err(GridError::EmptyDimensions { rows: 4, cols: 0 }));
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn live_cell_survives_only_with_two_or_three_neighbors() {
        for n in 0..=8u8 {
            let expected = if n == 2 || n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(Cell::Alive.next(n), expected, "alive with {n} neighbors");
        }
    }

    #[test]
    fn dead_cell_is_born_only_with_three_neighbors() {
        for n in 0..=8u8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(Cell::Dead.next(n), expected, "dead with {n} neighbors");
        }
    }

    #[test]
    fn corner_cell_only_reaches_three_neighbors() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(0, 0, Cell::Alive);

        let touched: Vec<(usize, usize)> = (0..4)
            .flat_map(|r| (0..4).map(move |c| (r, c)))
            .filter(|&(r, c)| grid.live_neighbors(r, c) > 0)
            .collect();
        assert_eq!(touched, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edges_do_not_wrap() {
        // A full column on the left edge would feed the right edge on a torus.
        let mut grid = Grid::new(3, 5).unwrap();
        for row in 0..3 {
            grid.set(row, 0, Cell::Alive);
        }
        for row in 0..3 {
            assert_eq!(grid.live_neighbors(row, 4), 0);
        }
    }

    #[test]
    fn horizontal_blinker_turns_vertical() {
        let grid = Grid::from_rows(&[
            [false, false, false],
            [true,  true,  true ],
            [false, false, false],
        ])
        .unwrap();

        let expected = Grid::from_rows(&[
            [false, true, false],
            [false, true, false],
            [false, true, false],
        ])
        .unwrap();

        assert_eq!(advance(&grid), expected);
    }

    #[test]
    fn block_is_still_life() {
        let grid = Grid::from_rows(&[
            [false, false, false, false],
            [false, true,  true,  false],
            [false, true,  true,  false],
            [false, false, false, false],
        ])
        .unwrap();
        assert_eq!(advance(&grid), grid);
    }

    #[test]
    fn toggle_twice_restores_cell() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.toggle(5, 5);
        assert_eq!(grid.get(5, 5), Cell::Alive);
        grid.toggle(5, 5);
        assert_eq!(grid.get(5, 5), Cell::Dead);
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid = Grid::new(6, 7).unwrap();
        grid.randomize(&mut StdRng::seed_from_u64(7));
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn randomize_is_roughly_even() {
        let mut grid = Grid::new(100, 100).unwrap();
        grid.randomize(&mut StdRng::seed_from_u64(0xC0FFEE));
        let alive = grid.population();
        assert!((4000..6000).contains(&alive), "population {alive} is far from half");
    }

    #[test]
    fn randomize_is_reproducible_with_a_seed() {
        let mut a = Grid::new(20, 20).unwrap();
        let mut b = Grid::new(20, 20).unwrap();
        a.randomize(&mut StdRng::seed_from_u64(42));
        b.randomize(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "differ in shape")]
    fn advance_into_rejects_mismatched_buffers() {
        let current = Grid::new(3, 3).unwrap();
        let mut next = Grid::new(3, 4).unwrap();
        advance_into(&current, &mut next);
    }

    #[test]
    fn iter_rows_yields_row_slices() {
        let grid = Grid::from_rows(&[[true, false], [false, true], [true, true]]).unwrap();
        let rows: Vec<usize> = grid.iter_rows().map(|r| r.iter().filter(|c| c.is_alive()).count()).collect();
        assert_eq!(rows, vec![1, 1, 2]);
    }

    proptest! {
        #[test]
        fn advance_is_pure_and_deterministic(grid in grid_strategy()) {
            let before = grid.clone();
            let first = advance(&grid);
            let second = advance(&grid);
            prop_assert_eq!(&grid, &before);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn advance_matches_the_rule_per_cell(grid in grid_strategy()) {
            let next = advance(&grid);
            prop_assert!(next.same_shape(&grid));
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    let n = grid.live_neighbors(row, col);
                    let alive = grid.get(row, col).is_alive();
                    let expected = (alive && (n == 2 || n == 3)) || (!alive && n == 3);
                    prop_assert_eq!(next.get(row, col).is_alive(), expected);
                }
            }
        }

        #[test]
        fn advance_into_overwrites_stale_next(grid in grid_strategy(), seed in any::<u64>()) {
            let mut next = Grid::new(grid.rows(), grid.cols()).unwrap();
            next.randomize(&mut StdRng::seed_from_u64(seed));
            advance_into(&grid, &mut next);
            prop_assert_eq!(next, advance(&grid));
        }
    }
}
