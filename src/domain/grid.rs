use super::{Cell, EngineError};
use rand::Rng;
use rayon::prelude::*;
use tracing::trace;

/// Chance of a cell starting alive when the grid is reseeded.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.15;

/// One complete generation: alive state plus the age of every cell,
/// stored row-major and indexed in parallel.
#[derive(Clone)]
struct Generation {
    cells: Vec<Cell>,
    ages: Vec<u8>,
}

impl Generation {
    fn empty(len: usize) -> Self {
        Self {
            cells: vec![Cell::Dead; len],
            ages: vec![0; len],
        }
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.ages.fill(0);
    }
}

/// GridEngine owns the authoritative simulation state on a toroidal grid.
///
/// Two generations are kept side by side. `step` reads the front one, writes
/// the back one and then swaps them, so a reader never sees a half-updated
/// grid and no memory is allocated per generation.
pub struct GridEngine {
    rows: usize,
    cols: usize,
    buffers: [Generation; 2],
    front: usize,
}

impl GridEngine {
    /// Create a new grid with all cells dead and all ages zero
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::EmptyGrid { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(EngineError::GridTooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            buffers: [Generation::empty(len), Generation::empty(len)],
            front: 0,
        })
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn current(&self) -> &Generation {
        &self.buffers[self.front]
    }

    fn current_mut(&mut self) -> &mut Generation {
        &mut self.buffers[self.front]
    }

    /// Front generation for reading, back generation for writing
    fn split_buffers(&mut self) -> (&Generation, &mut Generation) {
        let [a, b] = &mut self.buffers;
        if self.front == 0 { (&*a, b) } else { (&*b, a) }
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, EngineError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Whether the cell at (row, col) is alive
    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, EngineError> {
        let idx = self.index(row, col)?;
        Ok(self.current().cells[idx].is_alive())
    }

    /// Consecutive generations the cell at (row, col) has survived
    pub fn age_of(&self, row: usize, col: usize) -> Result<u8, EngineError> {
        let idx = self.index(row, col)?;
        Ok(self.current().ages[idx])
    }

    /// Count live neighbors with toroidal wrapping.
    ///
    /// Coordinates are wrapped first, so any input is accepted. On grids one
    /// row or one column wide the wrapped offsets land on the same physical
    /// cells more than once (the cell itself included) and each landing counts.
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        count_live_neighbors(&self.current().cells, self.rows, self.cols, row, col)
    }

    /// Advance exactly one generation (serial)
    pub fn step(&mut self) {
        let (rows, cols) = self.dimensions();
        let (current, next) = self.split_buffers();

        next.cells
            .chunks_mut(cols)
            .zip(next.ages.chunks_mut(cols))
            .enumerate()
            .for_each(|(row, (cells, ages))| evolve_row(current, rows, cols, row, cells, ages));

        self.front ^= 1;
        trace!(population = self.population(), "stepped generation");
    }

    /// Advance exactly one generation, computing rows in parallel with rayon.
    /// Produces the same result as [`GridEngine::step`].
    pub fn step_parallel(&mut self) {
        let (rows, cols) = self.dimensions();
        let (current, next) = self.split_buffers();

        next.cells
            .par_chunks_mut(cols)
            .zip(next.ages.par_chunks_mut(cols))
            .enumerate()
            .for_each(|(row, (cells, ages))| evolve_row(current, rows, cols, row, cells, ages));

        self.front ^= 1;
        trace!(population = self.population(), "stepped generation (parallel)");
    }

    /// Flip the cell at (row, col) and reset its age
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, EngineError> {
        let idx = self.index(row, col)?;
        let generation = self.current_mut();
        let cell = generation.cells[idx].toggle();
        generation.cells[idx] = cell;
        generation.ages[idx] = 0;
        Ok(cell)
    }

    /// Set the cell at (row, col) and reset its age
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), EngineError> {
        let idx = self.index(row, col)?;
        let generation = self.current_mut();
        generation.cells[idx] = Cell::from(alive);
        generation.ages[idx] = 0;
        Ok(())
    }

    /// Kill every cell and zero every age
    pub fn reset(&mut self) {
        self.buffers.iter_mut().for_each(Generation::clear);
    }

    /// Reseed with the thread-local generator
    pub fn randomize(&mut self, live_probability: f64) -> Result<(), EngineError> {
        self.randomize_with(&mut rand::rng(), live_probability)
    }

    /// Reseed every cell independently alive with `live_probability`.
    /// Probabilities outside [0, 1] are rejected and leave the grid untouched.
    pub fn randomize_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        live_probability: f64,
    ) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&live_probability) {
            return Err(EngineError::InvalidProbability(live_probability));
        }

        let generation = self.current_mut();
        generation
            .cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(live_probability)));
        generation.ages.fill(0);
        Ok(())
    }

    /// Count total alive cells
    pub fn population(&self) -> usize {
        self.current().cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells as (row, col, cell, age)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell, u8)> + '_ {
        let cols = self.cols;
        let generation = self.current();
        generation
            .cells
            .iter()
            .zip(&generation.ages)
            .enumerate()
            .map(move |(idx, (&cell, &age))| (idx / cols, idx % cols, cell, age))
    }
}

fn count_live_neighbors(cells: &[Cell], rows: usize, cols: usize, row: usize, col: usize) -> u8 {
    let (row, col) = (row % rows, col % cols);

    // Offsets are shifted by one so the wrap stays in unsigned arithmetic
    (0..3)
        .flat_map(|dr| (0..3).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 1 || dc != 1)
        .map(|(dr, dc)| {
            let r = (row + rows + dr - 1) % rows;
            let c = (col + cols + dc - 1) % cols;
            cells[r * cols + c]
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

fn evolve_row(
    current: &Generation,
    rows: usize,
    cols: usize,
    row: usize,
    cells: &mut [Cell],
    ages: &mut [u8],
) {
    for (col, (cell, age)) in cells.iter_mut().zip(ages.iter_mut()).enumerate() {
        let idx = row * cols + col;
        let neighbors = count_live_neighbors(&current.cells, rows, cols, row, col);
        (*cell, *age) = current.cells[idx].evolve_aged(current.ages[idx], neighbors);
    }
}
