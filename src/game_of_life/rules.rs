//! Update rule and generation stepping

use super::Grid;
use crate::error::SimulationError;
use itertools::iproduct;

/// Advances a grid through discrete generations
///
/// The rule is Conway's Game of Life with one restriction: every cell on the
/// outer ring is forced dead at the end of each step. A full pass writes into
/// a second buffer, then the buffers swap; updating a single buffer in place
/// would leak freshly written states into later neighbor counts within the
/// same round.
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    steps: usize,
}

impl Simulator {
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Decide a cell's next state from its current state and live-neighbor count
    pub fn should_be_alive(alive: bool, neighbors: u8) -> bool {
        match (alive, neighbors) {
            (true, 2) | (true, 3) | (false, 3) => true, // Survive or birth
            _ => false,                                 // Death
        }
    }

    /// Write one generation of `current` into `next`
    fn step_into(current: &Grid, next: &mut Grid) {
        for (row, col) in iproduct!(0..current.side, 0..current.side) {
            let idx = current.index(row, col);
            next.cells[idx] = if current.is_border(row, col) {
                false // Border always dead
            } else {
                Self::should_be_alive(current.cells[idx], current.neighbor_count(row, col))
            };
        }
    }

    /// Run the simulation to completion, consuming the initial grid
    ///
    /// Applies the update round exactly `steps` times. With zero steps the
    /// grid is returned unchanged, border liveness from the seed included.
    pub fn run(&self, grid: Grid) -> Result<Grid, SimulationError> {
        if self.steps == 0 {
            return Ok(grid);
        }

        let mut current = grid;
        let mut next = Grid::new(current.side)?;
        for _ in 0..self.steps {
            Self::step_into(&current, &mut next);
            std::mem::swap(&mut current, &mut next);
        }
        Ok(current)
    }

    /// Run the simulation, keeping a snapshot of every generation
    ///
    /// Returns `steps + 1` grids, from the initial state to the final one.
    pub fn evolution(&self, grid: Grid) -> Result<Vec<Grid>, SimulationError> {
        let mut path = Vec::with_capacity(self.steps + 1);
        let mut current = grid;
        let mut next = Grid::new(current.side)?;
        for _ in 0..self.steps {
            path.push(current.clone());
            Self::step_into(&current, &mut next);
            std::mem::swap(&mut current, &mut next);
        }
        path.push(current);
        Ok(path)
    }
}
