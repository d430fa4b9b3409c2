//! Grid representation and utilities for Game of Life

use crate::error::SimulationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a square Game of Life grid
///
/// Cells are stored row-major in a flat buffer; cell `(row, col)` lives at
/// index `row * side + col`, the same encoding the seed string uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub side: usize,
    pub cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(side: usize) -> Result<Self, SimulationError> {
        let cells = Self::allocate(Self::area(side)?)?;
        Ok(Self { side, cells })
    }

    /// Create a grid from a flat seed string of '0'/'1' characters
    ///
    /// The seed must be exactly `side * side` characters long; the character
    /// at index `i * side + j` becomes cell `(i, j)`. The seed may set border
    /// cells alive, they only die once the first update runs.
    pub fn from_seed(seed: &str, side: usize) -> Result<Self, SimulationError> {
        let expected = Self::area(side)?;
        if seed.len() != expected {
            return Err(SimulationError::SeedLengthMismatch {
                side,
                expected,
                actual: seed.len(),
            });
        }

        let mut grid = Self::new(side)?;
        for (position, character) in seed.char_indices() {
            match character {
                '0' => {}
                '1' => grid.cells[position] = true,
                _ => {
                    return Err(SimulationError::InvalidSeedCharacter {
                        character,
                        position,
                    })
                }
            }
        }

        Ok(grid)
    }

    /// Number of cells in a `side`-by-`side` grid
    fn area(side: usize) -> Result<usize, SimulationError> {
        side.checked_mul(side).ok_or_else(|| {
            SimulationError::InvalidArgument(format!(
                "grid side {side} overflows the addressable cell count"
            ))
        })
    }

    /// Allocate a zeroed cell buffer, surfacing allocation failure to the caller
    fn allocate(count: usize) -> Result<Vec<bool>, SimulationError> {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|source| SimulationError::AllocationFailure {
                cells: count,
                source,
            })?;
        cells.resize(count, false);
        Ok(cells)
    }

    /// Convert 2D coordinates to the flat buffer index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.side + col
    }

    /// Get cell value at coordinates
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.side && col < self.side {
            self.cells[self.index(row, col)]
        } else {
            false // Out of bounds cells are considered dead
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), SimulationError> {
        if row >= self.side || col >= self.side {
            return Err(SimulationError::InvalidArgument(format!(
                "coordinates ({}, {}) out of bounds for {}x{} grid",
                row, col, self.side, self.side
            )));
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Whether a cell lies on the outer ring
    #[inline]
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.side || col + 1 == self.side
    }

    /// Count living Moore neighbors of an interior cell
    ///
    /// Callers must only pass interior cells (`0 < row < side - 1` and
    /// `0 < col < side - 1`); the stepping loop special-cases the border
    /// before ever reaching this.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue; // Skip the cell itself
                }

                let r = (row as isize + dr) as usize;
                let c = (col as isize + dc) as usize;

                if self.cells[self.index(r, c)] {
                    count += 1;
                }
            }
        }

        count
    }

    /// Serialize the grid back to a flat '0'/'1' string, row-major
    pub fn serialize(&self) -> String {
        self.cells
            .iter()
            .map(|&cell| if cell { '1' } else { '0' })
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side {
            for col in 0..self.side {
                let symbol = if self.get(row, col) { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(grid.side, 3);
        assert_eq!(grid.cells.len(), 9);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_from_seed() {
        let grid = Grid::from_seed("010101010", 3).unwrap();
        assert_eq!(grid.side, 3);
        assert_eq!(grid.living_count(), 4);
        assert!(!grid.get(0, 0));
        assert!(grid.get(0, 1));
        assert!(grid.get(1, 0));
        assert!(grid.get(1, 2));
        assert!(grid.get(2, 1));
    }

    #[test]
    fn test_seed_length_mismatch() {
        let err = Grid::from_seed("01", 2).unwrap_err();
        match err {
            SimulationError::SeedLengthMismatch {
                side,
                expected,
                actual,
            } => {
                assert_eq!(side, 2);
                assert_eq!(expected, 4);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_seed_character() {
        let err = Grid::from_seed("01x1", 2).unwrap_err();
        match err {
            SimulationError::InvalidSeedCharacter {
                character,
                position,
            } => {
                assert_eq!(character, 'x');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_seed_may_set_border_alive() {
        let grid = Grid::from_seed("111111111", 3).unwrap();
        assert_eq!(grid.living_count(), 9);
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::from_seed("", 0).unwrap();
        assert_eq!(grid.side, 0);
        assert_eq!(grid.serialize(), "");
    }

    #[test]
    fn test_neighbor_counting() {
        // Ring of eight around a dead center
        let grid = Grid::from_seed("111101111", 3).unwrap();
        assert_eq!(grid.neighbor_count(1, 1), 8);

        let blinker = Grid::from_seed("0000000100001000010000000", 5).unwrap();
        assert_eq!(blinker.neighbor_count(2, 2), 2);
        assert_eq!(blinker.neighbor_count(2, 1), 3);
        assert_eq!(blinker.neighbor_count(1, 1), 2);
    }

    #[test]
    fn test_is_border() {
        let grid = Grid::new(4).unwrap();
        assert!(grid.is_border(0, 2));
        assert!(grid.is_border(3, 1));
        assert!(grid.is_border(2, 0));
        assert!(grid.is_border(1, 3));
        assert!(!grid.is_border(1, 1));
        assert!(!grid.is_border(2, 2));
    }

    #[test]
    fn test_serialize_round_trip() {
        let seed = "010101010";
        let grid = Grid::from_seed(seed, 3).unwrap();
        assert_eq!(grid.serialize(), seed);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_seed("0110", 2).unwrap();
        let rendered = grid.to_string();
        assert_eq!(rendered, "⬜⬛\n⬛⬜\n");
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(2).unwrap();
        assert!(grid.set(1, 1, true).is_ok());
        assert!(grid.get(1, 1));
        assert!(grid.set(2, 0, true).is_err());
        assert!(!grid.get(2, 0));
    }
}
