//! Forward Game of Life simulator
//!
//! This library evolves a square Conway's Game of Life grid with a permanently
//! dead border a fixed number of generations, starting from a flat bit-string
//! seed and serializing the final state back to the same encoding.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::SimulationError;
pub use game_of_life::{Grid, Simulator};

/// Main entry point: run one complete simulation from a seed bit string
pub fn simulate(side: usize, steps: usize, seed: &str) -> Result<String, SimulationError> {
    let grid = Grid::from_seed(seed, side)?;
    let simulator = Simulator::new(steps);
    Ok(simulator.run(grid)?.serialize())
}
