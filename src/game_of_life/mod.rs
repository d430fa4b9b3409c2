//! Game of Life core functionality

pub mod grid;
pub mod rules;
pub mod io;

pub use grid::Grid;
pub use rules::Simulator;
pub use io::{load_seed_from_file, save_output_to_file, create_example_seeds};
