pub mod board;
pub mod difficulty;
pub mod error;
pub mod puzzle;
pub mod validation;

pub use board::{Cell, GRID_SIZE, Given, Grid, Symbol};
pub use difficulty::Difficulty;
pub use error::Error;
pub use puzzle::{build_grid, generate_givens, generate_givens_with, new_puzzle, toggle_cell};
pub use validation::{ValidationReport, filled_count, is_complete, validate};
