use thiserror::Error;

use crate::board::GRID_SIZE;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("unknown difficulty level: {0}")]
    UnknownDifficulty(String),
    #[error("cell ({row}, {col}) is outside the {GRID_SIZE}x{GRID_SIZE} grid")]
    OutOfBounds { row: usize, col: usize },
}
