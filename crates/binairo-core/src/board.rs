use serde::{Deserialize, Serialize};

pub const GRID_SIZE: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    Black,
    White,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Given(Symbol),
    Player(Symbol),
    Empty,
}

impl Cell {
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Cell::Given(s) | Cell::Player(s) => Some(*s),
            Cell::Empty => None,
        }
    }

    pub fn is_given(&self) -> bool {
        matches!(self, Cell::Given(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

pub type Grid = [[Cell; GRID_SIZE]; GRID_SIZE];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Given {
    pub row: usize,
    pub col: usize,
    pub symbol: Symbol,
}
