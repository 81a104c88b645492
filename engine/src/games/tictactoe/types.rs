use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[display("X")]
    First,
    #[display("O")]
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Mark(Side),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Mark(side) => Some(side),
        }
    }
}

/// A cell address. Ordering is row-major, which is also the order the
/// search visits candidate moves in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("({row}, {col})")]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Outcome {
    #[display("running")]
    Running,
    #[display("{_0} won")]
    Win(Side),
    #[display("draw")]
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Running
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(side),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub side: Side,
    pub cells: [Move; 3],
}

impl WinningLine {
    pub fn new(side: Side, cells: [Move; 3]) -> Self {
        Self { side, cells }
    }

    pub fn start(&self) -> Move {
        self.cells[0]
    }

    pub fn end(&self) -> Move {
        self.cells[2]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum MoveError {
    #[display("Move {_0} is outside the board")]
    OutOfBounds(Move),
    #[display("Cell {_0} is already marked")]
    CellOccupied(Move),
    #[display("Game is already over ({_0})")]
    GameOver(Outcome),
}

impl std::error::Error for MoveError {}
