use super::types::{Cell, Move};

pub const BOARD_SIZE: usize = 3;

pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

pub fn get_available_moves(grid: &Grid) -> Vec<Move> {
    let mut moves = Vec::new();
    for (row, cells) in grid.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell.is_empty() {
                moves.push(Move::new(row, col));
            }
        }
    }
    moves
}

pub fn is_in_bounds(mv: Move) -> bool {
    mv.row < BOARD_SIZE && mv.col < BOARD_SIZE
}

pub fn is_grid_full(grid: &Grid) -> bool {
    grid.iter().all(|cells| cells.iter().all(|cell| !cell.is_empty()))
}
