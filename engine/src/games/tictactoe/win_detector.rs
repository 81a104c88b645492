use super::board::{Grid, is_grid_full};
use super::game_state::GameState;
use super::types::{Cell, Move, Outcome, WinningLine};

// Scan order matters when a corrupted grid holds more than one winning
// line: rows, then columns, then the main and anti diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn evaluate(state: &GameState) -> Outcome {
    evaluate_grid(state.grid())
}

pub fn evaluate_grid(grid: &Grid) -> Outcome {
    if let Some(line) = find_winning_line(grid) {
        return Outcome::Win(line.side);
    }

    if is_grid_full(grid) {
        Outcome::Draw
    } else {
        Outcome::Running
    }
}

pub fn winning_line(state: &GameState) -> Option<WinningLine> {
    find_winning_line(state.grid())
}

fn find_winning_line(grid: &Grid) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.map(|(row, col)| grid[row][col]);
        match a {
            Cell::Mark(side) if a == b && b == c => Some(WinningLine::new(
                side,
                line.map(|(row, col)| Move::new(row, col)),
            )),
            _ => None,
        }
    })
}
