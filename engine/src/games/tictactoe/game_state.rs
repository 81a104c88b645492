use std::fmt;
use std::ops::{Deref, DerefMut};

use super::board::{BOARD_SIZE, Grid, get_available_moves, is_grid_full, is_in_bounds};
use super::types::{Cell, Move, MoveError, Side};
use super::win_detector::evaluate;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    current_side: Side,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_side: Side::First,
        }
    }

    /// Builds a state from an arbitrary grid. The side to move is derived
    /// from the mark counts, which must differ by at most one in First's
    /// favour.
    pub fn from_grid(grid: Grid) -> Result<Self, String> {
        let (mut first, mut second) = (0usize, 0usize);
        for cell in grid.iter().flatten() {
            match cell {
                Cell::Mark(Side::First) => first += 1,
                Cell::Mark(Side::Second) => second += 1,
                Cell::Empty => {}
            }
        }

        if first < second || first - second > 1 {
            return Err(format!(
                "Invalid mark counts: {} first, {} second",
                first, second
            ));
        }

        let current_side = if first == second {
            Side::First
        } else {
            Side::Second
        };
        Ok(Self { grid, current_side })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_side(&self) -> Side {
        self.current_side
    }

    pub fn cell(&self, mv: Move) -> Option<Cell> {
        is_in_bounds(mv).then(|| self.grid[mv.row][mv.col])
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }

    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        if !is_in_bounds(mv) {
            return Err(MoveError::OutOfBounds(mv));
        }

        let outcome = evaluate(self);
        if outcome.is_terminal() {
            return Err(MoveError::GameOver(outcome));
        }

        if !self.grid[mv.row][mv.col].is_empty() {
            return Err(MoveError::CellOccupied(mv));
        }

        self.grid[mv.row][mv.col] = Cell::Mark(self.current_side);
        self.current_side = self.current_side.opponent();
        Ok(())
    }

    /// Reverts `mv`, handing the turn back to whoever marked the cell.
    /// Empty or out-of-bounds cells are left alone.
    pub fn undo(&mut self, mv: Move) {
        if let Some(Cell::Mark(side)) = self.cell(mv) {
            self.grid[mv.row][mv.col] = Cell::Empty;
            self.current_side = side;
        }
    }

    /// Applies `mv` for the lifetime of the returned guard.
    pub fn scoped_apply(&mut self, mv: Move) -> Result<ScopedMove<'_>, MoveError> {
        self.apply(mv)?;
        Ok(ScopedMove { state: self, mv })
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        get_available_moves(&self.grid)
    }

    pub fn is_full(&self) -> bool {
        is_grid_full(&self.grid)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2")?;
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "{}", row)?;
            for cell in cells {
                match cell {
                    Cell::Empty => write!(f, " .")?,
                    Cell::Mark(side) => write!(f, " {}", side)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A move that is undone when the guard drops.
pub struct ScopedMove<'a> {
    state: &'a mut GameState,
    mv: Move,
}

impl ScopedMove<'_> {
    pub fn applied_move(&self) -> Move {
        self.mv
    }
}

impl Deref for ScopedMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        &*self.state
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        &mut *self.state
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.state.undo(self.mv);
    }
}

/// Parses three rows of `X`, `O` and `.` into a state.
#[cfg(test)]
pub(crate) fn state_from_rows(rows: [&str; BOARD_SIZE]) -> GameState {
    let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            grid[row][col] = match ch {
                'X' => Cell::Mark(Side::First),
                'O' => Cell::Mark(Side::Second),
                _ => Cell::Empty,
            };
        }
    }
    GameState::from_grid(grid).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::tictactoe::Outcome;

    #[test]
    fn test_new_is_empty_and_first_to_move() {
        let state = GameState::new();
        assert_eq!(state.current_side(), Side::First);
        assert_eq!(state.occupied_count(), 0);
        assert_eq!(state.legal_moves().len(), 9);
        assert!(!state.is_full());
    }

    #[test]
    fn test_apply_marks_and_flips_side() {
        let mut state = GameState::new();
        state.apply(Move::new(1, 1)).unwrap();
        assert_eq!(state.cell(Move::new(1, 1)), Some(Cell::Mark(Side::First)));
        assert_eq!(state.current_side(), Side::Second);

        state.apply(Move::new(0, 0)).unwrap();
        assert_eq!(state.cell(Move::new(0, 0)), Some(Cell::Mark(Side::Second)));
        assert_eq!(state.current_side(), Side::First);
    }

    #[test]
    fn test_apply_rejects_occupied_cell() {
        let mut state = GameState::new();
        state.apply(Move::new(0, 0)).unwrap();
        let before = state.clone();

        assert_eq!(
            state.apply(Move::new(0, 0)),
            Err(MoveError::CellOccupied(Move::new(0, 0)))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_rejects_out_of_bounds() {
        let mut state = GameState::new();
        assert_eq!(
            state.apply(Move::new(3, 0)),
            Err(MoveError::OutOfBounds(Move::new(3, 0)))
        );
        assert_eq!(state.cell(Move::new(0, 3)), None);
    }

    #[test]
    fn test_apply_rejects_after_game_over() {
        let mut state = state_from_rows(["XXX", "OO.", "..."]);
        assert_eq!(
            state.apply(Move::new(1, 2)),
            Err(MoveError::GameOver(Outcome::Win(Side::First)))
        );
    }

    #[test]
    fn test_apply_then_undo_restores_state() {
        let mut state = state_from_rows(["X..", ".O.", "..."]);
        let before = state.clone();

        state.apply(Move::new(2, 2)).unwrap();
        assert_ne!(state, before);
        state.undo(Move::new(2, 2));
        assert_eq!(state, before);
    }

    #[test]
    fn test_undo_on_empty_cell_is_ignored() {
        let mut state = state_from_rows(["X..", "...", "..."]);
        let before = state.clone();
        state.undo(Move::new(2, 2));
        state.undo(Move::new(5, 5));
        assert_eq!(state, before);
    }

    #[test]
    fn test_scoped_apply_reverts_on_drop() {
        let mut state = GameState::new();
        {
            let mut first = state.scoped_apply(Move::new(0, 0)).unwrap();
            assert_eq!(first.current_side(), Side::Second);
            let second = first.scoped_apply(Move::new(2, 2)).unwrap();
            assert_eq!(second.occupied_count(), 2);
            assert_eq!(second.applied_move(), Move::new(2, 2));
        }
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn test_legal_moves_are_row_major() {
        let state = state_from_rows(["X.O", ".X.", "O.."]);
        assert_eq!(
            state.legal_moves(),
            vec![
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_is_full() {
        let state = state_from_rows(["XOX", "XOO", "OXX"]);
        assert!(state.is_full());
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_from_grid_rejects_bad_counts() {
        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        grid[0][0] = Cell::Mark(Side::Second);
        assert!(GameState::from_grid(grid).is_err());

        grid[0][0] = Cell::Mark(Side::First);
        grid[0][1] = Cell::Mark(Side::First);
        assert!(GameState::from_grid(grid).is_err());
    }

    #[test]
    fn test_side_parity_holds_through_random_games() {
        let mut rng = SessionRng::new(42);
        for _ in 0..50 {
            let mut state = GameState::new();
            while !evaluate(&state).is_terminal() {
                let moves = state.legal_moves();
                assert!(!moves.is_empty());
                let mv = *rng.choose(&moves).unwrap();
                state.apply(mv).unwrap();

                let even = state.occupied_count() % 2 == 0;
                assert_eq!(state.current_side() == Side::First, even);
            }
        }
    }

    #[test]
    fn test_display_renders_grid() {
        let state = state_from_rows(["X..", ".O.", "..X"]);
        assert_eq!(state.to_string(), "  0 1 2\n0 X . .\n1 . O .\n2 . . X\n");
    }
}
