pub mod api;
mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Grid, get_available_moves};
pub use bot_controller::{
    BotType, SearchReport, best_move, calculate_move, leaf_score, pick_random_move, score_moves,
    search,
};
pub use game_state::{GameState, ScopedMove};
pub use session::TicTacToeSession;
pub use types::{Cell, Move, MoveError, Outcome, Side, WinningLine};
pub use win_detector::{evaluate, evaluate_grid, winning_line};
