//! Value-in, value-out entry points for front ends that keep their own
//! copy of the game instead of a [`TicTacToeSession`](super::TicTacToeSession).
//!
//! Illegal or out-of-turn requests return the state unchanged together with
//! its current outcome.

use crate::debug_log;
use crate::games::SessionRng;
use super::bot_controller::{best_move, pick_random_move};
use super::game_state::GameState;
use super::types::{Move, Outcome};
use super::win_detector::evaluate;

pub fn new_game() -> GameState {
    GameState::new()
}

pub fn human_move(mut state: GameState, row: usize, col: usize) -> (GameState, Outcome) {
    if let Err(e) = state.apply(Move::new(row, col)) {
        debug_log!("Ignoring human move: {}", e);
    }
    let outcome = evaluate(&state);
    (state, outcome)
}

pub fn random_move(mut state: GameState, rng: &mut SessionRng) -> (GameState, Outcome) {
    if let Some(mv) = pick_random_move(&state, rng)
        && let Err(e) = state.apply(mv)
    {
        debug_log!("Random move {} rejected: {}", mv, e);
    }
    let outcome = evaluate(&state);
    (state, outcome)
}

pub fn auto_move(mut state: GameState) -> (GameState, Outcome) {
    if let Some(mv) = best_move(&mut state)
        && let Err(e) = state.apply(mv)
    {
        debug_log!("Engine move {} rejected: {}", mv, e);
    }
    let outcome = evaluate(&state);
    (state, outcome)
}

pub fn current_outcome(state: &GameState) -> Outcome {
    evaluate(state)
}

pub fn legal_moves(state: &GameState) -> Vec<Move> {
    state.legal_moves()
}
