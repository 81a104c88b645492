use crate::config::OpponentKind;
use crate::debug_log;
use crate::games::SessionRng;
use super::game_state::GameState;
use super::types::{Move, Outcome, Side};
use super::win_detector::evaluate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotType {
    Random,
    Minimax,
}

impl From<OpponentKind> for BotType {
    fn from(kind: OpponentKind) -> Self {
        match kind {
            OpponentKind::Optimal => BotType::Minimax,
            OpponentKind::Random => BotType::Random,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: Move,
    pub score: i32,
    pub nodes: u64,
}

pub fn calculate_move(
    bot_type: BotType,
    state: &mut GameState,
    rng: &mut SessionRng,
) -> Option<Move> {
    match bot_type {
        BotType::Random => pick_random_move(state, rng),
        BotType::Minimax => best_move(state),
    }
}

/// Uniform choice among the legal moves; `None` once the game is over.
pub fn pick_random_move(state: &GameState, rng: &mut SessionRng) -> Option<Move> {
    if evaluate(state).is_terminal() {
        return None;
    }
    rng.choose(&state.legal_moves()).copied()
}

pub fn best_move(state: &mut GameState) -> Option<Move> {
    search(state).map(|report| report.best_move)
}

/// Full-depth minimax for the side to move.
///
/// Every candidate is scored from the mover's point of view: +1 for a
/// forced win, -1 for a forced loss, 0 for a draw. Wins are not discounted
/// by depth. The first move in row-major order with the highest score is
/// chosen. `state` is restored before returning.
pub fn search(state: &mut GameState) -> Option<SearchReport> {
    let mut nodes = 0u64;
    let scored = score_root_moves(state, &mut nodes);

    let mut best: Option<(Move, i32)> = None;
    for (mv, score) in scored {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    let (best_move, score) = best?;
    debug_log!(
        "Minimax for {} chose {} with score {} after {} nodes",
        state.current_side(),
        best_move,
        score,
        nodes
    );
    Some(SearchReport {
        best_move,
        score,
        nodes,
    })
}

/// Minimax value of every legal move, in row-major order.
pub fn score_moves(state: &mut GameState) -> Vec<(Move, i32)> {
    let mut nodes = 0u64;
    score_root_moves(state, &mut nodes)
}

fn score_root_moves(state: &mut GameState, nodes: &mut u64) -> Vec<(Move, i32)> {
    if evaluate(state).is_terminal() {
        return Vec::new();
    }

    let maximizing = state.current_side();
    let mut scored = Vec::new();
    for mv in state.legal_moves() {
        let Ok(mut child) = state.scoped_apply(mv) else {
            continue;
        };
        let score = minimax(&mut child, maximizing, nodes);
        scored.push((mv, score));
    }
    scored
}

fn minimax(state: &mut GameState, maximizing: Side, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if let Some(score) = leaf_score(evaluate(state), maximizing) {
        return score;
    }

    let is_maximizing = state.current_side() == maximizing;
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

    for mv in state.legal_moves() {
        let Ok(mut child) = state.scoped_apply(mv) else {
            continue;
        };
        let score = minimax(&mut child, maximizing, nodes);
        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}

/// Score of a terminal outcome for `maximizing`; `None` while running.
pub fn leaf_score(outcome: Outcome, maximizing: Side) -> Option<i32> {
    match outcome {
        Outcome::Running => None,
        Outcome::Draw => Some(0),
        Outcome::Win(side) if side == maximizing => Some(1),
        Outcome::Win(_) => Some(-1),
    }
}
