use crate::games::SessionRng;
use crate::{debug_log, log};
use super::bot_controller::{BotType, best_move, pick_random_move, score_moves};
use super::game_state::GameState;
use super::types::{Move, MoveError, Outcome, WinningLine};
use super::win_detector::{evaluate, winning_line};

/// Owns the live game and applies human, random and engine moves to it.
///
/// Every accepted move runs the same sequence: apply, evaluate, record the
/// status. Once the status is terminal all move requests are ignored until
/// [`TicTacToeSession::reset`].
pub struct TicTacToeSession {
    state: GameState,
    status: Outcome,
    last_move: Option<Move>,
    opponent: BotType,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(opponent: BotType, rng: SessionRng) -> Self {
        log!(
            "Starting tic-tac-toe session (opponent {:?}, seed {})",
            opponent,
            rng.seed()
        );
        Self {
            state: GameState::new(),
            status: Outcome::Running,
            last_move: None,
            opponent,
            rng,
        }
    }

    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.status = Outcome::Running;
        self.last_move = None;
        log!("Game reset");
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> Outcome {
        self.status
    }

    pub fn current_outcome(&self) -> Outcome {
        evaluate(&self.state)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.state.legal_moves()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.state)
    }

    pub fn opponent(&self) -> BotType {
        self.opponent
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Applies a human move; illegal requests are dropped.
    pub fn human_move(&mut self, row: usize, col: usize) -> Outcome {
        if let Err(e) = self.commit(Move::new(row, col)) {
            debug_log!("Ignoring human move: {}", e);
        }
        self.status
    }

    /// Human move followed by one engine reply, if the move was accepted
    /// and the game goes on.
    pub fn human_turn(&mut self, row: usize, col: usize) -> Outcome {
        match self.commit(Move::new(row, col)) {
            Ok(()) if !self.status.is_terminal() => self.engine_move(),
            Ok(()) => self.status,
            Err(e) => {
                debug_log!("Ignoring human move: {}", e);
                self.status
            }
        }
    }

    /// Plays one move in the configured opponent mode.
    pub fn engine_move(&mut self) -> Outcome {
        match self.opponent {
            BotType::Minimax => self.auto_move(),
            BotType::Random => self.random_move(),
        }
    }

    pub fn random_move(&mut self) -> Outcome {
        if let Some(mv) = pick_random_move(&self.state, &mut self.rng) {
            self.commit_engine_move(mv);
        }
        self.status
    }

    pub fn auto_move(&mut self) -> Outcome {
        if self.status.is_terminal() {
            return self.status;
        }
        if let Some(mv) = best_move(&mut self.state) {
            self.commit_engine_move(mv);
        }
        self.status
    }

    /// The move the engine would play now, without playing it.
    pub fn hint(&mut self) -> Option<Move> {
        if self.status.is_terminal() {
            return None;
        }
        best_move(&mut self.state)
    }

    pub fn scored_moves(&mut self) -> Vec<(Move, i32)> {
        score_moves(&mut self.state)
    }

    fn commit_engine_move(&mut self, mv: Move) {
        // Engine moves come from legal_moves() of a running game.
        if let Err(e) = self.commit(mv) {
            log!("Engine produced a rejected move {}: {}", mv, e);
        }
    }

    fn commit(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver(self.status));
        }

        let side = self.state.current_side();
        self.state.apply(mv)?;
        self.last_move = Some(mv);
        self.status = evaluate(&self.state);

        log!("{} played {}", side, mv);
        if self.status.is_terminal() {
            log!("Game over: {}", self.status);
        }
        Ok(())
    }
}
