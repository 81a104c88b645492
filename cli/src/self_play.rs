use std::fmt;

use tictactoe_engine::tictactoe::{BotType, Outcome, Side, TicTacToeSession};
use tictactoe_engine::{SessionRng, log};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub first_wins: u32,
    pub second_wins: u32,
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Side::First) => self.first_wins += 1,
            Outcome::Win(Side::Second) => self.second_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Running => {}
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.first_wins, self.second_wins, self.draws
        )
    }
}

/// First always plays optimally; Second plays optimally or at random.
pub fn run(games: u32, random_second: bool, rng: SessionRng) -> Tally {
    let second = if random_second {
        BotType::Random
    } else {
        BotType::Minimax
    };
    let mut session = TicTacToeSession::new(second, rng);
    let mut tally = Tally::default();

    for game in 0..games {
        session.reset();
        while !session.status().is_terminal() {
            match session.state().current_side() {
                Side::First => session.auto_move(),
                Side::Second => session.engine_move(),
            };
        }
        log!("Game {} finished: {}", game + 1, session.status());
        tally.record(session.status());
    }

    tally
}
