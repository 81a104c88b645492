use std::io::{self, BufRead, Write};

use tictactoe_engine::config::GameConfig;
use tictactoe_engine::tictactoe::{BotType, Move, Outcome, Side, TicTacToeSession};
use tictactoe_engine::{SessionRng, debug_log};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Place(usize, usize),
    Hint,
    New,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        ["quit"] | ["q"] | ["exit"] => Command::Quit,
        ["new"] | ["n"] => Command::New,
        ["hint"] | ["h"] => Command::Hint,
        [row, col] => match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => Command::Place(row, col),
            _ => Command::Unknown(line.trim().to_string()),
        },
        _ => Command::Unknown(line.trim().to_string()),
    }
}

pub fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win(Side::First) => "Cross Won!",
        Outcome::Win(Side::Second) => "Circle Won!",
        Outcome::Draw => "Tie!",
        Outcome::Running => "",
    }
}

pub fn run(config: &GameConfig, rng: SessionRng) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(config, rng, stdin.lock(), stdout.lock())
}

fn start_game(session: &mut TicTacToeSession, human_side: Side) {
    if human_side == Side::Second {
        session.engine_move();
    }
}

fn print_state<W: Write>(session: &TicTacToeSession, output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    write!(output, "{}", session.state())?;
    let status = session.status();
    if status.is_terminal() {
        writeln!(output, "{}", outcome_label(status))?;
        if let Some(line) = session.winning_line() {
            writeln!(output, "Line from {} to {}.", line.start(), line.end())?;
        }
        writeln!(output, "Type 'new' to play again or 'quit' to leave.")?;
    } else {
        writeln!(
            output,
            "{} to move. Enter 'ROW COL', 'hint', 'new' or 'quit'.",
            session.state().current_side()
        )?;
    }
    Ok(())
}

fn run_with<R: BufRead, W: Write>(
    config: &GameConfig,
    rng: SessionRng,
    input: R,
    mut output: W,
) -> io::Result<()> {
    let mut session = TicTacToeSession::new(BotType::from(config.opponent), rng);
    writeln!(
        output,
        "You play {} against the {:?} engine (seed {}).",
        config.human_side,
        session.opponent(),
        session.seed()
    )?;
    start_game(&mut session, config.human_side);
    print_state(&session, &mut output)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Quit => break,
            Command::New => {
                session.reset();
                start_game(&mut session, config.human_side);
            }
            Command::Hint => match session.hint() {
                Some(mv) => {
                    writeln!(output, "Engine suggests {} {}", mv.row, mv.col)?;
                    let scores: Vec<String> = session
                        .scored_moves()
                        .iter()
                        .map(|(mv, score)| format!("{}={}", mv, score))
                        .collect();
                    writeln!(output, "Scores: {}", scores.join(" "))?;
                }
                None => writeln!(output, "No moves left.")?,
            },
            Command::Place(row, col) => {
                if session.status().is_terminal() {
                    writeln!(output, "The game is over.")?;
                } else if !session.legal_moves().contains(&Move::new(row, col)) {
                    debug_log!("Rejected input {} {}", row, col);
                    writeln!(output, "Cell {} {} is not available.", row, col)?;
                } else {
                    session.human_turn(row, col);
                }
            }
            Command::Unknown(text) => {
                writeln!(output, "Unrecognised input '{}'.", text)?;
                continue;
            }
        }
        print_state(&session, &mut output)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(config: &GameConfig, script: &str) -> String {
        let mut output = Vec::new();
        run_with(config, SessionRng::new(1), Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("1 2"), Command::Place(1, 2));
        assert_eq!(parse_command("  0   0 "), Command::Place(0, 0));
        assert_eq!(parse_command("hint"), Command::Hint);
        assert_eq!(parse_command("new"), Command::New);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("a b"), Command::Unknown("a b".to_string()));
        assert_eq!(parse_command("1 2 3"), Command::Unknown("1 2 3".to_string()));
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(outcome_label(Outcome::Win(Side::First)), "Cross Won!");
        assert_eq!(outcome_label(Outcome::Win(Side::Second)), "Circle Won!");
        assert_eq!(outcome_label(Outcome::Draw), "Tie!");
    }

    #[test]
    fn test_engine_replies_to_corner_with_centre() {
        let output = run_script(&GameConfig::default(), "0 0\nquit\n");
        assert!(output.contains("0 X . .\n1 . O .\n2 . . .\n"));
    }

    #[test]
    fn test_occupied_cell_is_reported() {
        let output = run_script(&GameConfig::default(), "1 1\n1 1\nquit\n");
        assert!(output.contains("Cell 1 1 is not available."));
    }

    #[test]
    fn test_engine_opens_when_human_is_second() {
        let config = GameConfig {
            human_side: Side::Second,
            ..GameConfig::default()
        };
        let output = run_script(&config, "quit\n");
        assert!(output.contains("You play O against the Minimax engine (seed 1)."));
        assert!(output.contains("0 X . .\n"));
    }

    #[test]
    fn test_human_cannot_beat_engine() {
        let output = run_script(
            &GameConfig::default(),
            "0 1\n1 0\n2 2\n0 2\n2 0\n2 1\n1 2\nquit\n",
        );
        assert!(!output.contains("Cross Won!"));
    }

    #[test]
    fn test_hint_lists_move_scores() {
        let output = run_script(&GameConfig::default(), "hint\nquit\n");
        assert!(output.contains("Engine suggests 0 0"));
        assert!(output.contains("Scores: (0, 0)=0 (0, 1)=0 (0, 2)=0 (1, 0)=0"));
    }

    #[test]
    fn test_finished_game_shows_winning_line() {
        let mut session = TicTacToeSession::new(BotType::Minimax, SessionRng::new(1));
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.human_move(row, col);
        }
        let mut output = Vec::new();
        print_state(&session, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Cross Won!\nLine from (0, 0) to (0, 2).\n"));
    }

    #[test]
    fn test_new_game_clears_board() {
        let output = run_script(&GameConfig::default(), "2 2\nnew\nquit\n");
        assert!(output.ends_with(
            "0 . . .\n1 . . .\n2 . . .\nX to move. Enter 'ROW COL', 'hint', 'new' or 'quit'.\n"
        ));
    }
}
