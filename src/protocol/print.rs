//! One-line response formatting.

use std::fmt::Write as _;

use crate::board::{Color, GameState, GameStatus, MoveList, MoveOutcome, Square};
use crate::session::ClickOutcome;

fn status_word(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

#[must_use]
pub fn format_move_list(moves: &MoveList) -> String {
    let mut sorted: Vec<_> = moves.iter().copied().collect();
    sorted.sort_by_key(|mv| (mv.from, mv.to));
    let mut line = String::from("moves");
    for mv in sorted {
        let _ = write!(line, " {mv}");
    }
    line
}

#[must_use]
pub fn format_destinations(from: Square, destinations: &[Square]) -> String {
    let mut line = format!("moves {from}");
    for sq in destinations {
        let _ = write!(line, " {sq}");
    }
    line
}

#[must_use]
pub fn format_outcome(outcome: &MoveOutcome) -> String {
    let mut line = format!("moved {}", outcome.mv);
    if let Some((square, _)) = outcome.captured {
        let _ = write!(line, " captured {square}");
    }
    if outcome.promoted {
        line.push_str(" crowned");
    }
    match outcome.status {
        GameStatus::Won(winner) => {
            let _ = write!(line, " winner {}", status_word(winner));
        }
        GameStatus::InProgress => {
            let _ = write!(line, " next {}", status_word(outcome.next_player));
        }
    }
    line
}

#[must_use]
pub fn format_click(outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Selected {
            square,
            destinations,
        } => {
            let mut line = format!("selected {square}");
            for sq in destinations {
                let _ = write!(line, " {sq}");
            }
            line
        }
        ClickOutcome::Deselected => "deselected".to_string(),
        ClickOutcome::Moved(moved) => format_outcome(moved),
        ClickOutcome::Ignored => "ignored".to_string(),
    }
}

#[must_use]
pub fn format_status(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won(winner) => format!("status won {}", status_word(winner)),
        GameStatus::InProgress => format!(
            "status in_progress turn {} white {} black {}",
            status_word(state.side_to_move()),
            state.board().piece_count(Color::White),
            state.board().piece_count(Color::Black)
        ),
    }
}

#[must_use]
pub fn format_error(error: &dyn std::error::Error) -> String {
    format!("error {error}")
}
