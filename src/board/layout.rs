//! Single-line text layout of a position.
//!
//! Eight rows from row 8 down to row 1 separated by `/`, each eight cells of
//! `.`, `w`, `W`, `b` or `B`, then the side to move:
//!
//! ```text
//! b.b.b.b./.b.b.b.b/b.b.b.b./......../......../.w.w.w.w/w.w.w.w./.w.w.w.w w
//! ```

use std::str::FromStr;

use super::error::LayoutError;
use super::{Board, Color, GameState, Piece, Rules, Square, BOARD_WIDTH};

/// Layout of the opening position.
pub const START_LAYOUT: &str =
    "b.b.b.b./.b.b.b.b/b.b.b.b./......../......../.w.w.w.w/w.w.w.w./.w.w.w.w w";

impl GameState {
    /// Parse a layout string into a game played under `rules`.
    pub fn from_layout(layout: &str, rules: Rules) -> Result<Self, LayoutError> {
        let mut parts = layout.split_whitespace();
        let rows: Vec<&str> = parts.next().map(|p| p.split('/').collect()).unwrap_or_default();
        if rows.len() != BOARD_WIDTH {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (i, row) in rows.iter().enumerate() {
            let y = BOARD_WIDTH - 1 - i;
            let width = row.chars().count();
            if width != BOARD_WIDTH {
                return Err(LayoutError::WrongRowWidth {
                    row: y,
                    found: width,
                });
            }

            for (x, c) in row.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                let square = Square(x, y);
                board
                    .spawn(square, piece)
                    .map_err(|_| LayoutError::LightSquare { square })?;
            }
        }

        let side = parts.next().ok_or(LayoutError::MissingSideToMove)?;
        let mut side_chars = side.chars();
        let side_to_move = match (side_chars.next(), side_chars.next()) {
            (Some(c), None) => Color::from_char(c),
            _ => None,
        }
        .ok_or_else(|| LayoutError::InvalidSideToMove {
            found: side.to_string(),
        })?;

        let rest: Vec<&str> = parts.collect();
        if !rest.is_empty() {
            return Err(LayoutError::TrailingText {
                found: rest.join(" "),
            });
        }

        Ok(GameState::from_parts(board, side_to_move, rules))
    }

    #[must_use]
    pub fn to_layout(&self) -> String {
        let rows: Vec<String> = (0..BOARD_WIDTH)
            .rev()
            .map(|y| {
                (0..BOARD_WIDTH)
                    .map(|x| self.board.piece_at(Square(x, y)).map_or('.', Piece::to_char))
                    .collect()
            })
            .collect();
        format!("{} {}", rows.join("/"), self.side_to_move.to_char())
    }
}

impl FromStr for GameState {
    type Err = LayoutError;

    /// Parse a layout under standard rules.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::from_layout(s, Rules::default())
    }
}
