//! Error types for board and game operations.

use std::fmt;

use super::{Color, Square};

/// Rejections raised by the engine.
///
/// Every rejection leaves the board and game state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinates outside `[0, 8)`
    OutOfBounds { x: usize, y: usize },
    /// Pieces may only stand on dark cells
    LightSquare { square: Square },
    /// The selected cell holds no live piece
    NoPieceSelected { square: Square },
    /// The selected piece does not belong to the side to move
    WrongTurn { expected: Color, found: Color },
    /// The destination is not one of the piece's legal moves
    IllegalMove { from: Square, to: Square },
    /// The game has already been won
    GameOver { winner: Color },
    /// No more piece handles can be allocated on this board
    TooManyPieces,
}

impl GameError {
    pub(crate) fn out_of_bounds(square: Square) -> Self {
        GameError::OutOfBounds {
            x: square.0,
            y: square.1,
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { x, y } => {
                write!(f, "Cell ({x}, {y}) is off the board")
            }
            GameError::LightSquare { square } => {
                write!(f, "Square {square} is not a playable dark square")
            }
            GameError::NoPieceSelected { square } => {
                write!(f, "No piece on {square}")
            }
            GameError::WrongTurn { expected, found } => {
                write!(f, "It is {expected}'s turn, not {found}'s")
            }
            GameError::IllegalMove { from, to } => {
                write!(f, "Illegal move from {from} to {to}")
            }
            GameError::GameOver { winner } => {
                write!(f, "Game is over, {winner} won")
            }
            GameError::TooManyPieces => write!(f, "No piece handles left on this board"),
        }
    }
}

impl std::error::Error for GameError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { x: usize },
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { y: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::ColumnOutOfBounds { x } => {
                write!(f, "Column {x} out of bounds (must be 0-7)")
            }
            SquareError::RowOutOfBounds { y } => {
                write!(f, "Row {y} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string does not hold exactly two squares
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must name two squares, found {len} characters")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for layout string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Missing the side-to-move field
    MissingSideToMove,
    /// Wrong number of rows (must be 8)
    WrongRowCount { found: usize },
    /// A row does not hold exactly 8 cells
    WrongRowWidth { row: usize, found: usize },
    /// Invalid piece character
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// A piece was placed on a light square
    LightSquare { square: Square },
    /// Text follows the side to move
    TrailingText { found: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::MissingSideToMove => write!(f, "Layout is missing the side to move"),
            LayoutError::WrongRowCount { found } => {
                write!(f, "Layout must have 8 rows, found {found}")
            }
            LayoutError::WrongRowWidth { row, found } => {
                write!(f, "Row {} must have 8 cells, found {found}", row + 1)
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in layout")
            }
            LayoutError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            LayoutError::LightSquare { square } => {
                write!(f, "Piece on light square {square}")
            }
            LayoutError::TrailingText { found } => {
                write!(f, "Unexpected text '{found}' after the side to move")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = GameError::OutOfBounds { x: 8, y: 3 };
        assert!(err.to_string().contains("(8, 3)"));
    }

    #[test]
    fn test_wrong_turn_names_both_sides() {
        let err = GameError::WrongTurn {
            expected: Color::White,
            found: Color::Black,
        };
        let msg = err.to_string();
        assert!(msg.contains("white"));
        assert!(msg.contains("black"));
    }

    #[test]
    fn test_illegal_move_uses_notation() {
        let err = GameError::IllegalMove {
            from: Square(1, 0),
            to: Square(1, 2),
        };
        assert!(err.to_string().contains("b1"));
        assert!(err.to_string().contains("b3"));
    }

    #[test]
    fn test_square_error_messages() {
        assert!(SquareError::ColumnOutOfBounds { x: 9 }
            .to_string()
            .contains('9'));
        let err = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("'z9'"));
    }

    #[test]
    fn test_layout_error_row_is_one_based() {
        let err = LayoutError::WrongRowWidth { row: 0, found: 7 };
        assert!(err.to_string().contains("Row 1"));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&GameError::GameOver {
            winner: Color::Black,
        });
        assert_error(&MoveParseError::InvalidLength { len: 0 });
        assert_error(&LayoutError::MissingSideToMove);
    }
}
