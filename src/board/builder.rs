//! Fluent builder for constructing checkers positions.
//!
//! Allows creating positions piece by piece rather than parsing layout strings.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, Color, Square};
//!
//! let game = BoardBuilder::new()
//!     .piece(Square(1, 0), Color::White)
//!     .piece(Square(2, 1), Color::Black)
//!     .king(Square(6, 7), Color::Black)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.board().piece_count(Color::Black), 2);
//! ```

use super::{Board, Color, GameError, GameState, Piece, Rules, Square};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
    rules: Rules,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            rules: Rules::default(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        builder.pieces = Square::all()
            .filter_map(|sq| board.piece_at(sq).map(|piece| (sq, piece)))
            .collect();
        builder
    }

    /// Place a man on the board, replacing anything already there.
    #[must_use]
    pub fn piece(self, square: Square, color: Color) -> Self {
        self.place(square, Piece::man(color))
    }

    /// Place a king on the board, replacing anything already there.
    #[must_use]
    pub fn king(self, square: Square, color: Color) -> Self {
        self.place(square, Piece::king(color))
    }

    #[must_use]
    pub fn place(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Build just the board, rejecting off-board and light squares.
    pub fn build_board(&self) -> Result<Board, GameError> {
        let mut board = Board::empty();
        for &(square, piece) in &self.pieces {
            board.spawn(square, piece)?;
        }
        Ok(board)
    }

    /// Build the game. The status is evaluated immediately, so a position
    /// where one side has no pieces is already won.
    pub fn build(self) -> Result<GameState, GameError> {
        let board = self.build_board()?;
        Ok(GameState::from_parts(board, self.side_to_move, self.rules))
    }
}
