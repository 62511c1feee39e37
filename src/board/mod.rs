//! Checkers board representation and game logic.
//!
//! Pieces live in an arena indexed by [`PieceId`]; each cell of the 8x8 grid
//! points at at most one live piece and every live piece points back at its
//! cell. [`GameState`] adds the side to move and the end condition on top of
//! the [`Board`].
//!
//! # Example
//! ```
//! use checkers_engine::board::{GameState, Square};
//!
//! let mut game = GameState::new();
//! let moves = game.legal_moves(Square(1, 2)).unwrap();
//! assert_eq!(moves.len(), 2);
//! game.apply_move(Square(1, 2), Square(2, 3)).unwrap();
//! ```

mod builder;
mod error;
mod game;
mod layout;
mod make_move;
mod movegen;
pub mod prelude;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{GameError, LayoutError, MoveParseError, SquareError};
pub use game::{GameState, GameStatus, MoveOutcome};
pub use layout::START_LAYOUT;
pub use make_move::MoveEffect;
pub use rules::Rules;
pub use state::{Board, PieceRecord};
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, PieceId, Square, BOARD_WIDTH};
