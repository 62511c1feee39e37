//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use checkers_engine::board::prelude::*;
//!
//! let game = GameState::new();
//! assert_eq!(game.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, Color, GameError, GameState, GameStatus, Move, MoveList, MoveOutcome,
    Piece, Rules, Square,
};
