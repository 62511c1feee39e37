//! Core checkers types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece`, `PieceId` and `Color` - pieces, their identity and sides
//! - `Square` - a board cell as (x, y)
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece, PieceId};
pub use square::{Square, BOARD_WIDTH};
