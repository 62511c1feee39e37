#[macro_use]
mod logging;

pub mod board;
mod perft;
pub mod protocol;
pub mod session;
mod zobrist;

pub use board::{Board, Color, GameState, GameStatus, Move, Piece, Rules, Square};
pub use session::{ClickOutcome, Session};
