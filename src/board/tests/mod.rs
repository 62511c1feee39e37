//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Destination sets for men, kings and hops
//! - `make_move.rs` - Applying moves: captures, promotion, turn order
//! - `edge_cases.rs` - Rejections and the end of the game
//! - `perft.rs` - Move path counts from known positions
//! - `proptest.rs` - Property-based tests over random playouts

mod edge_cases;
mod make_move;
mod perft;
