//! Rejections and the end of the game.

use crate::board::{BoardBuilder, Color, GameError, GameState, GameStatus, Square};

#[test]
fn test_out_of_bounds_selection() {
    let game = GameState::new();
    assert_eq!(
        game.legal_moves(Square(8, 0)),
        Err(GameError::OutOfBounds { x: 8, y: 0 })
    );
    assert_eq!(
        game.legal_moves(Square(0, 100)),
        Err(GameError::OutOfBounds { x: 0, y: 100 })
    );
}

#[test]
fn test_out_of_bounds_destination() {
    let mut game = GameState::new();
    let before = game.clone();
    assert_eq!(
        game.apply_move(Square(7, 2), Square(8, 3)),
        Err(GameError::OutOfBounds { x: 8, y: 3 })
    );
    assert_eq!(game, before);
}

#[test]
fn test_empty_cell_selection() {
    let game = GameState::new();
    assert_eq!(
        game.legal_moves(Square(2, 3)),
        Err(GameError::NoPieceSelected {
            square: Square(2, 3)
        })
    );
}

#[test]
fn test_opponent_piece_selection() {
    let game = GameState::new();
    assert_eq!(
        game.legal_moves(Square(0, 5)),
        Err(GameError::WrongTurn {
            expected: Color::White,
            found: Color::Black
        })
    );
}

#[test]
fn test_chained_jumps_are_not_played() {
    let mut game = BoardBuilder::new()
        .piece(Square(1, 0), Color::White)
        .piece(Square(2, 1), Color::Black)
        .piece(Square(4, 3), Color::Black)
        .build()
        .unwrap();

    assert_eq!(
        game.apply_move(Square(1, 0), Square(5, 4)),
        Err(GameError::IllegalMove {
            from: Square(1, 0),
            to: Square(5, 4)
        })
    );
    let outcome = game.apply_move(Square(1, 0), Square(3, 2)).unwrap();
    assert_eq!(outcome.next_player, Color::Black);
    assert_eq!(game.board().piece_count(Color::Black), 1);
}

#[test]
fn test_last_capture_wins() {
    let mut game = BoardBuilder::new()
        .piece(Square(1, 0), Color::White)
        .piece(Square(2, 1), Color::Black)
        .build()
        .unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);

    let outcome = game.apply_move(Square(1, 0), Square(3, 2)).unwrap();

    assert_eq!(outcome.status, GameStatus::Won(Color::White));
    assert_eq!(game.status(), GameStatus::Won(Color::White));
    assert!(game.is_over());
}

#[test]
fn test_black_can_win() {
    let mut game = BoardBuilder::new()
        .piece(Square(3, 2), Color::White)
        .piece(Square(4, 3), Color::Black)
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    let outcome = game.apply_move(Square(4, 3), Square(2, 1)).unwrap();
    assert_eq!(outcome.status, GameStatus::Won(Color::Black));
}

#[test]
fn test_no_moves_after_the_game_ends() {
    let mut game = BoardBuilder::new()
        .piece(Square(1, 0), Color::White)
        .piece(Square(2, 1), Color::Black)
        .build()
        .unwrap();
    game.apply_move(Square(1, 0), Square(3, 2)).unwrap();
    let over = GameError::GameOver {
        winner: Color::White,
    };

    assert_eq!(game.legal_moves(Square(3, 2)), Err(over.clone()));
    assert_eq!(game.apply_move(Square(3, 2), Square(4, 3)), Err(over));
    assert!(game.all_legal_moves().is_empty());
}

#[test]
fn test_empty_board_is_already_decided() {
    let game = BoardBuilder::new().build().unwrap();
    assert_eq!(game.status(), GameStatus::Won(Color::Black));
}

#[test]
fn test_blocked_side_keeps_the_game_running() {
    // White cannot move but still has a piece.
    let game = BoardBuilder::new()
        .piece(Square(0, 7), Color::White)
        .piece(Square(3, 6), Color::Black)
        .build()
        .unwrap();

    assert!(game.all_legal_moves().is_empty());
    assert_eq!(game.status(), GameStatus::InProgress);
}
