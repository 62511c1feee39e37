//! Applying moves: captures, promotion and turn order.

use crate::board::{
    Board, BoardBuilder, Color, GameError, GameState, GameStatus, Move, Piece, Rules, Square,
};

fn total_pieces(game: &GameState) -> usize {
    game.board().piece_count(Color::White) + game.board().piece_count(Color::Black)
}

#[test]
fn test_step_keeps_piece_counts() {
    let mut game = GameState::new();
    let before = total_pieces(&game);

    let outcome = game.apply_move(Square(1, 2), Square(2, 3)).unwrap();

    assert_eq!(outcome.captured, None);
    assert!(!outcome.promoted);
    assert_eq!(outcome.next_player, Color::Black);
    assert_eq!(total_pieces(&game), before);
    assert_eq!(game.board().piece_at(Square(1, 2)), None);
    assert_eq!(game.board().piece_at(Square(2, 3)), Some(Piece::man(Color::White)));
}

#[test]
fn test_jump_captures_exactly_one_piece() {
    let mut game = BoardBuilder::new()
        .piece(Square(1, 0), Color::White)
        .piece(Square(2, 1), Color::Black)
        .piece(Square(6, 7), Color::Black)
        .build()
        .unwrap();

    let outcome = game.apply_move(Square(1, 0), Square(3, 2)).unwrap();

    assert_eq!(outcome.captured, Some((Square(2, 1), Piece::man(Color::Black))));
    assert_eq!(game.board().piece_count(Color::Black), 1);
    assert_eq!(game.board().piece_count(Color::White), 1);
    assert_eq!(game.board().piece_at(Square(2, 1)), None);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_captured_piece_loses_its_cell() {
    let mut game = BoardBuilder::new()
        .piece(Square(1, 0), Color::White)
        .piece(Square(2, 1), Color::Black)
        .piece(Square(6, 7), Color::Black)
        .build()
        .unwrap();
    let victim = game.board().piece_id_at(Square(2, 1)).unwrap();
    let mover = game.board().piece_id_at(Square(1, 0)).unwrap();

    game.apply_move(Square(1, 0), Square(3, 2)).unwrap();

    assert_eq!(game.board().position_of(victim), None);
    assert!(!game.board().is_in_play(victim));
    assert_eq!(game.board().position_of(mover), Some(Square(3, 2)));
    assert_eq!(game.board().piece_id_at(Square(3, 2)), Some(mover));
}

#[test]
fn test_promotion_on_the_far_row() {
    let mut game = BoardBuilder::new()
        .piece(Square(1, 6), Color::White)
        .piece(Square(6, 5), Color::Black)
        .build()
        .unwrap();
    let id = game.board().piece_id_at(Square(1, 6)).unwrap();
    assert!(!game.board().piece(id).unwrap().is_king());

    let outcome = game.apply_move(Square(1, 6), Square(2, 7)).unwrap();

    assert!(outcome.promoted);
    assert!(game.board().piece(id).unwrap().is_king());
    assert_eq!(game.board().hash(), game.board().calculate_hash());
}

#[test]
fn test_black_promotes_on_row_one() {
    let mut game = BoardBuilder::new()
        .piece(Square(5, 0), Color::White)
        .piece(Square(2, 1), Color::Black)
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    let outcome = game.apply_move(Square(2, 1), Square(1, 0)).unwrap();
    assert!(outcome.promoted);
    assert_eq!(game.board().piece_at(Square(1, 0)), Some(Piece::king(Color::Black)));
}

#[test]
fn test_king_is_not_crowned_twice() {
    let mut game = BoardBuilder::new()
        .king(Square(2, 5), Color::White)
        .piece(Square(6, 1), Color::Black)
        .build()
        .unwrap();

    game.apply_move(Square(2, 5), Square(3, 6)).unwrap();
    game.apply_move(Square(6, 1), Square(5, 0)).unwrap();
    let outcome = game.apply_move(Square(3, 6), Square(4, 7)).unwrap();
    assert!(!outcome.promoted);
}

#[test]
fn test_turns_alternate() {
    let mut game = GameState::new();
    let plies = [
        (Square(1, 2), Square(0, 3)),
        (Square(0, 5), Square(1, 4)),
        (Square(3, 2), Square(4, 3)),
        (Square(2, 5), Square(3, 4)),
    ];

    let mut expected = Color::White;
    for (from, to) in plies {
        assert_eq!(game.side_to_move(), expected);
        let outcome = game.apply_move(from, to).unwrap();
        expected = expected.opponent();
        assert_eq!(outcome.next_player, expected);
    }
}

#[test]
fn test_friendly_hop_removes_nothing() {
    let mut game = BoardBuilder::new()
        .piece(Square(1, 0), Color::White)
        .piece(Square(2, 1), Color::White)
        .piece(Square(6, 7), Color::Black)
        .rules(Rules::standard().with_friendly_hop(true))
        .build()
        .unwrap();

    let outcome = game.apply_move(Square(1, 0), Square(3, 2)).unwrap();

    assert_eq!(outcome.captured, None);
    assert_eq!(game.board().piece_count(Color::White), 2);
    assert_eq!(game.board().piece_at(Square(2, 1)), Some(Piece::man(Color::White)));
}

#[test]
fn test_rejected_move_leaves_state_untouched() {
    let mut game = GameState::new();
    let before = game.clone();

    assert_eq!(
        game.apply_move(Square(1, 2), Square(1, 3)),
        Err(GameError::IllegalMove {
            from: Square(1, 2),
            to: Square(1, 3)
        })
    );
    assert_eq!(
        game.apply_move(Square(0, 5), Square(1, 4)),
        Err(GameError::WrongTurn {
            expected: Color::White,
            found: Color::Black
        })
    );
    assert_eq!(game, before);
    assert_eq!(game.hash(), before.hash());
}

#[test]
fn test_unchecked_make_move() {
    let mut board = Board::new();
    let effect = board.make_move(Move::new(Square(1, 2), Square(2, 3))).unwrap();

    assert_eq!(effect.captured, None);
    assert_eq!(board.position_of(effect.moved), Some(Square(2, 3)));
    assert_eq!(
        board.make_move(Move::new(Square(0, 3), Square(1, 4))),
        Err(GameError::NoPieceSelected {
            square: Square(0, 3)
        })
    );
}

#[test]
fn test_play_parsed_moves() {
    let mut game = GameState::new();
    game.play("b3c4".parse().unwrap()).unwrap();
    game.play("a6b5".parse().unwrap()).unwrap();
    let outcome = game.play("c4a6".parse::<Move>().unwrap()).unwrap();

    assert_eq!(outcome.captured, Some((Square(1, 4), Piece::man(Color::Black))));
    assert_eq!(game.board().piece_count(Color::Black), 11);
}
