//! Turn engine: side to move, legality checks and the end condition.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::zobrist::ZOBRIST;

use super::{Board, Color, GameError, Move, MoveList, Piece, Rules, Square};

/// Where a match stands. `Won` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Color),
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(color) => Some(color),
        }
    }
}

/// Everything the caller needs to render one applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub mv: Move,
    /// The removed piece and the cell it stood on
    pub captured: Option<(Square, Piece)>,
    pub promoted: bool,
    pub next_player: Color,
    pub status: GameStatus,
}

/// One match: the board, whose turn it is, and whether it is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) status: GameStatus,
    pub(crate) rules: Rules,
}

impl GameState {
    /// Opening position with White to move.
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    pub fn with_rules(rules: Rules) -> Self {
        Self::from_parts(Board::new(), Color::White, rules)
    }

    pub(crate) fn from_parts(board: Board, side_to_move: Color, rules: Rules) -> Self {
        let status = Self::evaluate_status(&board);
        GameState {
            board,
            side_to_move,
            status,
            rules,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn set_rules(&mut self, rules: Rules) {
        self.rules = rules;
    }

    /// Position hash including the side to move.
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.board.hash() ^ ZOBRIST.side(self.side_to_move)
    }

    fn check_not_over(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            GameStatus::Won(winner) => Err(GameError::GameOver { winner }),
        }
    }

    /// Legal destinations for the piece on `from`, which must belong to the
    /// side to move.
    pub fn legal_moves(&self, from: Square) -> Result<MoveList, GameError> {
        self.check_not_over()?;
        let piece = self
            .board
            .cell(from)?
            .and_then(|id| self.board.piece(id))
            .ok_or(GameError::NoPieceSelected { square: from })?;
        if piece.color != self.side_to_move {
            return Err(GameError::WrongTurn {
                expected: self.side_to_move,
                found: piece.color,
            });
        }
        Ok(self.board.generate_piece_moves(from, piece, self.rules))
    }

    /// Every legal move of the side to move; empty once the game is over.
    #[must_use]
    pub fn all_legal_moves(&self) -> MoveList {
        if self.is_over() {
            return MoveList::new();
        }
        self.board.generate_moves(self.side_to_move, self.rules)
    }

    /// Move the piece on `from` to `to`.
    ///
    /// The destination is checked against the piece's current legal moves. On
    /// success the turn passes to the opponent and the end condition is
    /// re-evaluated; on error nothing changes.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, GameError> {
        Board::check_bounds(to)?;
        let legal = self.legal_moves(from)?;
        let mv = Move::new(from, to);
        if !legal.contains(mv) {
            return Err(GameError::IllegalMove { from, to });
        }

        let effect = self.board.make_move(mv)?;
        let mover = self.side_to_move;
        self.side_to_move = mover.opponent();
        self.status = Self::evaluate_status(&self.board);

        engine_trace!("{mover} played {mv}");
        if let GameStatus::Won(winner) = self.status {
            engine_info!("{winner} wins after {mv}");
        }

        Ok(MoveOutcome {
            mv,
            captured: effect.captured,
            promoted: effect.promoted,
            next_player: self.side_to_move,
            status: self.status,
        })
    }

    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        self.apply_move(mv.from, mv.to)
    }

    /// A side with no pieces left has lost.
    fn evaluate_status(board: &Board) -> GameStatus {
        Color::BOTH
            .into_iter()
            .find(|&color| board.piece_count(color) == 0)
            .map_or(GameStatus::InProgress, |loser| {
                GameStatus::Won(loser.opponent())
            })
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
