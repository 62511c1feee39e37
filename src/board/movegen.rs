use super::{Board, Color, GameError, Move, MoveList, Piece, PieceId, Rules, Square};

/// Horizontal steps of the two diagonals in one row direction.
const DIAGONAL_STEPS: [isize; 2] = [-1, 1];

impl Board {
    /// Destinations reachable in one ply by the piece on `from`.
    ///
    /// Men move toward the opponent's side; kings also move backward. A cell
    /// beyond an adjacent opposing piece is reachable when empty. Chained jumps
    /// are not searched.
    pub fn available_moves(&self, from: Square, rules: Rules) -> Result<MoveList, GameError> {
        let piece = self
            .cell(from)?
            .map(|id| self.pieces[id.as_usize()].piece)
            .ok_or(GameError::NoPieceSelected { square: from })?;
        Ok(self.generate_piece_moves(from, piece, rules))
    }

    /// Same as `available_moves`, keyed by piece handle. `None` once captured.
    #[must_use]
    pub fn moves_for(&self, id: PieceId, rules: Rules) -> Option<MoveList> {
        let record = self.record(id)?;
        let from = record.position?;
        Some(self.generate_piece_moves(from, record.piece, rules))
    }

    /// Every move of every live piece of `color`.
    #[must_use]
    pub fn generate_moves(&self, color: Color, rules: Rules) -> MoveList {
        let mut moves = MoveList::new();
        for id in self.pieces_in_play(color) {
            if let Some(piece_moves) = self.moves_for(id, rules) {
                moves.extend_from(&piece_moves);
            }
        }
        moves
    }

    pub(crate) fn generate_piece_moves(&self, from: Square, piece: Piece, rules: Rules) -> MoveList {
        let mut moves = MoveList::new();
        let forward = piece.color.forward();
        self.generate_diagonal_moves(from, piece.color, forward, rules, &mut moves);
        if piece.is_king() {
            self.generate_diagonal_moves(from, piece.color, -forward, rules, &mut moves);
        }
        moves
    }

    fn generate_diagonal_moves(
        &self,
        from: Square,
        color: Color,
        dy: isize,
        rules: Rules,
        moves: &mut MoveList,
    ) {
        for dx in DIAGONAL_STEPS {
            let Some(step) = from.offset(dx, dy) else {
                continue;
            };

            match self.color_on(step) {
                None => moves.push(Move::new(from, step)),
                Some(other) if other != color || rules.friendly_hop => {
                    if let Some(landing) = step.offset(dx, dy) {
                        if self.is_empty(landing) {
                            moves.push(Move::new(from, landing));
                        }
                    }
                }
                Some(_) => {}
            }
        }
    }
}
