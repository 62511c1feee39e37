use super::{Board, GameError, Move, Piece, PieceId, Square};

/// What a move did to the board besides relocating the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEffect {
    pub moved: PieceId,
    pub captured: Option<(Square, Piece)>,
    pub promoted: bool,
}

impl Board {
    /// Apply a move without checking it against the legal move set.
    ///
    /// A jump removes the piece on the midpoint only when it belongs to the
    /// opponent; jumping over an own piece or an empty cell still moves. A man
    /// reaching its promotion row is crowned.
    pub fn make_move(&mut self, mv: Move) -> Result<MoveEffect, GameError> {
        let to = Self::check_bounds(mv.to)?;
        let id = self
            .cell(mv.from)?
            .ok_or(GameError::NoPieceSelected { square: mv.from })?;
        let color = self.pieces[id.as_usize()].piece.color;

        let mut captured = None;
        if mv.is_jump() {
            let mid = mv.midpoint();
            if self.color_on(mid) == Some(color.opponent()) {
                captured = self.capture(mid).map(|(_, piece)| (mid, piece));
                engine_debug!("{mv}: captured {} on {mid}", color.opponent());
            }
        }

        if let Some(displaced) = self.set_piece(to, Some(id)) {
            self.retire(displaced);
        }

        let promoted = to.y() == color.promotion_row() && self.crown(id);
        if promoted {
            engine_debug!("{mv}: {color} man crowned on {to}");
        }

        Ok(MoveEffect {
            moved: id,
            captured,
            promoted,
        })
    }
}
