use std::collections::BTreeSet;
use std::fmt;

use crate::zobrist::ZOBRIST;

use super::{Color, GameError, Piece, PieceId, Square, BOARD_WIDTH};

/// Arena entry for one piece: its value and the cell it stands on.
///
/// `position` is the back-reference half of the cell/piece link; it is `None`
/// once the piece has been captured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    pub(crate) piece: Piece,
    pub(crate) position: Option<Square>,
}

impl PieceRecord {
    #[must_use]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[must_use]
    pub fn position(&self) -> Option<Square> {
        self.position
    }
}

/// The 8x8 grid, the pieces standing on it and the per-color live sets.
///
/// Invariants kept by every mutating method:
/// - `cells[y][x] == Some(id)` exactly when `pieces[id].position == Some(Square(x, y))`
/// - an id is in exactly one live set while it has a position, and in none after capture
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: [[Option<PieceId>; BOARD_WIDTH]; BOARD_WIDTH], // [y][x]
    pub(crate) pieces: Vec<PieceRecord>,
    pub(crate) in_play: [BTreeSet<PieceId>; 2],
    pub(crate) hash: u64,
}

impl Board {
    /// Standard opening layout: White on the dark cells of rows 0-2, Black on rows 5-7.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let mut next_id = 0;
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            let color = match sq.y() {
                0..=2 => Color::White,
                5..=7 => Color::Black,
                _ => continue,
            };
            board.insert(PieceId(next_id), sq, Piece::man(color));
            next_id += 1;
        }
        board
    }

    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_WIDTH]; BOARD_WIDTH],
            pieces: Vec::new(),
            in_play: [BTreeSet::new(), BTreeSet::new()],
            hash: 0,
        }
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub(crate) fn calculate_hash(&self) -> u64 {
        Square::all()
            .filter_map(|sq| self.piece_at(sq).map(|piece| ZOBRIST.piece(piece, sq)))
            .fold(0, |hash, key| hash ^ key)
    }

    pub(crate) fn check_bounds(sq: Square) -> Result<Square, GameError> {
        if sq.is_on_board() {
            Ok(sq)
        } else {
            Err(GameError::out_of_bounds(sq))
        }
    }

    /// Occupant of a cell, rejecting coordinates off the board.
    pub fn cell(&self, sq: Square) -> Result<Option<PieceId>, GameError> {
        let sq = Self::check_bounds(sq)?;
        Ok(self.cells[sq.1][sq.0])
    }

    /// Occupant of a cell; off-board coordinates read as empty.
    #[must_use]
    pub fn piece_id_at(&self, sq: Square) -> Option<PieceId> {
        self.cell(sq).ok().flatten()
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.piece_id_at(sq).map(|id| self.pieces[id.as_usize()].piece)
    }

    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.piece_id_at(sq).is_none()
    }

    #[must_use]
    pub fn record(&self, id: PieceId) -> Option<&PieceRecord> {
        self.pieces.get(id.as_usize())
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<Piece> {
        self.record(id).map(PieceRecord::piece)
    }

    /// Cell the piece stands on, `None` once captured.
    #[must_use]
    pub fn position_of(&self, id: PieceId) -> Option<Square> {
        self.record(id).and_then(PieceRecord::position)
    }

    /// Live pieces of one color, in creation order.
    pub fn pieces_in_play(&self, color: Color) -> impl Iterator<Item = PieceId> + '_ {
        self.in_play[color.index()].iter().copied()
    }

    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.in_play[color.index()].len()
    }

    #[must_use]
    pub fn is_in_play(&self, id: PieceId) -> bool {
        self.piece(id)
            .is_some_and(|piece| self.in_play[piece.color.index()].contains(&id))
    }

    /// Link a cell and a piece in both directions.
    ///
    /// The previous occupant of `sq` loses its position and is returned. An
    /// incoming piece is first detached from the cell it was standing on, so no
    /// two cells ever hold the same piece. Live sets are left to the caller.
    pub(crate) fn set_piece(&mut self, sq: Square, occupant: Option<PieceId>) -> Option<PieceId> {
        if self.cells[sq.1][sq.0] == occupant {
            return None;
        }

        let displaced = self.cells[sq.1][sq.0].take();
        if let Some(old) = displaced {
            let record = &mut self.pieces[old.as_usize()];
            record.position = None;
            self.hash ^= ZOBRIST.piece(record.piece, sq);
        }

        if let Some(id) = occupant {
            let record = &mut self.pieces[id.as_usize()];
            if let Some(prev) = record.position.take() {
                self.cells[prev.1][prev.0] = None;
                self.hash ^= ZOBRIST.piece(record.piece, prev);
            }
            record.position = Some(sq);
            self.hash ^= ZOBRIST.piece(record.piece, sq);
            self.cells[sq.1][sq.0] = Some(id);
        }

        displaced
    }

    /// Create a new piece on `sq` and add it to its color's live set.
    ///
    /// Any piece already standing there is taken out of play. Its record stays
    /// in the arena, so handles are never reused.
    pub fn spawn(&mut self, sq: Square, piece: Piece) -> Result<PieceId, GameError> {
        let sq = Self::check_bounds(sq)?;
        if !sq.is_dark() {
            return Err(GameError::LightSquare { square: sq });
        }
        let id = u32::try_from(self.pieces.len())
            .map(PieceId)
            .map_err(|_| GameError::TooManyPieces)?;
        self.insert(id, sq, piece);
        Ok(id)
    }

    /// `id` must be the next free arena slot.
    fn insert(&mut self, id: PieceId, sq: Square, piece: Piece) {
        debug_assert_eq!(id.as_usize(), self.pieces.len());
        self.pieces.push(PieceRecord {
            piece,
            position: None,
        });
        if let Some(displaced) = self.set_piece(sq, Some(id)) {
            self.retire(displaced);
        }
        self.in_play[piece.color.index()].insert(id);
    }

    /// Detach whatever stands on `sq` and remove it from play for good.
    pub fn capture(&mut self, sq: Square) -> Option<(PieceId, Piece)> {
        let sq = Self::check_bounds(sq).ok()?;
        let id = self.set_piece(sq, None)?;
        self.retire(id);
        Some((id, self.pieces[id.as_usize()].piece))
    }

    pub(crate) fn retire(&mut self, id: PieceId) {
        let color = self.pieces[id.as_usize()].piece.color;
        self.in_play[color.index()].remove(&id);
    }

    /// Crown a piece. Returns false if it already was a king.
    pub(crate) fn crown(&mut self, id: PieceId) -> bool {
        let record = &mut self.pieces[id.as_usize()];
        if record.piece.king {
            return false;
        }
        let before = record.piece;
        record.piece.king = true;
        if let Some(sq) = record.position {
            self.hash ^= ZOBRIST.piece(before, sq) ^ ZOBRIST.piece(record.piece, sq);
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl PartialEq for Board {
    /// Boards are equal when the same pieces stand on the same cells, whatever
    /// their handles.
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && Square::all().all(|sq| self.piece_at(sq) == other.piece_at(sq))
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for y in (0..BOARD_WIDTH).rev() {
            write!(f, "{} |", y + 1)?;
            for x in 0..BOARD_WIDTH {
                let ch = self.piece_at(Square(x, y)).map_or('.', Piece::to_char);
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}
