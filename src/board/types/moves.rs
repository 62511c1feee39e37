//! Move types and move list.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// A single diagonal step or jump from one square to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// A jump moves two cells along a row or a column.
    #[inline]
    #[must_use]
    pub const fn is_jump(self) -> bool {
        self.from.0.abs_diff(self.to.0) == 2 || self.from.1.abs_diff(self.to.1) == 2
    }

    /// The cell jumped over (integer average of both ends).
    #[inline]
    #[must_use]
    pub const fn midpoint(self) -> Square {
        Square((self.from.0 + self.to.0) / 2, (self.from.1 + self.to.1) / 2)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Accepts `b1c2`, `b1-c2` and `b1xd3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | 'x' | 'X' | ':'))
            .collect();
        if compact.len() != 4 || !compact.is_ascii() {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }

        let parse = |part: &str| {
            part.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                })
        };
        Ok(Move::new(parse(&compact[..2])?, parse(&compact[2..])?))
    }
}

/// Upper bound on the moves of one side: 32 dark cells, four diagonals each.
pub(crate) const MAX_MOVES: usize = 128;
pub(crate) const EMPTY_MOVE: Move = Move {
    from: Square(0, 0),
    to: Square(0, 0),
};

/// Fixed-capacity list of distinct moves.
///
/// Pushing a move that is already present is a no-op, so the list behaves as a
/// set; the order carries no meaning.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        if self.contains(mv) || self.len == MAX_MOVES {
            return;
        }
        self.moves[self.len] = mv;
        self.len += 1;
    }

    pub(crate) fn extend_from(&mut self, other: &MoveList) {
        for &mv in other.iter() {
            self.push(mv);
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    #[must_use]
    pub fn contains_destination(&self, to: Square) -> bool {
        self.iter().any(|mv| mv.to == to)
    }

    /// Destination squares, sorted so output is stable.
    #[must_use]
    pub fn destinations(&self) -> Vec<Square> {
        let mut squares: Vec<Square> = self.iter().map(|mv| mv.to).collect();
        squares.sort();
        squares
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for MoveList {
    /// Set equality: same moves regardless of order.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|&mv| other.contains(mv))
    }
}

impl Eq for MoveList {}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a `MoveList`.
pub struct MoveListIntoIter {
    list: MoveList,
    index: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        let mv = self.list.as_slice().get(self.index).copied();
        self.index += 1;
        mv
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter {
            list: self,
            index: 0,
        }
    }
}
