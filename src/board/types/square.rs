//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Width and height of the board.
pub const BOARD_WIDTH: usize = 8;

/// A cell of the board, represented as (x, y): column then row.
///
/// Row 0 is White's home row. The fields are public for convenience; every
/// engine entry point checks them against the board before use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (x, y)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x < BOARD_WIDTH && y < BOARD_WIDTH {
            Some(Square(x, y))
        } else {
            None
        }
    }

    /// Column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn x(self) -> usize {
        self.0
    }

    /// Row (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn y(self) -> usize {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < BOARD_WIDTH && self.1 < BOARD_WIDTH
    }

    /// Dark cells are the only playable cells: `(x + y)` is odd.
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.0 + self.1) % 2 == 1
    }

    /// Step by a signed offset, returning `None` when leaving the board.
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Square> {
        let x = self.0.checked_add_signed(dx)?;
        let y = self.1.checked_add_signed(dy)?;
        Square::new(x, y)
    }

    /// Index 0-63, row-major from (0, 0)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.1 * BOARD_WIDTH + self.0
    }

    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx % BOARD_WIDTH, idx / BOARD_WIDTH)
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_WIDTH * BOARD_WIDTH).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (self.x() as u8 + b'a') as char, self.y() + 1)
        } else {
            write!(f, "({}, {})", self.0, self.1)
        }
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.1, self.0).cmp(&(other.1, other.0))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        if x >= BOARD_WIDTH {
            return Err(SquareError::ColumnOutOfBounds { x });
        }
        if y >= BOARD_WIDTH {
            return Err(SquareError::RowOutOfBounds { y });
        }
        Ok(Square(x, y))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let x = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let y = match rank {
            '1'..='8' => rank as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation() {
        assert_eq!(Square(1, 0).to_string(), "b1");
        assert_eq!(Square(7, 7).to_string(), "h8");
        assert_eq!("b1".parse::<Square>(), Ok(Square(1, 0)));
        assert_eq!("H8".parse::<Square>(), Ok(Square(7, 7)));
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square(0, 0).offset(1, 1), Some(Square(1, 1)));
        assert_eq!(Square(0, 0).offset(-1, 1), None);
        assert_eq!(Square(7, 7).offset(1, 0), None);
        assert_eq!(Square(3, 3).offset(-2, -2), Some(Square(1, 1)));
    }

    #[test]
    fn test_dark_squares() {
        assert!(Square(1, 0).is_dark());
        assert!(!Square(0, 0).is_dark());
        assert_eq!(Square::all().filter(|sq| sq.is_dark()).count(), 32);
    }

    #[test]
    fn test_try_from_bounds() {
        assert_eq!(Square::try_from((3, 4)), Ok(Square(3, 4)));
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::ColumnOutOfBounds { x: 8 })
        );
        assert_eq!(
            Square::try_from((0, 9)),
            Err(SquareError::RowOutOfBounds { y: 9 })
        );
    }

    #[test]
    fn test_index_roundtrip_covers_board() {
        for idx in 0..64 {
            assert_eq!(Square::from_index(idx).as_index(), idx);
        }
    }
}
