//! Rule switches for move generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Variant rules applied by the move generator.
///
/// The default is standard single-jump checkers: a jump is only possible over
/// an opposing piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rules {
    /// Allow jumping over a piece of one's own color. The jumped piece stays on
    /// the board.
    pub friendly_hop: bool,
}

impl Rules {
    #[must_use]
    pub const fn standard() -> Self {
        Rules {
            friendly_hop: false,
        }
    }

    #[must_use]
    pub const fn with_friendly_hop(mut self, enabled: bool) -> Self {
        self.friendly_hop = enabled;
        self
    }
}
