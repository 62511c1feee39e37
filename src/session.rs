//! Click-driven play: piece selection on top of a `GameState`.
//!
//! A front end forwards each clicked cell to [`Session::click`] and renders
//! the returned [`ClickOutcome`]. The session owns the current selection and
//! its highlighted destinations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Board, GameError, GameState, GameStatus, Move, MoveList, MoveOutcome, Rules, Square,
};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClickOutcome {
    /// A piece of the side to move was selected; its destinations follow
    Selected {
        square: Square,
        destinations: Vec<Square>,
    },
    /// The selected piece was clicked again
    Deselected,
    /// A highlighted destination was clicked and the move was played
    Moved(MoveOutcome),
    /// The click had no effect
    Ignored,
}

#[derive(Clone, Debug)]
pub struct Session {
    state: GameState,
    selected: Option<Square>,
    highlighted: MoveList,
}

impl Session {
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        Self::from_state(GameState::with_rules(rules))
    }

    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Session {
            state,
            selected: None,
            highlighted: MoveList::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replace the game, dropping any selection.
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
        self.deselect();
    }

    pub fn set_rules(&mut self, rules: Rules) {
        self.state.set_rules(rules);
        self.deselect();
    }

    #[must_use]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[must_use]
    pub fn highlighted(&self) -> Vec<Square> {
        self.highlighted.destinations()
    }

    pub fn deselect(&mut self) {
        self.selected = None;
        self.highlighted = MoveList::new();
    }

    /// Start a new match under the same rules.
    pub fn restart(&mut self) {
        let rules = self.state.rules();
        self.set_state(GameState::with_rules(rules));
    }

    /// Play a move directly, bypassing the selection.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        let outcome = self.state.play(mv)?;
        self.deselect();
        Ok(outcome)
    }

    /// Handle a click on `square`.
    pub fn click(&mut self, square: Square) -> Result<ClickOutcome, GameError> {
        Board::check_bounds(square)?;
        if let GameStatus::Won(winner) = self.state.status() {
            return Err(GameError::GameOver { winner });
        }

        if self.state.board().color_on(square) == Some(self.state.side_to_move()) {
            if self.selected == Some(square) {
                self.deselect();
                return Ok(ClickOutcome::Deselected);
            }
            let moves = self.state.legal_moves(square)?;
            let destinations = moves.destinations();
            self.selected = Some(square);
            self.highlighted = moves;
            return Ok(ClickOutcome::Selected {
                square,
                destinations,
            });
        }

        match self.selected {
            Some(from) if self.highlighted.contains_destination(square) => {
                let outcome = self.state.apply_move(from, square)?;
                self.deselect();
                Ok(ClickOutcome::Moved(outcome))
            }
            _ => Ok(ClickOutcome::Ignored),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Rules::default())
    }
}
