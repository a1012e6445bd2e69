//! First-class action types for the game timeline.
//!
//! Actions are the two things a player can ask for: place a mark, or
//! jump back to an earlier step. They can be parsed from text and
//! replayed against a [`GameState`](crate::GameState).

use crate::CELLS;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's request against the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the next mark in the given cell (0-8).
    Place(usize),
    /// Jump to a previously reached step.
    Jump(usize),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(cell) => write!(f, "{}", cell),
            Action::Jump(step) => write!(f, "@{}", step),
        }
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses `"4"` as a placement in cell 4 and `"@2"` as a jump to step 2.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (jump, digits) = match s.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let n: usize = digits
            .parse()
            .map_err(|_| ParseActionError::new(s))?;
        if jump {
            Ok(Action::Jump(n))
        } else if n < CELLS {
            Ok(Action::Place(n))
        } else {
            Err(ParseActionError::new(s))
        }
    }
}

/// Failure to parse an [`Action`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid action {:?}: expected a cell 0-8 or @step", input)]
pub struct ParseActionError {
    /// The rejected input.
    pub input: String,
}

impl ParseActionError {
    fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Error that can occur when validating or applying an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The cell index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The jump target has not been reached from the current step.
    #[display("Step {} is beyond the current step {}", requested, current)]
    StepOutOfRange {
        /// Requested step.
        requested: usize,
        /// Step at the time of the request.
        current: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
