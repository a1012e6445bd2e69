//! Game state with a time-travel history.
//!
//! [`GameState`] is an immutable value. Every transition borrows the
//! current state and returns a new one, leaving the original intact so
//! a front end can keep or discard it freely.

use crate::action::{Action, MoveError};
use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::moves::MoveEntry;
use crate::rules::calculate_winner;
use crate::status::Status;
use crate::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: every snapshot so far plus the one on display.
///
/// The side to move is derived from `step_number` rather than stored,
/// so it can never disagree with the step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Board snapshots, `history[0]` being the empty board.
    history: Vec<Board>,
    /// Index of the snapshot currently on display.
    step_number: usize,
}

impl GameState {
    /// Creates a new game: one empty snapshot, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step_number: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, step_number: usize) -> Self {
        Self {
            history,
            step_number,
        }
    }

    /// Returns every snapshot, including any beyond the current step.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the index of the snapshot on display.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns true when X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    /// Returns the player who places the next mark.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step_number)
    }

    /// Returns the snapshot on display.
    pub fn current(&self) -> &Board {
        &self.history[self.step_number]
    }

    /// Returns the winner of the snapshot on display.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Player> {
        calculate_winner(self.current())
    }

    /// Returns the status line for the snapshot on display.
    #[instrument(skip(self))]
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(player) => Status::Winner(player),
            None => Status::NextPlayer(self.next_player()),
        }
    }

    /// Returns the jump targets the history browser offers.
    ///
    /// Only steps up to the current one are listed; later snapshots
    /// are kept but cannot be reached.
    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..=self.step_number).map(MoveEntry::new).collect()
    }

    /// Places the next mark in `cell`, failing on an illegal move.
    ///
    /// Snapshots after the current step are discarded before the new
    /// one is appended.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current board has a winner.
    /// - [`MoveError::OutOfBounds`] if `cell > 8`.
    /// - [`MoveError::SquareOccupied`] if `cell` is taken.
    #[instrument(skip(self), fields(step = self.step_number, player = %self.next_player()))]
    pub fn try_apply_move(&self, cell: usize) -> Result<Self, MoveError> {
        let current = self.current();
        if calculate_winner(current).is_some() {
            return Err(MoveError::GameOver);
        }
        let player = self.next_player();
        let board = match current.get(cell) {
            None => return Err(MoveError::OutOfBounds(cell)),
            Some(Square::Occupied(_)) => return Err(MoveError::SquareOccupied(cell)),
            Some(Square::Empty) => current
                .with(cell, Square::Occupied(player))
                .ok_or(MoveError::OutOfBounds(cell))?,
        };

        let mut history = self.history[..=self.step_number].to_vec();
        history.push(board);
        let next = Self {
            step_number: history.len() - 1,
            history,
        };

        #[cfg(debug_assertions)]
        next.check_invariants()?;

        debug!(cell, step = next.step_number, "Move applied");
        Ok(next)
    }

    /// Places the next mark in `cell`.
    ///
    /// Illegal moves are ignored: the returned state equals `self`.
    #[instrument(skip(self))]
    pub fn apply_move(&self, cell: usize) -> Self {
        self.try_apply_move(cell).unwrap_or_else(|e| {
            debug!(cell, error = %e, "Move ignored");
            self.clone()
        })
    }

    /// Moves the display pointer back to `step`, failing if it was never reached.
    ///
    /// History is cut back to the step on display *before* the jump;
    /// snapshots between `step` and that point stay until the next move.
    /// Jumping to the current step returns the state unchanged.
    ///
    /// # Errors
    ///
    /// [`MoveError::StepOutOfRange`] if `step > step_number`.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn try_jump_to(&self, step: usize) -> Result<Self, MoveError> {
        if step > self.step_number {
            return Err(MoveError::StepOutOfRange {
                requested: step,
                current: self.step_number,
            });
        }
        if step == self.step_number {
            return Ok(self.clone());
        }
        let next = Self {
            history: self.history[..=self.step_number].to_vec(),
            step_number: step,
        };

        #[cfg(debug_assertions)]
        next.check_invariants()?;

        debug!(step, "Jumped");
        Ok(next)
    }

    /// Moves the display pointer back to `step`.
    ///
    /// A step beyond the current one is ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&self, step: usize) -> Self {
        self.try_jump_to(step).unwrap_or_else(|e| {
            debug!(step, error = %e, "Jump ignored");
            self.clone()
        })
    }

    /// Applies an action, ignoring it if illegal.
    pub fn apply(&self, action: Action) -> Self {
        match action {
            Action::Place(cell) => self.apply_move(cell),
            Action::Jump(step) => self.jump_to(step),
        }
    }

    /// Applies an action, failing if illegal.
    ///
    /// # Errors
    ///
    /// See [`GameState::try_apply_move`] and [`GameState::try_jump_to`].
    pub fn try_apply(&self, action: Action) -> Result<Self, MoveError> {
        match action {
            Action::Place(cell) => self.try_apply_move(cell),
            Action::Jump(step) => self.try_jump_to(step),
        }
    }

    /// Replays actions from a new game, ignoring illegal ones.
    #[instrument(skip(actions))]
    pub fn replay<'a>(actions: impl IntoIterator<Item = &'a Action>) -> Self {
        actions
            .into_iter()
            .fold(Self::new(), |state, action| state.apply(*action))
    }

    /// Checks every timeline invariant.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvariantViolation`] naming each broken invariant.
    pub fn check_invariants(&self) -> Result<(), MoveError> {
        TimelineInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }
}

/// Unchecked wire form; deserialized states must pass the invariants.
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Board>,
    step_number: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = MoveError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            step_number: raw.step_number,
        };
        state.check_invariants()?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
