//! Draw detection logic for tic-tac-toe.

use super::win::calculate_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
///
/// The status line never reports this; it is a query for presentation.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && calculate_winner(board).is_none()
}
