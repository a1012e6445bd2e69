//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};
use tracing::instrument;

/// The eight winning triples, in the order they are checked.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first uniform, non-empty triple on the board.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board[a];
        sq != Square::Empty && sq == board[b] && sq == board[c]
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise (including full-board draws).
#[instrument(skip(board))]
pub fn calculate_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board[a].player())
}
