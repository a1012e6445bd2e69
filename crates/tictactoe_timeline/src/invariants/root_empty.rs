//! Root invariant: the first history entry is the empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: `history[0]` is the all-empty board.
pub struct RootIsEmptyInvariant;

impl Invariant<GameState> for RootIsEmptyInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(RootIsEmptyInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        let state = GameState::from_parts(Vec::new(), 0);
        assert!(!RootIsEmptyInvariant::holds(&state));
    }

    #[test]
    fn test_marked_root_violates() {
        let root = Board::new().with(4, Square::Occupied(Player::X)).unwrap();
        let state = GameState::from_parts(vec![root], 0);
        assert!(!RootIsEmptyInvariant::holds(&state));
    }
}
