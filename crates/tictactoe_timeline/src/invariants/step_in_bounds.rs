//! Step invariant: the step pointer indexes into history.

use super::Invariant;
use crate::GameState;

/// Invariant: `0 <= step_number < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.step_number() < state.history().len()
    }

    fn description() -> &'static str {
        "Step number indexes into history"
    }
}
