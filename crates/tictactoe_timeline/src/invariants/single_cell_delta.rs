//! Delta invariant: each entry adds exactly one mark, alternating X and O.

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: `history[k]` differs from `history[k-1]` in exactly one cell.
///
/// That cell goes from empty to X for odd `k` and to O for even `k`.
/// Marks never change once set.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let expected = Square::Occupied(Player::for_step(k));
                let mut changed = pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before != after);
                matches!(
                    (changed.next(), changed.next()),
                    (Some((Square::Empty, after)), None) if *after == expected
                )
            })
    }

    fn description() -> &'static str {
        "Each move adds one mark, alternating X and O"
    }
}
