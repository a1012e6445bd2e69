//! Status line derived from the current snapshot.

use crate::Player;
use serde::{Deserialize, Serialize};

/// What the status line reports for the current step.
///
/// A full board with no winner is still `NextPlayer`; draws are not
/// reported separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The current board has three in a row.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Nobody has won yet.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}
