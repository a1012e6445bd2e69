//! Tic-tac-toe with a time-travel move history.
//!
//! The whole game is one immutable [`GameState`] value. Transitions
//! borrow it and hand back a new one:
//!
//! - [`GameState::apply_move`] places the next mark, ignoring illegal moves.
//! - [`GameState::jump_to`] moves the display pointer back to an earlier step.
//! - [`calculate_winner`] checks a single board snapshot.
//!
//! Stricter `try_*` variants report why a request was rejected.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, Player, Status};
//!
//! let state = [0, 4, 1, 3, 2]
//!     .into_iter()
//!     .fold(GameState::new(), |state, cell| state.apply_move(cell));
//! assert_eq!(state.status(), Status::Winner(Player::X));
//! assert_eq!(state.status().to_string(), "Winner: X");
//!
//! let rewound = state.jump_to(0);
//! assert_eq!(rewound.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod moves;
pub mod rules;
mod state;
mod status;
mod types;

pub use action::{Action, MoveError, ParseActionError};
pub use moves::MoveEntry;
pub use rules::{calculate_winner, is_draw, winning_line};
pub use state::GameState;
pub use status::Status;
pub use types::{Board, CELLS, Player, Square};
