//! Property tests for the game timeline.

use proptest::prelude::*;
use tictactoe_timeline::rules::LINES;
use tictactoe_timeline::{Action, Board, GameState, Player, Square, calculate_winner};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0usize..9).prop_map(Action::Place),
        1 => (0usize..10).prop_map(Action::Jump),
    ]
}

proptest! {
    #[test]
    fn winner_iff_uniform_line(squares in prop::array::uniform9(square())) {
        let board = Board::from_squares(squares);
        let first = LINES.iter().find(|&&[a, b, c]| {
            squares[a] != Square::Empty && squares[a] == squares[b] && squares[a] == squares[c]
        });
        prop_assert_eq!(calculate_winner(&board), first.and_then(|&[a, _, _]| squares[a].player()));
    }

    #[test]
    fn legal_moves_grow_history(cells in prop::collection::vec(0usize..9, 0..30)) {
        let mut state = GameState::new();
        let mut legal = 0;
        for cell in cells {
            match state.try_apply_move(cell) {
                Ok(next) => {
                    legal += 1;
                    state = next;
                }
                Err(_) => {
                    prop_assert_eq!(state.apply_move(cell), state.clone());
                }
            }
            prop_assert_eq!(state.history().len(), legal + 1);
            prop_assert_eq!(state.step_number(), legal);
        }
    }

    #[test]
    fn invariants_hold_under_any_actions(actions in prop::collection::vec(action(), 0..40)) {
        let mut state = GameState::new();
        for action in actions {
            state = state.apply(action);
            prop_assert!(state.check_invariants().is_ok());
            prop_assert_eq!(state.x_is_next(), state.step_number() % 2 == 0);
            prop_assert_eq!(state.jump_to(state.step_number()), state.clone());
        }
    }
}
