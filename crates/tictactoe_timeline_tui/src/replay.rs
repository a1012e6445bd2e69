//! Non-interactive replay: apply actions and print the outcome.

use anyhow::Result;
use tictactoe_timeline::{Action, GameState};
use tracing::{info, instrument};

/// Applies `actions` to a new game.
///
/// In strict mode the first illegal action is an error; otherwise
/// illegal actions are ignored like a click on an occupied square.
#[instrument(skip(actions), fields(count = actions.len()))]
pub fn run(actions: &[Action], strict: bool) -> Result<GameState> {
    let state = if strict {
        actions.iter().try_fold(GameState::new(), |state, action| {
            state
                .try_apply(*action)
                .map_err(|e| anyhow::anyhow!("Action {} rejected: {}", action, e))
        })?
    } else {
        GameState::replay(actions)
    };
    info!(step = state.step_number(), "Replay finished");
    Ok(state)
}

/// Formats the board, status line and move list as plain text.
pub fn render_text(state: &GameState) -> String {
    let mut out = format!("{}\n\n{}\n", state.current().display(), state.status());
    for entry in state.moves() {
        out.push_str(&format!("{}. {}\n", entry.step + 1, entry));
    }
    out
}

/// Serializes the state as pretty JSON.
pub fn render_json(state: &GameState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_replay_ignores_illegal_actions() {
        let actions = [Action::Place(4), Action::Place(4), Action::Jump(5)];
        let state = run(&actions, false).unwrap();
        assert_eq!(state.step_number(), 1);
    }

    #[test]
    fn test_strict_replay_reports_first_illegal_action() {
        let actions = [Action::Place(4), Action::Place(4)];
        let err = run(&actions, true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Action 4 rejected: Square 4 is already occupied"
        );
    }

    #[test]
    fn test_render_text() {
        let state = run(&[Action::Place(0), Action::Place(4)], false).unwrap();
        let text = render_text(&state);
        assert_eq!(
            text,
            "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9\n\nNext player: X\n\
             1. Go to game start\n2. Go to move #1\n3. Go to move #2\n"
        );
    }

    #[test]
    fn test_render_text_after_win() {
        let cells = [0, 4, 1, 3, 2].map(Action::Place);
        let text = render_text(&run(&cells, false).unwrap());
        assert!(text.starts_with("X|X|X\n-+-+-\nO|O|6\n"));
        assert!(text.contains("\n\nWinner: X\n1. Go to game start\n"));
        assert!(text.ends_with("6. Go to move #5\n"));
    }

    #[test]
    fn test_render_json_roundtrip() {
        let state = run(&[Action::Place(8)], false).unwrap();
        let json = render_json(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
