//! Application state and key handling.

use crate::config::Palette;
use crossterm::event::KeyCode;
use tictactoe_timeline::{GameState, MoveEntry};
use tracing::{debug, info, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Holds the current [`GameState`] and the highlighted row of the move
/// list. Each key press replaces the game state wholesale.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    selected: usize,
    palette: Palette,
    show_cell_numbers: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(palette: Palette, show_cell_numbers: bool) -> Self {
        Self {
            game: GameState::new(),
            selected: 0,
            palette,
            show_cell_numbers,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Index of the highlighted move-list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Jump targets for the move list.
    pub fn moves(&self) -> Vec<MoveEntry> {
        self.game.moves()
    }

    /// Mark colours.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Whether empty cells show their key hint.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(c @ '1'..='9') => {
                let cell = c as usize - '1' as usize;
                self.place(cell);
            }
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.game.step_number());
            }
            KeyCode::Enter => self.jump(self.selected),
            _ => {}
        }
        Flow::Continue
    }

    /// Places the next mark in `cell` (0-8).
    pub fn place(&mut self, cell: usize) {
        debug!(cell, "Placing mark");
        self.game = self.game.apply_move(cell);
        self.selected = self.game.step_number();
    }

    /// Jumps to `step` in the move list.
    pub fn jump(&mut self, step: usize) {
        debug!(step, "Jumping");
        self.game = self.game.jump_to(step);
        self.selected = self.game.step_number();
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameState::new();
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_timeline::{Player, Square, Status};

    fn app() -> App {
        App::new(Palette::default(), true)
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), Flow::Continue);
        }
    }

    #[test]
    fn test_digit_keys_place_marks() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1')]);
        let board = app.game().current();
        assert_eq!(board[4], Square::Occupied(Player::X));
        assert_eq!(board[0], Square::Occupied(Player::O));
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.game().step_number(), 1);
    }

    #[test]
    fn test_selection_and_jump() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('2'),
                KeyCode::Char('3'),
                KeyCode::Up,
                KeyCode::Up,
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.game().step_number(), 1);
        assert_eq!(app.game().status(), Status::NextPlayer(Player::O));
        assert_eq!(app.moves().len(), 2);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = app();
        press(&mut app, &[KeyCode::Up, KeyCode::Char('1'), KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('9'), KeyCode::Char('r')]);
        assert_eq!(app.game(), &GameState::new());
        assert_eq!(app.selected(), 0);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Flow::Quit);
    }
}
