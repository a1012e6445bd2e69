//! Stateless UI rendering.

mod board;
mod history;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_timeline::{Status, is_draw, winning_line};

/// Renders the whole screen: title, board, move list, status and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe Timeline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let game = app.game();
    let current = game.current();
    board::render_board(
        frame,
        body[0],
        current,
        &board::BoardStyle {
            palette: app.palette(),
            show_cell_numbers: app.show_cell_numbers(),
            winning_line: winning_line(current),
            dimmed: is_draw(current),
        },
    );
    history::render_history(frame, body[1], &app.moves(), app.selected());

    let status = game.status();
    let status_style = match status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status_text = Paragraph::new(status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new("1-9 place  ↑/↓ select  Enter jump  r restart  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_new_game_screen() {
        let app = App::new(Palette::default(), true);
        let screen = render(&app);
        assert!(screen.contains("Tic-Tac-Toe Timeline"));
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to game start"));
        assert!(!screen.contains("Go to move #1"));
    }

    #[test]
    fn test_winner_screen() {
        let mut app = App::new(Palette::default(), true);
        for key in ['1', '5', '2', '4', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move #5"));
    }
}
