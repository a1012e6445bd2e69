//! Tic-tac-toe board rendering.

use crate::config::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tictactoe_timeline::{Board, Player, Square};

/// How to draw the marks on a board.
#[derive(Debug, Clone, Copy)]
pub struct BoardStyle {
    /// Mark colours.
    pub palette: Palette,
    /// Show 1-9 hints in empty cells.
    pub show_cell_numbers: bool,
    /// Cells to highlight as the winning line.
    pub winning_line: Option<[usize; 3]>,
    /// Grey out marks (full board, no winner).
    pub dimmed: bool,
}

/// Renders the tic-tac-toe board centered in `area`.
pub fn render_board(f: &mut Frame, area: Rect, board: &Board, style: &BoardStyle) {
    let board_area = center_rect(area, 29, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], board, 0, style);
    render_separator(f, rows[1]);
    render_row(f, rows[2], board, 3, style);
    render_separator(f, rows[3]);
    render_row(f, rows[4], board, 6, style);
}

fn render_row(f: &mut Frame, area: Rect, board: &Board, start: usize, style: &BoardStyle) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    render_square(f, cols[0], board, start, style);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], board, start + 1, style);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], board, start + 2, style);
}

fn render_square(f: &mut Frame, area: Rect, board: &Board, pos: usize, style: &BoardStyle) {
    let (text, mut cell_style) = match board[pos] {
        Square::Empty if style.show_cell_numbers => (
            format!("{}", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(player) => {
            let color = match player {
                Player::X => style.palette.x,
                Player::O => style.palette.o,
            };
            (
                player.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };
    if style.dimmed {
        cell_style = cell_style.fg(Color::DarkGray);
    }
    if style.winning_line.is_some_and(|line| line.contains(&pos)) {
        cell_style = cell_style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the mark in a 3-line cell.
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(cell_style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
