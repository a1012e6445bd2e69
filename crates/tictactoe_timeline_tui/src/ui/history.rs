//! Move-list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use tictactoe_timeline::MoveEntry;

/// Renders one row per jump target, highlighting `selected`.
pub fn render_history(f: &mut Frame, area: Rect, moves: &[MoveEntry], selected: usize) {
    let items: Vec<ListItem> = moves
        .iter()
        .map(|entry| ListItem::new(format!("{}. {}", entry.step + 1, entry.label())))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Moves"))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}
