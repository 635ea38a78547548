//! Move list and re-order button rendering.

use super::layout::GameLayout;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use timetravel_tictactoe::{MoveListItem, MoveOrder};

/// Renders the move list, styling the displayed step and the list cursor.
///
/// Items before `offset` are scrolled out of view. `cursor` indexes the
/// full list.
pub fn render_moves(
    frame: &mut Frame,
    layout: &GameLayout,
    items: &[MoveListItem],
    order: MoveOrder,
    offset: usize,
    cursor: Option<usize>,
) {
    let title = match order {
        MoveOrder::Ascending => "Moves (oldest first)",
        MoveOrder::Descending => "Moves (latest first)",
    };

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(layout.move_items.len())
        .map(|(index, item)| {
            let mut style = if item.selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if cursor == Some(index) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let marker = if item.selected { "> " } else { "  " };
            Line::from(vec![Span::raw(marker), Span::styled(item.label.as_str(), style)])
        })
        .collect();

    let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, layout.moves);

    let button = Paragraph::new("Re-order moves")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, layout.reorder);
}
