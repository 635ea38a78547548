//! UI rendering using ratatui.

mod board;
mod layout;
mod moves;

pub use board::render_board;
pub use layout::{BOARD_HEIGHT, BOARD_WIDTH, GameLayout, Hit};
pub use moves::render_moves;

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use timetravel_tictactoe::{Status, move_list};

/// Draws the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let state = app.state();
    let items = move_list(state);
    let layout = GameLayout::new(frame.area(), items.len());

    let title = Paragraph::new("Tic-Tac-Toe - Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let board_cursor = (app.focus() == Focus::Board).then(|| app.cursor());
    render_board(frame, &layout, state, board_cursor);

    let status = state.status();
    let status_style = match status {
        Status::Next(_) => Style::default().fg(Color::Yellow),
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    };
    let status = Paragraph::new(status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    let list_cursor = (app.focus() == Focus::History).then(|| app.history_cursor());
    render_moves(
        frame,
        &layout,
        &items,
        state.order(),
        app.list_offset(layout.move_items.len()),
        list_cursor,
    );

    let help = Paragraph::new(
        "Click or 1-9 / arrows+Enter: move | Tab: history | O: re-order | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}
