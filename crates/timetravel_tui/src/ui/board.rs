//! Tic-tac-toe board rendering.

use super::layout::{CELL_HEIGHT, CELL_WIDTH, GameLayout};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use timetravel_tictactoe::{GameState, Player, Position, Square};

/// Renders the board panel, highlighting the winning line and the cursor.
pub fn render_board(
    frame: &mut Frame,
    layout: &GameLayout,
    state: &GameState,
    cursor: Option<Position>,
) {
    let title = format!("Step {}", state.step());
    frame.render_widget(
        Block::default().borders(Borders::ALL).title(title),
        layout.board_panel,
    );

    let winning_line = state.winning_line();
    for pos in Position::ALL {
        let highlight = winning_line.is_some_and(|line| line.contains(pos));
        render_square(
            frame,
            layout.cells[pos.to_index()],
            state.board().get(pos),
            highlight,
            cursor == Some(pos),
        );
    }

    render_separators(frame, layout.board);
}

fn render_square(frame: &mut Frame, area: Rect, square: Square, highlight: bool, cursor: bool) {
    let (symbol, mut style) = match square {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if highlight {
        style = style.bg(Color::Green);
    }
    if cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let mut lines = vec![Line::from(""); CELL_HEIGHT as usize];
    lines[CELL_HEIGHT as usize / 2] = Line::from(symbol);
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separators(frame: &mut Frame, board: Rect) {
    let style = Style::default().fg(Color::DarkGray);
    for i in 1..3u16 {
        let y = board.y + i * (CELL_HEIGHT + 1) - 1;
        if y < board.bottom() {
            let sep = Paragraph::new("─".repeat(board.width as usize)).style(style);
            frame.render_widget(sep, Rect::new(board.x, y, board.width, 1));
        }

        let x = board.x + i * (CELL_WIDTH + 1) - 1;
        if x < board.right() {
            for row in 0..3u16 {
                let y = board.y + row * (CELL_HEIGHT + 1);
                let height = CELL_HEIGHT.min(board.bottom().saturating_sub(y));
                let sep = Paragraph::new(vec![Line::from("│"); height as usize]).style(style);
                frame.render_widget(sep, Rect::new(x, y, 1, height));
            }
        }
    }
}
