//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use timetravel_tictactoe::Position;

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board width including the two vertical separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Board height including the two horizontal separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board square.
    Cell(Position),
    /// The n-th visible move-list item, in display order.
    MoveItem(usize),
    /// The "Re-order moves" button.
    Reorder,
}

/// Areas of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered panel around the board.
    pub board_panel: Rect,
    /// The board grid itself, separators included.
    pub board: Rect,
    /// One rectangle per square, row-major.
    pub cells: [Rect; 9],
    /// Status line.
    pub status: Rect,
    /// Bordered move list.
    pub moves: Rect,
    /// One line per visible move-list item.
    pub move_items: Vec<Rect>,
    /// "Re-order moves" button.
    pub reorder: Rect,
    /// Key help line.
    pub help: Rect,
}

impl GameLayout {
    /// Lays out a frame of size `area` showing `item_count` move-list items.
    ///
    /// Items that do not fit in the move list get no rectangle.
    pub fn new(area: Rect, item_count: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(BOARD_HEIGHT + 2),
                Constraint::Length(3),
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH + 6), Constraint::Min(30)])
            .split(rows[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(body[1]);

        let board_panel = body[0];
        let board = center_rect(board_panel, BOARD_WIDTH, BOARD_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            Rect::new(
                board.x + pos.col() as u16 * (CELL_WIDTH + 1),
                board.y + pos.row() as u16 * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board)
        });

        let moves = info[1];
        let list = moves.inner(Margin::new(1, 1));
        let move_items = (0..item_count.min(list.height as usize))
            .map(|i| Rect::new(list.x, list.y + i as u16, list.width, 1))
            .collect();

        Self {
            title: rows[0],
            board_panel,
            board,
            cells,
            status: info[0],
            moves,
            move_items,
            reorder: info[2],
            help: rows[2],
        }
    }

    /// Returns what lies under terminal cell (`column`, `row`).
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let point = ratatui::layout::Position::new(column, row);
        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.to_index()].contains(point))
        {
            return Some(Hit::Cell(pos));
        }
        if let Some(index) = self.move_items.iter().position(|r| r.contains(point)) {
            return Some(Hit::MoveItem(index));
        }
        if self.reorder.contains(point) {
            return Some(Hit::Reorder);
        }
        None
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
