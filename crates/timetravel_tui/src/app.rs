//! Application state and input handling.

use crate::input::{digit_index, move_cursor};
use crate::ui::{GameLayout, Hit};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use timetravel_tictactoe::{GameState, Position, move_list};
use tracing::{debug, instrument};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Returns the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
///
/// Wraps the game state together with the view-only state of the front
/// end: cursors, focus and the size of the last drawn frame.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    focus: Focus,
    history_cursor: usize,
    area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `state`.
    #[instrument(skip(state))]
    pub fn new(state: GameState) -> Self {
        let mut app = Self {
            state,
            cursor: Position::Center,
            focus: Focus::Board,
            history_cursor: 0,
            area: Rect::default(),
            should_quit: false,
        };
        app.sync_history_cursor();
        app
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move-list cursor, as an index in display order.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Index of the first move-list item shown when `visible` rows fit.
    ///
    /// The list scrolls just far enough to keep the list cursor (when the
    /// list has focus) or the displayed step inside the panel.
    pub fn list_offset(&self, visible: usize) -> usize {
        if visible == 0 {
            return 0;
        }
        let anchor = match self.focus {
            Focus::History => self.history_cursor,
            Focus::Board => move_list(&self.state)
                .iter()
                .position(|item| item.selected)
                .unwrap_or(0),
        };
        anchor.saturating_sub(visible - 1)
    }

    /// Records the size of the frame being drawn, for mouse hit-testing.
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if let Some(index) = digit_index(key.code) {
            self.play(index);
            return;
        }

        match (key.code, self.focus) {
            (KeyCode::Char('q') | KeyCode::Esc, _) => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            (KeyCode::Char('o') | KeyCode::Char('O'), _) => self.toggle_order(),
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.focus = self.focus.toggle();
                self.sync_history_cursor();
            }
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => {
                self.play(self.cursor.to_index());
            }
            (KeyCode::Enter | KeyCode::Char(' '), Focus::History) => {
                self.jump_to_item(self.history_cursor);
            }
            (KeyCode::Up, Focus::History) => {
                self.history_cursor = self.history_cursor.saturating_sub(1);
            }
            (KeyCode::Down, Focus::History) => {
                let last = self.state.history().len() - 1;
                self.history_cursor = (self.history_cursor + 1).min(last);
            }
            (code, Focus::Board) => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    /// Handles a mouse event; only left clicks do anything.
    #[instrument(skip(self), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = GameLayout::new(self.area, self.state.history().len());
        match layout.hit(mouse.column, mouse.row) {
            Some(Hit::Cell(pos)) => {
                self.cursor = pos;
                self.focus = Focus::Board;
                self.play(pos.to_index());
            }
            Some(Hit::MoveItem(row)) => {
                let index = self.list_offset(layout.move_items.len()) + row;
                self.focus = Focus::History;
                self.jump_to_item(index);
            }
            Some(Hit::Reorder) => self.toggle_order(),
            None => debug!("Click outside any control"),
        }
    }

    fn play(&mut self, index: usize) {
        self.state = self.state.apply_move(index);
        self.sync_history_cursor();
    }

    fn jump_to_item(&mut self, index: usize) {
        if let Some(item) = move_list(&self.state).get(index) {
            self.state = self.state.jump_to(item.step);
            self.sync_history_cursor();
        }
    }

    fn toggle_order(&mut self) {
        self.state = self.state.toggle_order();
        self.sync_history_cursor();
    }

    /// Points the move-list cursor at the displayed step.
    fn sync_history_cursor(&mut self) {
        self.history_cursor = move_list(&self.state)
            .iter()
            .position(|item| item.selected)
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use timetravel_tictactoe::{MoveOrder, Player, Square, Status};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn sized_app() -> App {
        let mut app = App::new(GameState::new());
        app.resize(Rect::new(0, 0, 80, 24));
        app
    }

    #[test]
    fn test_digit_plays_move() {
        let mut app = sized_app();
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(
            app.state().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_cursor_and_enter_play_move() {
        let mut app = sized_app();
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.state().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = sized_app();
        for c in ['1', '4', '2'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.history_cursor(), 3);

        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().step(), 1);
        assert_eq!(app.state().history().len(), 4);
    }

    #[test]
    fn test_toggle_order_key_keeps_cursor_on_selected() {
        let mut app = sized_app();
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.history_cursor(), 1);
        app.handle_key(key(KeyCode::Char('o')));
        assert_eq!(app.state().order(), MoveOrder::Descending);
        assert_eq!(app.history_cursor(), 0);
    }

    #[test]
    fn test_click_cell_plays_move() {
        let mut app = sized_app();
        let layout = GameLayout::new(Rect::new(0, 0, 80, 24), 1);
        let cell = layout.cells[8];
        app.handle_mouse(click(cell.x + 1, cell.y + 1));
        assert_eq!(
            app.state().board().get(Position::BottomRight),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_click_move_item_and_reorder() {
        let mut app = sized_app();
        for c in ['1', '2', '3'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        let layout = GameLayout::new(Rect::new(0, 0, 80, 24), 4);

        let start = layout.move_items[0];
        app.handle_mouse(click(start.x + 3, start.y));
        assert_eq!(app.state().step(), 0);
        assert_eq!(app.state().status(), Status::Next(Player::X));

        let button = layout.reorder;
        app.handle_mouse(click(button.x + 1, button.y + 1));
        assert_eq!(app.state().order(), MoveOrder::Descending);

        // Latest move is now listed first.
        app.handle_mouse(click(start.x + 3, start.y));
        assert_eq!(app.state().step(), 3);
    }

    #[test]
    fn test_short_terminal_scrolls_move_list() {
        let area = Rect::new(0, 0, 80, 16);
        let mut app = App::new(GameState::new());
        app.resize(area);
        for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.state().history().len(), 10);

        let layout = GameLayout::new(area, 10);
        let visible = layout.move_items.len();
        assert!(visible > 0 && visible < 10);
        assert_eq!(app.list_offset(visible), 10 - visible);

        // The top visible row is an item past the start of the list.
        let top = layout.move_items[0];
        app.handle_mouse(click(top.x + 3, top.y));
        assert_eq!(app.state().step(), 10 - visible);
        assert_eq!(app.focus(), Focus::History);

        for _ in 0..20 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.history_cursor(), 9);
        assert_eq!(app.list_offset(visible), 10 - visible);

        for _ in 0..20 {
            app.handle_key(key(KeyCode::Up));
        }
        assert_eq!(app.history_cursor(), 0);
        assert_eq!(app.list_offset(visible), 0);

        let bottom = layout.move_items[visible - 1];
        app.handle_mouse(click(bottom.x + 3, bottom.y));
        assert_eq!(app.state().step(), visible - 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sized_app();
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_right_click_ignored() {
        let mut app = sized_app();
        let cell = GameLayout::new(Rect::new(0, 0, 80, 24), 1).cells[0];
        let mut event = click(cell.x + 1, cell.y + 1);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        app.handle_mouse(event);
        assert_eq!(app.state().history().len(), 1);
    }
}
