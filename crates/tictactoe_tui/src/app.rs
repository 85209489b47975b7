//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_core::{
    CellCenters, Game, GamePhase, MoveError, Point, Position, StatusMessage, endpoints_for,
};
use tracing::{debug, instrument, warn};

use crate::ui::BoardLayout;

/// Main application state.
///
/// Owns the game engine plus the pieces of display state the core
/// deliberately does not: the cursor, the cell-center table reported by
/// the layout pass, and the resolved winning-line endpoints.
pub struct App {
    game: Game,
    cursor: Position,
    centers: CellCenters,
    win_endpoints: Option<(Point, Point)>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            centers: CellCenters::new(),
            win_endpoints: None,
            should_quit: false,
        }
    }

    /// The game engine.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The currently highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Endpoints of the winning line, once geometry resolved them.
    pub fn win_endpoints(&self) -> Option<(Point, Point)> {
        self.win_endpoints
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line for the current state, with key hints after game end.
    pub fn status_line(&self) -> String {
        let message = StatusMessage::for_game(&self.game);
        match self.game.phase() {
            GamePhase::InProgress => message.to_string(),
            _ => format!("{message}  Press 'r' to play again, 'q' to quit."),
        }
    }

    /// Called after each layout pass with the measured cell grid.
    ///
    /// This is the layout-ready signal: it refreshes the cell-center
    /// table and, if the game is won, resolves the winning line to its
    /// two endpoints. A `NotReady` result leaves the overlay pending
    /// until the next pass supplies the missing centers.
    #[instrument(skip(self, layout))]
    pub fn on_layout(&mut self, layout: &BoardLayout) {
        self.centers = layout.centers();

        if let GamePhase::Won { line, .. } = self.game.phase() {
            match endpoints_for(line, &self.centers) {
                Ok(endpoints) => self.win_endpoints = Some(endpoints),
                Err(not_ready) => {
                    warn!(%not_ready, "Winning line overlay deferred");
                    self.win_endpoints = None;
                }
            }
        } else {
            self.win_endpoints = None;
        }
    }

    /// Called on terminal resize; stale coordinates are discarded until
    /// the next layout pass.
    pub fn on_resize(&mut self) {
        self.centers.clear();
        self.win_endpoints = None;
    }

    /// Handles a key press.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                debug!("Play again requested");
                self.game.reset();
                self.win_endpoints = None;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.place_at(self.cursor),
            _ => {}
        }
    }

    /// Handles a mouse event: a left click on a cell places a mark.
    #[instrument(skip(self, mouse, layout))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: Option<&BoardLayout>) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(layout) = layout else {
            return;
        };
        if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
            self.cursor = pos;
            self.place_at(pos);
        }
    }

    fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let row = self.cursor.row() as i32 + d_row;
        let col = self.cursor.col() as i32 + d_col;
        if row >= 0
            && col >= 0
            && let Some(pos) = Position::from_row_col(row as usize, col as usize)
        {
            self.cursor = pos;
        }
    }

    fn place_at(&mut self, pos: Position) {
        match self.game.place(pos) {
            Ok(outcome) => debug!(position = %pos, ?outcome, "Move applied"),
            // Rejected moves are no-ops; the board already shows why.
            Err(MoveError::GameNotActive | MoveError::CellOccupied(_)) => {}
            Err(err) => warn!(%err, "Unexpected move rejection"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
