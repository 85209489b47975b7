//! Stateless rendering: grid layout, marks, status, winning-line overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{CellCenters, Player, Point, Position, Square};

use crate::app::App;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// The measured cell grid from one layout pass.
///
/// Produced during rendering and handed back to the app afterwards: it
/// backs both mouse hit-testing and the cell-center table the geometry
/// mapper consumes.
#[derive(Debug, Clone)]
pub struct BoardLayout {
    cells: [(Position, Rect); 9],
}

impl BoardLayout {
    /// Builds the cell-center lookup for the geometry mapper.
    pub fn centers(&self) -> CellCenters {
        let mut centers = CellCenters::new();
        for (pos, rect) in &self.cells {
            let x = rect.x as f32 + rect.width as f32 / 2.0;
            let y = rect.y as f32 + rect.height as f32 / 2.0;
            centers.set(*pos, Point::new(x, y));
        }
        centers
    }

    /// Maps a terminal coordinate to the cell under it, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .find(|(_, rect)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(pos, _)| *pos)
    }
}

/// Renders one frame and returns the measured grid.
pub fn draw(frame: &mut Frame, app: &App) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let layout = draw_board(frame, chunks[1], app);

    if let Some((start, end)) = app.win_endpoints() {
        draw_winning_line(frame, start, end);
    }

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    layout
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> BoardLayout {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [(Position::TopLeft, Rect::default()); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }

        for col in 0..3 {
            let pos = Position::from_row_col(row, col).expect("row and col are in range");
            let rect = cols[col * 2];
            cells[pos.to_index()] = (pos, rect);
            draw_cell(frame, rect, app, pos);
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
    }

    BoardLayout { cells }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the symbol inside the cell.
    let text = format!("{}{}", "\n".repeat(CELL_HEIGHT as usize / 2), symbol);
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec!["│"; area.height as usize].join("\n"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// Draws the winning line between the two endpoints the geometry mapper
/// resolved, rasterized over the board with Bresenham's algorithm.
fn draw_winning_line(frame: &mut Frame, start: Point, end: Point) {
    let style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let (x0, y0) = (start.x.round() as i32, start.y.round() as i32);
    let (x1, y1) = (end.x.round() as i32, end.y.round() as i32);

    let glyph = if y0 == y1 {
        '─'
    } else if x0 == x1 {
        '│'
    } else if (x1 - x0).signum() == (y1 - y0).signum() {
        '╲'
    } else {
        '╱'
    };

    let buf = frame.buffer_mut();
    for (x, y) in bresenham(x0, y0, x1, y1) {
        if x >= 0
            && y >= 0
            && let Some(cell) = buf.cell_mut((x as u16, y as u16))
        {
            cell.set_char(glyph);
            cell.set_style(style);
        }
    }
}

/// Integer line rasterization between two terminal coordinates.
fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    let mut points = Vec::new();

    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bresenham_horizontal() {
        let points = bresenham(2, 5, 6, 5);
        assert_eq!(points, vec![(2, 5), (3, 5), (4, 5), (5, 5), (6, 5)]);
    }

    #[test]
    fn test_bresenham_diagonal() {
        let points = bresenham(0, 0, 3, 3);
        assert_eq!(points, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_bresenham_single_point() {
        assert_eq!(bresenham(4, 4, 4, 4), vec![(4, 4)]);
    }
}
