//! Winning lines: the 8 collinear triples on the 3x3 grid.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A winning line: three collinear positions.
///
/// The 8 possible lines are fixed at compile time in [`WinLine::ALL`].
/// Cells are ordered so that [`WinLine::start`] and [`WinLine::end`]
/// are the geometric endpoints of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    cells: [Position; 3],
}

impl WinLine {
    const fn new(cells: [Position; 3]) -> Self {
        Self { cells }
    }

    /// All 8 winning lines in scan order: rows top-to-bottom, columns
    /// left-to-right, main diagonal, anti diagonal. Win detection reports
    /// the first matching line in this order.
    pub const ALL: [WinLine; 8] = [
        // Rows
        WinLine::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        WinLine::new([
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ]),
        WinLine::new([
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ]),
        // Columns
        WinLine::new([
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ]),
        WinLine::new([
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ]),
        WinLine::new([
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ]),
        // Diagonals
        WinLine::new([Position::TopLeft, Position::Center, Position::BottomRight]),
        WinLine::new([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three cells of this line.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// First cell of the line (a geometric endpoint).
    pub fn start(&self) -> Position {
        self.cells[0]
    }

    /// Last cell of the line (the other geometric endpoint).
    pub fn end(&self) -> Position {
        self.cells[2]
    }

    /// Whether the given position lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.cells[0], self.cells[1], self.cells[2]
        )
    }
}
