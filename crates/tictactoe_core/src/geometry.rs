//! Winning-line geometry: mapping a win line to screen coordinates.
//!
//! The core never measures anything itself. The display layer lays out
//! the 9 cells, then reports each cell's center point into a
//! [`CellCenters`] table. Once the endpoints of a [`WinLine`] are known
//! the line can be rendered as a straight segment between them.

use super::line::WinLine;
use super::position::Position;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A point in screen coordinates, supplied by the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, new)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

/// Per-cell center lookup, filled by the display layer after layout.
///
/// Starts empty; the display layer calls [`CellCenters::set`] once its
/// grid has been measured. Until then geometry queries report
/// [`NotReady`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellCenters {
    centers: [Option<Point>; 9],
}

impl CellCenters {
    /// Creates an empty table (no layout reported yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the center point of a cell.
    pub fn set(&mut self, pos: Position, center: Point) {
        self.centers[pos.to_index()] = Some(center);
    }

    /// Returns the recorded center of a cell, if any.
    pub fn get(&self, pos: Position) -> Option<Point> {
        self.centers[pos.to_index()]
    }

    /// Whether every cell has a recorded center.
    pub fn is_complete(&self) -> bool {
        self.centers.iter().all(|c| c.is_some())
    }

    /// Forgets all recorded centers (e.g. after a resize).
    pub fn clear(&mut self) {
        self.centers = [None; 9];
    }
}

/// Geometry was requested before layout supplied the needed centers.
///
/// The display layer should retry after its layout pass completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Center of {} not reported yet; layout has not completed", missing.label())]
pub struct NotReady {
    /// The first endpoint cell whose center is missing.
    pub missing: Position,
}

impl std::error::Error for NotReady {}

/// Resolves a win line to its two on-screen endpoints.
///
/// Only the centers of the line's first and last cell are required:
/// every win line is a collinear triple on a regular grid, so the
/// straight segment between the endpoints passes through the middle
/// cell on its own.
///
/// # Errors
///
/// Returns [`NotReady`] naming the first endpoint whose center the
/// display layer has not reported.
#[instrument(skip(centers))]
pub fn endpoints_for(line: WinLine, centers: &CellCenters) -> Result<(Point, Point), NotReady> {
    let start = centers
        .get(line.start())
        .ok_or(NotReady { missing: line.start() })?;
    let end = centers
        .get(line.end())
        .ok_or(NotReady { missing: line.end() })?;
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Synthetic layout: cell (row, col) centered at (col * 100 + 50, row * 100 + 50).
    fn synthetic_centers() -> CellCenters {
        let mut centers = CellCenters::new();
        for pos in Position::ALL {
            let x = pos.col() as f32 * 100.0 + 50.0;
            let y = pos.row() as f32 * 100.0 + 50.0;
            centers.set(pos, Point::new(x, y));
        }
        centers
    }

    #[test]
    fn test_not_ready_when_empty() {
        let centers = CellCenters::new();
        let line = WinLine::ALL[0];
        let err = endpoints_for(line, &centers).expect_err("no layout yet");
        assert_eq!(err.missing, line.start());
    }

    #[test]
    fn test_main_diagonal_endpoints() {
        let centers = synthetic_centers();
        let (start, end) = endpoints_for(WinLine::ALL[6], &centers).expect("layout complete");
        assert_eq!(start, Point::new(50.0, 50.0));
        assert_eq!(end, Point::new(250.0, 250.0));
    }

    #[test]
    fn test_middle_center_not_required() {
        let mut centers = synthetic_centers();
        // Drop the center cell; the diagonal only needs its endpoints.
        centers.centers[Position::Center.to_index()] = None;
        let (start, end) = endpoints_for(WinLine::ALL[6], &centers).expect("endpoints present");
        assert_eq!(start, Point::new(50.0, 50.0));
        assert_eq!(end, Point::new(250.0, 250.0));
    }

    #[test]
    fn test_missing_end_reported() {
        let mut centers = synthetic_centers();
        centers.centers[Position::BottomRight.to_index()] = None;
        let err = endpoints_for(WinLine::ALL[6], &centers).expect_err("end missing");
        assert_eq!(err.missing, Position::BottomRight);
    }

    #[test]
    fn test_completeness_tracking() {
        let mut centers = CellCenters::new();
        assert!(!centers.is_complete());
        for pos in Position::ALL {
            centers.set(pos, Point::new(0.0, 0.0));
        }
        assert!(centers.is_complete());
        centers.clear();
        assert!(!centers.is_complete());
    }
}
