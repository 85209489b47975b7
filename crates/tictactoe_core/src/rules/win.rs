//! Win detection logic for tic-tac-toe.

use super::super::line::WinLine;
use super::super::types::{Board, Player, Square};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A detected win: who won and along which line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new,
)]
pub struct Win {
    /// The winning player.
    winner: Player,
    /// The completed line.
    line: WinLine,
}

/// Checks if there is a winner on the board.
///
/// Scans [`WinLine::ALL`] in its fixed order and returns the first line
/// whose three squares are occupied by the same player. In legal play a
/// move completes at most one new line, so the order only matters for
/// boards injected from outside normal play.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    for line in WinLine::ALL {
        let [a, b, c] = line.cells();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(Win::new(player, line)),
                Square::Empty => None,
            };
        }
    }

    None
}
