//! Alternating turn invariant: X and O strictly alternate.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: the move history strictly alternates X, O, X, ...
///
/// X always moves first, and no player moves twice in a row.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let mut expected = Player::X;

        for mov in game.history() {
            if *mov.player() != expected {
                return false;
            }
            expected = expected.opponent();
        }

        true
    }

    fn description() -> &'static str {
        "Moves strictly alternate between X and O, starting with X"
    }
}
