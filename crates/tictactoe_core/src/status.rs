//! Status message selector for the display layer.

use super::game::{Game, GamePhase};
use super::types::Player;
use serde::{Deserialize, Serialize};

/// The status line to show for a game state.
///
/// The core selects which message applies; the display layer decides
/// how (and in which language) to present it. The `Display` impl
/// provides the default English strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusMessage {
    /// X to move.
    XTurn,
    /// O to move.
    OTurn,
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
    /// Board full, no line.
    Draw,
}

impl StatusMessage {
    /// Selects the message for the given game.
    pub fn for_game(game: &Game) -> Self {
        match game.phase() {
            GamePhase::InProgress => match game.to_move() {
                Player::X => StatusMessage::XTurn,
                Player::O => StatusMessage::OTurn,
            },
            GamePhase::Won { winner, .. } => match winner {
                Player::X => StatusMessage::XWins,
                Player::O => StatusMessage::OWins,
            },
            GamePhase::Draw => StatusMessage::Draw,
        }
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            StatusMessage::XTurn => "Player X's turn",
            StatusMessage::OTurn => "Player O's turn",
            StatusMessage::XWins => "Player X wins!",
            StatusMessage::OWins => "Player O wins!",
            StatusMessage::Draw => "It's a draw!",
        };
        write!(f, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_messages() {
        let mut game = Game::new();
        assert_eq!(StatusMessage::for_game(&game), StatusMessage::XTurn);
        game.apply_move(4).expect("legal move");
        assert_eq!(StatusMessage::for_game(&game), StatusMessage::OTurn);
    }

    #[test]
    fn test_win_message() {
        let mut game = Game::new();
        for cell in [0, 3, 1, 4, 2] {
            game.apply_move(cell).expect("legal move");
        }
        assert_eq!(StatusMessage::for_game(&game), StatusMessage::XWins);
        assert_eq!(StatusMessage::XWins.to_string(), "Player X wins!");
    }
}
