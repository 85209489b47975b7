//! Game engine: move legality, turn order, and terminal-state detection.

use super::line::WinLine;
use super::position::Position;
use super::rules;
use super::types::{Board, Player, Square};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Game ended in a draw.
    Draw,
}

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new,
)]
pub struct Move {
    /// The player making the move.
    player: Player,
    /// The position where the player places their mark.
    position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Game continues with the next player.
    Continue,
    /// The move completed a line and won the game.
    Win {
        /// The winning player.
        winner: Player,
        /// The completed line, for the display layer to draw.
        line: WinLine,
    },
    /// The move filled the board with no line.
    Draw,
}

/// Error that can occur when validating or applying a move.
///
/// All variants are recoverable by the caller; the engine never
/// mutates state on a rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell index {_0} is out of range (must be 0-8)")]
    InvalidCell(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0.label())]
    CellOccupied(Position),

    /// The game has already ended in a win or draw.
    #[display("Game is already over")]
    GameNotActive,
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe game engine.
///
/// Owns the board, the turn, and the phase. The display layer feeds it
/// cell indices and projects the resulting state back onto the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    phase: GamePhase,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            phase: GamePhase::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next. On a won game this is still the
    /// winner: the winning move does not flip the turn.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the mark at the given cell index, if the index is in range.
    pub fn mark_at(&self, cell: usize) -> Option<Square> {
        Position::from_index(cell).map(|pos| self.board.get(pos))
    }

    /// Applies a move at the given cell index (0-8, row-major).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCell`] for an out-of-range index,
    /// otherwise whatever [`Game::place`] returns. State is untouched
    /// on any error.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, cell: usize) -> Result<MoveOutcome, MoveError> {
        let pos = Position::from_index(cell).ok_or(MoveError::InvalidCell(cell))?;
        self.place(pos)
    }

    /// Places the current player's mark at the given position.
    ///
    /// On success the engine evaluates the 8 win lines in fixed scan
    /// order, then draw. The turn flips only when the game continues.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameNotActive`] after a win or draw and
    /// [`MoveError::CellOccupied`] for a taken square.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if self.phase != GamePhase::InProgress {
            return Err(MoveError::GameNotActive);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        debug!(%player, position = %pos, "Placed mark");

        if let Some(win) = rules::check_winner(&self.board) {
            let (winner, line) = (*win.winner(), *win.line());
            self.phase = GamePhase::Won { winner, line };
            debug!(%winner, %line, "Game won");
            return Ok(MoveOutcome::Win { winner, line });
        }

        if rules::is_full(&self.board) {
            self.phase = GamePhase::Draw;
            debug!("Game drawn");
            return Ok(MoveOutcome::Draw);
        }

        self.to_move = player.opponent();
        Ok(MoveOutcome::Continue)
    }

    /// Resets to the initial state: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.board.clear();
        self.to_move = Player::X;
        self.phase = GamePhase::InProgress;
        self.history.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
