//! Pure tic-tac-toe game logic and winning-line geometry.
//!
//! This crate owns the rules of the game and nothing else: it consumes
//! "cell clicked" events carrying a cell index and produces typed
//! outcomes for the display layer to render. The one geometric concern,
//! turning a winning triple into two screen-space endpoints, lives in
//! [`geometry`] and depends only on coordinates the display layer
//! reports after laying out its grid.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, MoveOutcome};
//!
//! let mut game = Game::new();
//! for cell in [0, 1, 4, 2] {
//!     game.apply_move(cell)?;
//! }
//! // X completes the main diagonal.
//! let outcome = game.apply_move(8)?;
//! assert!(matches!(outcome, MoveOutcome::Win { .. }));
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod geometry;
pub mod invariants;
mod line;
mod position;
pub mod rules;
mod status;
mod types;

pub use game::{Game, GamePhase, Move, MoveError, MoveOutcome};
pub use geometry::{CellCenters, NotReady, Point, endpoints_for};
pub use line::WinLine;
pub use position::Position;
pub use status::StatusMessage;
pub use types::{Board, Player, Square};
