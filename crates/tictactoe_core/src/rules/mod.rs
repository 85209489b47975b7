//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so they can be tested against synthetic boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Win, check_winner};
