//! Tic-tac-toe against a perfect-play computer opponent.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], a 9-cell grid with pure queries
//!   ([`Board::has_line`], [`Board::is_full`], [`Board::empty_indices`]) and
//!   checked mutation ([`Board::place`], [`Board::clear`]).
//! - **Search**: [`Searcher`] runs minimax over the full game tree and returns
//!   the optimal cell for the side to move, ties going to the lowest index.
//! - **Turns**: [`apply_human_move`], [`apply_computer_move`] and the
//!   [`Game`] value a controller owns.
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Game, Player, TerminalStatus};
//!
//! # fn example() -> perfect_tictactoe::EngineResult<()> {
//! let mut game = Game::new(Player::Human);
//! game.human_move(4)?;
//! let (reply, status) = game.computer_move()?;
//! assert_eq!(reply, 0);
//! assert_eq!(status, TerminalStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
pub mod rules;
mod search;
mod types;

pub use error::{EngineError, EngineErrorKind, EngineResult};
pub use game::{Game, apply_computer_move, apply_computer_move_with, apply_human_move};
pub use position::Position;
pub use search::{
    DRAW_SCORE, SearchConfig, SearchResult, Scoring, Searcher, Strategy, WIN_SCORE, best_move,
};
pub use types::{Board, CELLS, Move, Player, Square, TerminalStatus};

/// The occupying side of a cell.
pub type Mark = Player;
