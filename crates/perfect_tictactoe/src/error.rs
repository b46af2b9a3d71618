//! Engine error types.

use crate::types::Player;
use derive_more::{Display, Error};
use tracing::instrument;

/// The kinds of contract violation the engine reports.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// Cell index outside 0..=8.
    #[display("Cell index {} is outside 0..=8", _0)]
    InvalidIndex(usize),

    /// Placing a mark into a cell that already holds one.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// Search invoked on a full or already decided board.
    #[display("No legal move: the board is full or the game is decided")]
    NoLegalMove,

    /// A move was attempted after the game ended.
    #[display("Game is already over")]
    GameOver,

    /// The given side tried to move when it was not its turn.
    #[display("It's not {}'s turn", _0)]
    OutOfTurn(Player),

    /// Board text could not be parsed.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// What went wrong.
    kind: EngineErrorKind,
    /// Line number where error occurred.
    line: u32,
    /// Source file where error occurred.
    file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }
}

impl From<EngineErrorKind> for EngineError {
    #[track_caller]
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
