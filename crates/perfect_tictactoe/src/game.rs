//! Turn-level API used by controllers.

use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::search::Searcher;
use crate::types::{Board, Move, Player, TerminalStatus};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// Places Human's mark and reports the resulting status.
///
/// # Errors
///
/// `GameOver` if the board is already terminal, otherwise `InvalidIndex` or
/// `CellOccupied` from the board.
#[instrument(skip(board), fields(position = %board))]
pub fn apply_human_move(board: &mut Board, index: usize) -> EngineResult<TerminalStatus> {
    if board.status().is_over() {
        return Err(EngineError::new(EngineErrorKind::GameOver));
    }
    board.place(index, Player::Human)?;
    Ok(board.status())
}

/// Picks and places Computer's move with the default searcher.
///
/// Returns the chosen index and the resulting status.
///
/// # Errors
///
/// `NoLegalMove` if the board is already terminal.
pub fn apply_computer_move(board: &mut Board) -> EngineResult<(usize, TerminalStatus)> {
    apply_computer_move_with(&Searcher::default(), board)
}

/// Picks and places Computer's move with the given searcher.
#[instrument(skip(searcher, board), fields(position = %board))]
pub fn apply_computer_move_with(
    searcher: &Searcher,
    board: &mut Board,
) -> EngineResult<(usize, TerminalStatus)> {
    let index = searcher.best_move(board, Player::Computer)?;
    board.place(index, Player::Computer)?;
    Ok((index, board.status()))
}

/// A single game against the computer.
///
/// Owns the live board, tracks whose turn it is and records history.
#[derive(Debug, Clone, Getters)]
pub struct Game {
    /// The live board.
    board: Board,
    /// Side that opens each game.
    first: Player,
    /// Side to move next.
    to_move: Player,
    /// Current terminal status.
    status: TerminalStatus,
    /// Moves played since the last restart.
    history: Vec<Move>,
    /// Search used for the computer's moves.
    searcher: Searcher,
}

impl Game {
    /// Creates a new game with the default searcher.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self::with_searcher(first, Searcher::default())
    }

    /// Creates a new game with the given searcher.
    #[instrument]
    pub fn with_searcher(first: Player, searcher: Searcher) -> Self {
        Self {
            board: Board::new(),
            first,
            to_move: first,
            status: TerminalStatus::InProgress,
            history: Vec::new(),
            searcher,
        }
    }

    /// Plays Human's mark at `index`.
    ///
    /// # Errors
    ///
    /// `GameOver`, `OutOfTurn(Human)`, `InvalidIndex` or `CellOccupied`.
    #[instrument(skip(self), fields(position = %self.board))]
    pub fn human_move(&mut self, index: usize) -> EngineResult<TerminalStatus> {
        self.check_turn(Player::Human)?;
        let status = apply_human_move(&mut self.board, index)?;
        self.record(Move::new(Player::Human, index), status);
        Ok(status)
    }

    /// Lets the engine play Computer's move.
    ///
    /// Returns the chosen index and the resulting status.
    ///
    /// # Errors
    ///
    /// `GameOver` or `OutOfTurn(Computer)`.
    #[instrument(skip(self), fields(position = %self.board))]
    pub fn computer_move(&mut self) -> EngineResult<(usize, TerminalStatus)> {
        self.check_turn(Player::Computer)?;
        let (index, status) = apply_computer_move_with(&self.searcher, &mut self.board)?;
        self.record(Move::new(Player::Computer, index), status);
        Ok((index, status))
    }

    /// Clears the board and starts over with the same opening side.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.history.len(), "Restarting game");
        self.board.reset();
        self.to_move = self.first;
        self.status = TerminalStatus::InProgress;
        self.history.clear();
    }

    /// Most recent move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    fn check_turn(&self, player: Player) -> EngineResult<()> {
        if self.status.is_over() {
            return Err(EngineError::new(EngineErrorKind::GameOver));
        }
        if self.to_move != player {
            return Err(EngineError::new(EngineErrorKind::OutOfTurn(player)));
        }
        Ok(())
    }

    fn record(&mut self, mv: Move, status: TerminalStatus) {
        debug!(%mv, %status, "Move applied");
        self.history.push(mv);
        self.status = status;
        self.to_move = mv.player.opponent();
        if status.is_over() {
            info!(%status, moves = self.history.len(), "Game over");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::Human)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_move_reports_status() {
        let mut board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(
            apply_human_move(&mut board, 2).unwrap(),
            TerminalStatus::HumanWin
        );
    }

    #[test]
    fn test_human_move_after_game_over_fails() {
        let mut board: Board = "OOO/XX./...".parse().unwrap();
        let err = apply_human_move(&mut board, 5).unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::GameOver);
    }

    #[test]
    fn test_human_move_rejects_occupied_cell() {
        let mut board: Board = "O../.../...".parse().unwrap();
        let err = apply_human_move(&mut board, 0).unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::CellOccupied(0));
    }

    #[test]
    fn test_computer_move_completes_line() {
        let mut board: Board = "OO./XX./...".parse().unwrap();
        let (index, status) = apply_computer_move(&mut board).unwrap();
        assert_eq!(index, 2);
        assert_eq!(status, TerminalStatus::ComputerWin);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(Player::Human);
        let err = game.computer_move().unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::OutOfTurn(Player::Computer));

        game.human_move(4).unwrap();
        assert_eq!(*game.to_move(), Player::Computer);
        let err = game.human_move(0).unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::OutOfTurn(Player::Human));

        let (index, _) = game.computer_move().unwrap();
        assert_eq!(index, 0);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.last_move(), Some(Move::new(Player::Computer, 0)));
    }

    #[test]
    fn test_rejected_move_leaves_turn_unchanged() {
        let mut game = Game::new(Player::Human);
        game.human_move(4).unwrap();
        game.computer_move().unwrap();
        assert!(game.human_move(4).is_err());
        assert_eq!(*game.to_move(), Player::Human);
        assert_eq!(game.history().len(), 2);
    }
}
