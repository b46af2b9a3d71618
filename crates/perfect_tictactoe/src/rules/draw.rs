//! Full-board and terminal status logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::{Board, Player, Square, TerminalStatus};

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Terminal status in priority order: Human line, Computer line, full board.
///
/// A board that is both full and won reports the win.
pub fn status(board: &Board) -> TerminalStatus {
    match check_winner(board) {
        Some(Player::Human) => TerminalStatus::HumanWin,
        Some(Player::Computer) => TerminalStatus::ComputerWin,
        None if is_full(board) => TerminalStatus::Draw,
        None => TerminalStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert_eq!(status(&Board::new()), TerminalStatus::InProgress);
    }

    #[test]
    fn test_partial_board_not_full() {
        let b = board("..../X..../");
        assert!(!is_full(&b));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let b = board("XOX/OXX/OXO");
        assert!(is_full(&b));
        assert_eq!(status(&b), TerminalStatus::Draw);
    }

    #[test]
    fn test_full_and_won_is_a_win() {
        // O completes the bottom row with the last cell.
        let b = board("XXO/OXX/OOO");
        assert!(is_full(&b));
        assert_eq!(status(&b), TerminalStatus::ComputerWin);
    }

    #[test]
    fn test_human_win_in_progress_board() {
        let b = board("XXX/OO./...");
        assert_eq!(status(&b), TerminalStatus::HumanWin);
    }
}
