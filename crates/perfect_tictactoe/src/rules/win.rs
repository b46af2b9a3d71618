//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};

/// The 8 winning triples: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// True iff `player` holds all three cells of some line.
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    let squares = board.squares();
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| squares[index] == mark))
}

/// Returns the player with a completed line.
///
/// Human is checked before Computer, matching the terminal priority used by
/// the search.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|&player| has_line(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_line(&board, Player::Human));
        assert!(!has_line(&board, Player::Computer));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            for player in [Player::Human, Player::Computer] {
                let mut b = Board::new();
                for index in line {
                    b.place(index, player).unwrap();
                }
                assert!(has_line(&b, player), "line {line:?} for {player}");
                assert!(!has_line(&b, player.opponent()));
                assert_eq!(check_winner(&b), Some(player));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let b = board("XXO/.../...");
        assert!(!has_line(&b, Player::Human));
        assert!(!has_line(&b, Player::Computer));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let b = board("XX./OO./...");
        assert_eq!(check_winner(&b), None);
    }

    #[test]
    fn test_diagonal() {
        let b = board("..O/.O./OXX");
        assert!(has_line(&b, Player::Computer));
        assert!(!has_line(&b, Player::Human));
    }
}
