//! Core domain types for tic-tac-toe.

use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// A side in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// The person at the keyboard (minimizing side).
    Human,
    /// The engine (maximizing side).
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Symbol drawn for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Computer => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A cell goes from empty to marked once during play. The only ways back to
/// empty are [`Board::clear`] (search backtracking) and [`Board::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given index.
    #[track_caller]
    pub fn get(&self, index: usize) -> EngineResult<Square> {
        self.squares
            .get(index)
            .copied()
            .ok_or_else(|| EngineError::new(EngineErrorKind::InvalidIndex(index)))
    }

    /// Gets the square at a named position.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns true if the cell holds either player's mark.
    #[track_caller]
    pub fn is_occupied(&self, index: usize) -> EngineResult<bool> {
        Ok(self.get(index)? != Square::Empty)
    }

    /// Writes `player`'s mark into an empty cell.
    #[track_caller]
    pub fn place(&mut self, index: usize, player: Player) -> EngineResult<()> {
        if self.is_occupied(index)? {
            return Err(EngineError::new(EngineErrorKind::CellOccupied(index)));
        }
        self.squares[index] = Square::Occupied(player);
        Ok(())
    }

    /// Resets a cell to empty.
    #[track_caller]
    pub fn clear(&mut self, index: usize) -> EngineResult<()> {
        let square = self
            .squares
            .get_mut(index)
            .ok_or_else(|| EngineError::new(EngineErrorKind::InvalidIndex(index)))?;
        *square = Square::Empty;
        Ok(())
    }

    /// Resets every cell to empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELLS];
    }

    /// All empty cell indices in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// True iff some line holds three of `player`'s marks.
    pub fn has_line(&self, player: Player) -> bool {
        rules::has_line(self, player)
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Terminal status of the position.
    pub fn status(&self) -> TerminalStatus {
        rules::status(self)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, square) in self.squares.iter().enumerate() {
            if index > 0 && index % 3 == 0 {
                writeln!(f)?;
            }
            let symbol = square.player().map_or('.', Player::symbol);
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Parses nine cells: `X` for Human, `O` for Computer, `.`, `_`, `-` or a
/// space for empty. Newlines and `/` between rows are ignored.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(CELLS);
        for c in s.chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::Human),
                'O' | 'o' => Square::Occupied(Player::Computer),
                '.' | '_' | '-' | ' ' => Square::Empty,
                '/' | '\n' | '\r' => continue,
                other => {
                    return Err(EngineError::new(EngineErrorKind::InvalidBoard(format!(
                        "unexpected character {other:?}"
                    ))));
                }
            };
            squares.push(square);
        }
        let squares: [Square; CELLS] = squares.try_into().map_err(|cells: Vec<Square>| {
            EngineError::new(EngineErrorKind::InvalidBoard(format!(
                "expected {CELLS} cells, found {}",
                cells.len()
            )))
        })?;
        Ok(Self { squares })
    }
}

/// Whether the game has concluded, and how.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum TerminalStatus {
    /// Moves remain and nobody has a line.
    #[default]
    InProgress,
    /// Human completed a line.
    HumanWin,
    /// Computer completed a line.
    ComputerWin,
    /// Board full with no line.
    Draw,
}

impl TerminalStatus {
    /// True for every status except `InProgress`.
    pub fn is_over(self) -> bool {
        self != TerminalStatus::InProgress
    }

    /// Winning player, if the game was won.
    pub fn winner(self) -> Option<Player> {
        match self {
            TerminalStatus::HumanWin => Some(Player::Human),
            TerminalStatus::ComputerWin => Some(Player::Computer),
            TerminalStatus::InProgress | TerminalStatus::Draw => None,
        }
    }
}

/// A player placing their mark at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell index (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Position::from_index(self.index) {
            Some(pos) => write!(f, "{} -> {}", self.player, pos.label()),
            None => write!(f, "{} -> {}", self.player, self.index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_indices(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        board.place(4, Player::Human).unwrap();
        assert!(board.is_occupied(4).unwrap());
        assert_eq!(board.get(4).unwrap(), Square::Occupied(Player::Human));

        board.clear(4).unwrap();
        assert!(!board.is_occupied(4).unwrap());
    }

    #[test]
    fn test_place_into_occupied_cell_fails() {
        let mut board = Board::new();
        board.place(0, Player::Computer).unwrap();
        let err = board.place(0, Player::Human).unwrap_err();
        assert_eq!(err.kind(), &EngineErrorKind::CellOccupied(0));
        assert_eq!(board.get(0).unwrap(), Square::Occupied(Player::Computer));
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let mut board = Board::new();
        assert_eq!(
            board.is_occupied(9).unwrap_err().kind(),
            &EngineErrorKind::InvalidIndex(9)
        );
        assert_eq!(
            board.place(12, Player::Human).unwrap_err().kind(),
            &EngineErrorKind::InvalidIndex(12)
        );
        assert_eq!(
            board.clear(9).unwrap_err().kind(),
            &EngineErrorKind::InvalidIndex(9)
        );
    }

    #[test]
    fn test_empty_indices_ascending() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        assert_eq!(board.empty_indices(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_spaces_are_empty_cells() {
        let board: Board = "XO       ".parse().unwrap();
        assert_eq!(board.get(0).unwrap(), Square::Occupied(Player::Human));
        assert_eq!(board.get(1).unwrap(), Square::Occupied(Player::Computer));
        assert_eq!(board.empty_indices(), (2..9).collect::<Vec<_>>());

        let rows: Board = "X O\n   \nO X".parse().unwrap();
        assert_eq!(rows, "X.O/.../O.X".parse().unwrap());

        // A space is a cell, so padding around separators changes the count.
        assert!(matches!(
            "XO. / .X. / ..O".parse::<Board>().unwrap_err().kind(),
            EngineErrorKind::InvalidBoard(_)
        ));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "XO".parse::<Board>().unwrap_err().kind(),
            EngineErrorKind::InvalidBoard(_)
        ));
        assert!(matches!(
            "XO.Z.....".parse::<Board>().unwrap_err().kind(),
            EngineErrorKind::InvalidBoard(_)
        ));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board: Board = "XOX/OXO/OXO".parse().unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(TerminalStatus::HumanWin.winner(), Some(Player::Human));
        assert_eq!(TerminalStatus::ComputerWin.winner(), Some(Player::Computer));
        assert_eq!(TerminalStatus::Draw.winner(), None);
        assert_eq!(TerminalStatus::InProgress.winner(), None);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Human.opponent(), Player::Computer);
        assert_eq!(Player::Computer.opponent(), Player::Human);
    }
}
