//! Keyboard handling: cursor movement and key-to-command mapping.

use crossterm::event::KeyCode;
use perfect_tictactoe::Position;

/// What a key press asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor.
    Cursor(KeyCode),
    /// Place at the cursor.
    PlaceAtCursor,
    /// Place at a specific cell (0-8).
    Place(usize),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

impl Command {
    /// Maps a key to a command, if it has one.
    ///
    /// Digits `1`-`9` pick cells in reading order.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                Some(Command::Cursor(key))
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map(|digit| Command::Place(digit as usize - 1)),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}
