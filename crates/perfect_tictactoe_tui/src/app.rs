//! Controller state: the live game, the cursor and the pacing timer.

use perfect_tictactoe::{Game, Player, Position, Searcher, TerminalStatus};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

use crate::input::{Command, move_cursor};
use crate::settings::Settings;

/// How long the event loop waits for input when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    status_message: String,
    delay: Duration,
    /// When set, the computer moves once this instant has passed.
    computer_due: Option<Instant>,
    quit: bool,
}

impl App {
    /// Creates a new application and starts the first game.
    #[instrument(skip(settings, now))]
    pub fn new(settings: &Settings, now: Instant) -> Self {
        let searcher = Searcher::new(settings.search);
        let mut app = Self {
            game: Game::with_searcher(settings.first_player.into(), searcher),
            cursor: Position::Center,
            status_message: String::new(),
            delay: settings.computer_delay(),
            computer_due: None,
            quit: false,
        };
        app.begin_turn(now);
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True while the computer's reply is pending.
    pub fn computer_thinking(&self) -> bool {
        self.computer_due.is_some()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Cell the computer played last, for highlighting.
    pub fn last_computer_move(&self) -> Option<usize> {
        self.game
            .history()
            .iter()
            .rev()
            .find(|mv| mv.player == Player::Computer)
            .map(|mv| mv.index)
    }

    /// How long the event loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.computer_due {
            Some(due) => due.saturating_duration_since(now),
            None => IDLE_POLL,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: crossterm::event::KeyCode, now: Instant) {
        let Some(command) = Command::from_key(key) else {
            return;
        };
        debug!(?command, "Handling command");
        match command {
            Command::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::PlaceAtCursor => self.place(self.cursor.to_index(), now),
            Command::Place(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.place(index, now);
            }
            Command::Restart => self.restart(now),
            Command::Quit => {
                info!("User quit");
                self.quit = true;
            }
        }
    }

    /// Plays the computer's move once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        match self.computer_due {
            Some(due) if now >= due => {
                self.computer_due = None;
                self.play_computer(now);
            }
            _ => {}
        }
    }

    /// Restarts the game.
    #[instrument(skip(self, now))]
    pub fn restart(&mut self, now: Instant) {
        debug!("Restarting game");
        self.game.restart();
        self.computer_due = None;
        self.cursor = Position::Center;
        self.begin_turn(now);
    }

    fn place(&mut self, index: usize, now: Instant) {
        if self.game.status().is_over() {
            self.status_message = "Game over. Press 'r' to play again or 'q' to quit.".to_string();
            return;
        }
        if self.computer_thinking() {
            self.status_message = "Wait for the computer to move.".to_string();
            return;
        }
        if matches!(self.game.board().is_occupied(index), Ok(true)) {
            self.status_message = "That cell is taken. Pick another.".to_string();
            return;
        }

        match self.game.human_move(index) {
            Ok(status) => {
                info!(index, %status, "Human moved");
                self.after_move(status, now);
            }
            Err(e) => {
                warn!(error = %e, index, "Move rejected");
                self.status_message = format!("Move rejected: {}", e.kind());
            }
        }
    }

    fn play_computer(&mut self, now: Instant) {
        match self.game.computer_move() {
            Ok((index, status)) => {
                info!(index, %status, "Computer moved");
                self.after_move(status, now);
            }
            Err(e) => {
                error!(error = %e, "Computer move failed");
                self.status_message = format!("Computer could not move: {}", e.kind());
            }
        }
    }

    fn after_move(&mut self, status: TerminalStatus, now: Instant) {
        if status.is_over() {
            self.status_message = format!(
                "{} Press 'r' to restart or 'q' to quit.",
                outcome_message(status)
            );
        } else {
            self.begin_turn(now);
        }
    }

    /// Sets up whoever is to move next.
    fn begin_turn(&mut self, now: Instant) {
        match self.game.to_move() {
            Player::Human => {
                self.status_message = "Your turn".to_string();
            }
            Player::Computer => {
                self.status_message = "Computer is thinking...".to_string();
                self.computer_due = Some(now + self.delay);
            }
        }
    }
}

fn outcome_message(status: TerminalStatus) -> &'static str {
    match status.winner() {
        Some(Player::Human) => "You win!",
        Some(Player::Computer) => "Computer wins!",
        None => "It's a draw.",
    }
}
