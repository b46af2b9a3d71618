//! Terminal controller for playing tic-tac-toe against the perfect-play
//! engine in [`perfect_tictactoe`].
//!
//! The controller owns the live [`Game`](perfect_tictactoe::Game), turns key
//! presses into human moves and asks the engine for the computer's reply
//! after a short pacing delay.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod input;
pub mod settings;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use settings::{FirstPlayer, Settings, SettingsError};
