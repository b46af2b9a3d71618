//! Tic-tac-toe against a perfect-play computer, in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use perfect_tictactoe_tui::{App, Cli, Settings, ui};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Instant;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)
        .context("Failed to load settings")?
        .with_overrides(&cli);

    init_tracing(&settings)?;
    info!(?settings, "Starting tic-tac-toe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, &settings);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Logs to a file so output does not corrupt the alternate screen.
fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(&settings.log_file).with_context(|| {
        format!("Failed to create log file {}", settings.log_file.display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Draws, waits for a key or the computer's deadline, repeats.
#[instrument(skip_all)]
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, settings: &Settings) -> Result<()> {
    let mut app = App::new(settings, Instant::now());

    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code, Instant::now());
        }
        app.tick(Instant::now());
    }

    Ok(())
}
