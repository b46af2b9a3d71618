//! Tests for settings loading and CLI overrides.

use clap::Parser;
use perfect_tictactoe::{Scoring, SearchConfig, Strategy};
use perfect_tictactoe_tui::{Cli, FirstPlayer, Settings};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).expect("Load failed");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.computer_delay_ms, 400);
    assert_eq!(settings.first_player, FirstPlayer::Human);
}

#[test]
fn test_loads_full_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tictactoe.toml");
    fs::write(
        &path,
        r#"first_player = "computer"
computer_delay_ms = 0
log_file = "game.log"

[search]
scoring = "flat"
strategy = "alpha_beta"
"#,
    )
    .expect("Write failed");

    let settings = Settings::load_or_default(&path).expect("Load failed");
    assert_eq!(settings.first_player, FirstPlayer::Computer);
    assert_eq!(settings.computer_delay_ms, 0);
    assert_eq!(settings.log_file, PathBuf::from("game.log"));
    assert_eq!(
        settings.search,
        SearchConfig {
            scoring: Scoring::Flat,
            strategy: Strategy::AlphaBeta,
        }
    );
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tictactoe.toml");
    fs::write(&path, "[search]\nstrategy = \"alpha_beta\"\n").expect("Write failed");

    let settings = Settings::from_file(&path).expect("Load failed");
    assert_eq!(settings.search.strategy, Strategy::AlphaBeta);
    assert_eq!(settings.search.scoring, Scoring::DepthAdjusted);
    assert_eq!(settings.computer_delay_ms, 400);
}

#[test]
fn test_file_accepts_cli_spellings() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tictactoe.toml");
    fs::write(
        &path,
        "[search]\nscoring = \"depth-adjusted\"\nstrategy = \"alpha-beta\"\n",
    )
    .expect("Write failed");

    let settings = Settings::from_file(&path).expect("Load failed");
    assert_eq!(settings.search.scoring, Scoring::DepthAdjusted);
    assert_eq!(settings.search.strategy, Strategy::AlphaBeta);
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tictactoe.toml");
    fs::write(&path, "first_player = \"nobody\"").expect("Write failed");

    let err = Settings::load_or_default(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"), "{err}");
}

#[test]
fn test_cli_overrides_file_values() {
    let cli = Cli::try_parse_from([
        "tictactoe",
        "--first",
        "computer",
        "--delay-ms",
        "25",
        "--scoring",
        "flat",
        "--strategy",
        "alpha-beta",
    ])
    .expect("Parse failed");

    let settings = Settings::default().with_overrides(&cli);
    assert_eq!(settings.first_player, FirstPlayer::Computer);
    assert_eq!(settings.computer_delay_ms, 25);
    assert_eq!(settings.search.scoring, Scoring::Flat);
    assert_eq!(settings.search.strategy, Strategy::AlphaBeta);
    assert_eq!(settings.log_file, PathBuf::from("tictactoe.log"));
}

#[test]
fn test_cli_without_flags_changes_nothing() {
    let cli = Cli::try_parse_from(["tictactoe"]).expect("Parse failed");
    assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    assert_eq!(Settings::default().with_overrides(&cli), Settings::default());
}
