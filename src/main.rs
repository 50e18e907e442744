//! Tally Tic-Tac-Toe - terminal host
//!
//! Drives the engine from stdin or a scripted move list and draws it with
//! the plain-text display.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::io::BufRead;
use std::path::Path;
use tally_tictactoe::{
    Cell, DisplayAdapter, EngineConfig, Frontend, GameEngine, MoveError, Player, TextDisplay,
    Weights,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(cli.config.as_deref(), cli.json),
        Command::Replay { cells } => run_replay(cli.config.as_deref(), &cells, cli.json),
        Command::CheckWeights { first, second } => run_check_weights(first, second),
    }
}

/// Builds the frontend from an optional config file.
#[instrument]
fn build_frontend(config: Option<&Path>) -> Result<Frontend<TextDisplay>> {
    let config = match config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = GameEngine::with_config(&config).context("Invalid engine config")?;
    Ok(Frontend::new(engine, TextDisplay::new()))
}

/// Prints the board, plus a JSON snapshot when requested.
fn show(frontend: &Frontend<TextDisplay>, json: bool) -> Result<()> {
    println!("{}\n", frontend.display());
    if json {
        let snapshot = serde_json::to_string(&frontend.engine().snapshot())
            .context("Failed to serialize snapshot")?;
        println!("{snapshot}");
    }
    Ok(())
}

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Blank,
    Quit,
    Reset,
    Cell(Cell),
    Unknown,
}

impl Input {
    /// Cell numbers are 1-9, as drawn on the grid.
    fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Input::Blank,
            "q" | "quit" => Input::Quit,
            "r" | "reset" => Input::Reset,
            other => match other.parse::<usize>().ok().and_then(Cell::from_number) {
                Some(cell) => Input::Cell(cell),
                None => Input::Unknown,
            },
        }
    }
}

/// Rejection text using the number the player typed.
fn rejection_message(cell: Cell, error: MoveError) -> String {
    match error {
        MoveError::CellAlreadyOccupied(_) => format!("Cell {} is already occupied", cell.number()),
        other => other.to_string(),
    }
}

/// Interactive loop over stdin
#[instrument]
fn run_play(config: Option<&Path>, json: bool) -> Result<()> {
    let mut frontend = build_frontend(config)?;
    info!("Starting interactive game");
    show(&frontend, json)?;

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let input = Input::parse(&line);
        debug!(?input, "Input received");

        match input {
            Input::Blank => continue,
            Input::Quit => break,
            Input::Reset => frontend.on_reset(),
            Input::Cell(cell) => {
                if let Err(e) = frontend.on_activate(cell.index()) {
                    println!("{}", rejection_message(cell, e));
                    continue;
                }
            }
            Input::Unknown => {
                println!("Enter a cell number 1-9, `r` to reset or `q` to quit");
                continue;
            }
        }
        show(&frontend, json)?;
    }

    Ok(())
}

/// Applies a scripted move list
#[instrument(skip(cells), fields(moves = cells.len()))]
fn run_replay(config: Option<&Path>, cells: &[usize], json: bool) -> Result<()> {
    let mut frontend = build_frontend(config)?;
    replay(&mut frontend, cells)?;
    show(&frontend, json)
}

/// Plays cell numbers (1-9) in order, stopping at the first rejection.
fn replay<D: DisplayAdapter>(frontend: &mut Frontend<D>, cells: &[usize]) -> Result<()> {
    for (turn, &number) in cells.iter().enumerate() {
        let Some(cell) = Cell::from_number(number) else {
            bail!(
                "Move {} (cell {}) is not a cell number 1-9",
                turn + 1,
                number
            );
        };
        if let Err(e) = frontend.on_activate(cell.index()) {
            bail!("Move {} rejected: {}", turn + 1, rejection_message(cell, e));
        }
    }
    Ok(())
}

/// Validates a weight pair and reports the winning sums
#[instrument]
fn run_check_weights(first: u32, second: u32) -> Result<()> {
    println!("{}", weights_report(first, second)?);
    Ok(())
}

fn weights_report(first: u32, second: u32) -> Result<String> {
    let weights = Weights::new(first, second).context("Weights rejected")?;
    Ok(format!(
        "Weights {} and {} are safe: winning sums {} and {}",
        first,
        second,
        weights.winning_sum(Player::First),
        weights.winning_sum(Player::Second)
    ))
}
