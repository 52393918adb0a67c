//! Tessera CLI - play the puzzle or run batch simulations.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Tessera - A deterministic sliding-tile merge puzzle engine
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// Side length of the grid (default: 4)
        #[arg(short, long, default_value = "4")]
        grid_size: usize,

        /// Tile value that wins the game (default: 1024)
        #[arg(short, long, default_value = "1024")]
        target: u32,

        /// Random seed (default: time-derived)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run mass parallel random playouts and aggregate statistics
    Sim {
        /// Number of games to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Side length of the grid (default: 4)
        #[arg(long, default_value = "4")]
        grid_size: usize,

        /// Tile value that wins the game (default: 1024)
        #[arg(short, long, default_value = "1024")]
        target: u32,

        /// Move cap per game (default: 10000)
        #[arg(short, long, default_value = "10000")]
        max_moves: u32,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::SimFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            grid_size,
            target,
            seed,
        } => cli::play::execute(grid_size, target, seed),

        Commands::Sim {
            games,
            seed,
            threads,
            grid_size,
            target,
            max_moves,
            format,
            progress,
        } => cli::sim::execute(
            games, seed, threads, grid_size, target, max_moves, format, progress,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
