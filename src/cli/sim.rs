//! Sim command implementation - mass parallel random playouts.

use super::output::{format_sim_csv, format_sim_text, JsonSimResult, SimStats};
use super::{CliError, SimFormat};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;
use tessera::sim::{run_playout, SimConfig};
use tessera::GameConfig;

/// Execute the sim command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
#[allow(clippy::too_many_arguments)]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn execute(
    games: u64,
    seed: Option<u64>,
    threads: Option<usize>,
    grid_size: usize,
    target: u32,
    max_moves: u32,
    format: SimFormat,
    progress: bool,
) -> Result<(), CliError> {
    let config = SimConfig {
        game: GameConfig { grid_size, target },
        max_moves,
    };
    config.game.validate()?;

    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    // Base seed
    let base_seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    // Progress bar
    let pb = if progress {
        let pb = ProgressBar::new(games);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})")
                .expect("valid template")
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    // Run games in parallel using lock-free fold/reduce pattern.
    // Each thread accumulates into its own SimStats, merged at the end.
    let stats = (0..games)
        .into_par_iter()
        .fold(SimStats::default, |mut local_stats, i| {
            let game_seed = base_seed.wrapping_add(i);

            if let Ok(summary) = run_playout(game_seed, &config) {
                local_stats.add_summary(&summary);
            }

            local_stats
        })
        .reduce(SimStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    // Update progress bar after completion (no atomic overhead in hot path)
    if let Some(pb) = pb {
        pb.set_position(stats.games_played);
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();

    // Calculate games per second
    let games_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.games_played as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    // Output based on format
    match format {
        SimFormat::Text => {
            println!();
            print!("{}", format_sim_text(&stats, &config));
            println!();
            println!(
                "Duration: {:.2}s ({:.0} games/sec)",
                duration.as_secs_f64(),
                games_per_sec
            );
        }
        SimFormat::Json => {
            let json_result = JsonSimResult::from_stats(&stats, &config, base_seed);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
        SimFormat::Csv => {
            print!("{}", format_sim_csv(&stats));
        }
    }

    Ok(())
}
