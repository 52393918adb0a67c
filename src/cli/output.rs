//! Output formatting utilities for CLI.

// Statistics aggregation uses intentional integer-to-float casts
#![allow(clippy::cast_precision_loss)]

use serde::Serialize;
use tessera::sim::{GameSummary, SimConfig};
use tessera::Status;

/// Aggregated statistics over a batch of playouts.
#[derive(Debug, Default)]
pub(super) struct SimStats {
    /// Total games played.
    pub(super) games_played: u64,
    /// Games that reached the win target.
    pub(super) wins: u64,
    /// Games that filled the board without winning.
    pub(super) losses: u64,
    /// Games cut off by the move cap.
    pub(super) unfinished: u64,
    /// Total score across all games.
    total_score: u64,
    /// Score sum of squares for std dev calculation.
    score_sq_sum: f64,
    /// Total moves across all games.
    total_moves: u64,
    /// Best score seen.
    best_score: u32,
    /// Largest tile seen.
    best_tile: u32,
}

impl SimStats {
    /// Add one playout summary to the stats.
    pub(super) fn add_summary(&mut self, summary: &GameSummary) {
        self.games_played += 1;
        self.total_moves += u64::from(summary.moves);
        self.total_score += u64::from(summary.score);
        self.score_sq_sum += f64::from(summary.score) * f64::from(summary.score);
        self.best_score = self.best_score.max(summary.score);
        self.best_tile = self.best_tile.max(summary.max_tile);

        match summary.status {
            Status::Won => self.wins += 1,
            Status::Lost => self.losses += 1,
            Status::InProgress => self.unfinished += 1,
        }
    }

    /// Merge another accumulator into this one.
    pub(super) fn merge(&mut self, other: &SimStats) {
        self.games_played += other.games_played;
        self.wins += other.wins;
        self.losses += other.losses;
        self.unfinished += other.unfinished;
        self.total_score += other.total_score;
        self.score_sq_sum += other.score_sq_sum;
        self.total_moves += other.total_moves;
        self.best_score = self.best_score.max(other.best_score);
        self.best_tile = self.best_tile.max(other.best_tile);
    }

    /// Win rate (0.0-1.0).
    pub(super) fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games_played as f64
    }

    /// Average score per game.
    pub(super) fn avg_score(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_score as f64 / self.games_played as f64
    }

    /// Score standard deviation.
    pub(super) fn score_std_dev(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        let n = self.games_played as f64;
        let mean = self.avg_score();
        let variance = (self.score_sq_sum / n) - (mean * mean);
        if variance < 0.0 {
            0.0
        } else {
            variance.sqrt()
        }
    }

    /// Average game length in moves.
    pub(super) fn avg_moves(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games_played as f64
    }
}

/// JSON-serializable sim result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSimResult {
    /// Starting seed of the batch.
    base_seed: u64,
    /// Grid side length.
    grid_size: usize,
    /// Win target.
    target: u32,
    /// Total games played.
    games_played: u64,
    /// Games won.
    wins: u64,
    /// Games lost.
    losses: u64,
    /// Games cut off by the move cap.
    unfinished: u64,
    /// Win rate (0.0-1.0).
    win_rate: f64,
    /// Average score.
    avg_score: f64,
    /// Score standard deviation.
    score_std_dev: f64,
    /// Best score seen.
    best_score: u32,
    /// Largest tile seen.
    best_tile: u32,
    /// Average game length in moves.
    avg_moves: f64,
}

impl JsonSimResult {
    /// Create from accumulated stats.
    pub(super) fn from_stats(stats: &SimStats, config: &SimConfig, base_seed: u64) -> Self {
        Self {
            base_seed,
            grid_size: config.game.grid_size,
            target: config.game.target,
            games_played: stats.games_played,
            wins: stats.wins,
            losses: stats.losses,
            unfinished: stats.unfinished,
            win_rate: stats.win_rate(),
            avg_score: stats.avg_score(),
            score_std_dev: stats.score_std_dev(),
            best_score: stats.best_score,
            best_tile: stats.best_tile,
            avg_moves: stats.avg_moves(),
        }
    }
}

/// Format sim stats as human-readable text.
pub(super) fn format_sim_text(stats: &SimStats, config: &SimConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Simulation Results ({} games, {}x{} grid, target {})\n",
        stats.games_played, config.game.grid_size, config.game.grid_size, config.game.target
    ));
    output.push_str("========================================\n\n");

    output.push_str(&format!(
        "  Wins:       {} ({:.1}%)\n",
        stats.wins,
        stats.win_rate() * 100.0
    ));
    output.push_str(&format!("  Losses:     {}\n", stats.losses));
    if stats.unfinished > 0 {
        output.push_str(&format!("  Unfinished: {}\n", stats.unfinished));
    }
    output.push('\n');

    output.push_str(&format!(
        "  Average score: {:.1} (+/- {:.1})\n",
        stats.avg_score(),
        stats.score_std_dev()
    ));
    output.push_str(&format!("  Best score:    {}\n", stats.best_score));
    output.push_str(&format!("  Largest tile:  {}\n", stats.best_tile));
    output.push_str(&format!("  Average moves: {:.0}\n", stats.avg_moves()));

    output
}

/// Format sim stats as CSV.
pub(super) fn format_sim_csv(stats: &SimStats) -> String {
    let mut output = String::new();

    // Header
    output.push_str("games,wins,losses,unfinished,win_rate,avg_score,score_std_dev,best_score,best_tile,avg_moves\n");
    output.push_str(&format!(
        "{},{},{},{},{:.4},{:.2},{:.2},{},{},{:.1}\n",
        stats.games_played,
        stats.wins,
        stats.losses,
        stats.unfinished,
        stats.win_rate(),
        stats.avg_score(),
        stats.score_std_dev(),
        stats.best_score,
        stats.best_tile,
        stats.avg_moves()
    ));

    output
}
