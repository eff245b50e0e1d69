//! Solitaire simulator CLI: plays seeded Klondike deals headless and reports
//! how the autoplay policy fares.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use solitaire::domain::{derive_batch_seed, today_seed};
use solitaire::{
    init_tracing_with_default, Action, DomainError, Game, GameSession, JsonFileStatsStore,
    LogFormat, MemoryStatsStore, StatsStore,
};
use tracing::{info, warn};
use types::{OutputFormat, StopReason};

#[derive(Parser)]
#[command(name = "solitaire-simulator")]
#[command(about = "Headless Klondike autoplay over seeded deals")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Base seed; game i plays a seed derived from it
    #[arg(long, conflicts_with = "daily")]
    seed: Option<u64>,

    /// Use today's daily-challenge seed as the base
    #[arg(long)]
    daily: bool,

    /// Step budget per game
    #[arg(long, default_value = "2000")]
    max_steps: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Persist win/loss statistics to this JSON file
    #[arg(long)]
    stats_file: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors. RUST_LOG still wins.
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    init_tracing_with_default(LogFormat::from_env()?, filter);

    let base_seed = match (args.daily, args.seed) {
        (true, _) => today_seed(),
        (false, Some(seed)) => seed,
        (false, None) => rand::random(),
    };
    if args.show_output {
        info!(games = args.games, base_seed, "Starting solitaire simulator");
    }

    let store: Box<dyn StatsStore> = match &args.stats_file {
        Some(path) => Box::new(JsonFileStatsStore::new(path)),
        None => Box::new(MemoryStatsStore::new()),
    };

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir);
    }

    let simulator = Simulator::new(args.max_steps);
    let first = Game::new(Some(derive_batch_seed(base_seed, 0)))?;
    let mut session = GameSession::new(first, store.as_ref());

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_no in 0..args.games {
        let game_start = Instant::now();
        if game_no > 0 {
            let seed = derive_batch_seed(base_seed, u64::from(game_no));
            if !session.dispatch(Action::NewGame { seed: Some(seed) }).outcome.is_applied() {
                errors += 1;
                warn!(game_no, seed, "Could not deal game");
                continue;
            }
        }

        let result = simulator.simulate_game(&mut session);
        let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;

        let metrics = build_game_metrics(game_no + 1, &result, duration_ms);
        if let Err(e) = output_writer.write_game(&metrics) {
            warn!("Failed to write metrics for game {}: {}", game_no + 1, e);
        }
        if args.verbose {
            info!(
                game_no = game_no + 1,
                seed = result.seed,
                stop_reason = result.stop_reason.as_str(),
                score = result.score,
                "Game completed"
            );
        }
        results.push(result);
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.clone(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
        print_store_totals(session.stats());
    }

    Ok(())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!("Average time per game: {:?}", elapsed / results.len() as u32);

    let count = |reason: StopReason| results.iter().filter(|r| r.stop_reason == reason).count();
    let won = count(StopReason::Won);
    let n = results.len() as f64;

    let total_score: i64 = results.iter().map(|r| i64::from(r.score)).sum();
    let max_score = results.iter().map(|r| r.score).max().unwrap_or(0);
    let min_score = results.iter().map(|r| r.score).min().unwrap_or(0);
    let avg_foundation =
        results.iter().map(|r| r.foundation_cards).sum::<usize>() as f64 / n;

    println!("\n=== Results ===");
    println!("Won: {} ({:.1}%)", won, won as f64 / n * 100.0);
    println!("Lost: {}", count(StopReason::Lost));
    println!("Stalled: {}", count(StopReason::Stalled));
    println!("Step limit: {}", count(StopReason::StepLimit));
    println!(
        "Score: avg={:.1}, min={}, max={}",
        total_score as f64 / n,
        min_score,
        max_score
    );
    println!("Foundation cards: avg={:.1}", avg_foundation);
}

fn print_store_totals(stats: Result<solitaire::GameStats, DomainError>) {
    match stats {
        Ok(stats) => {
            println!("\n=== Recorded Stats ===");
            println!("Games played: {}", stats.games_played);
            println!(
                "Games won: {} ({:.1}%)",
                stats.games_won,
                stats.win_rate() * 100.0
            );
            println!("Best score: {}", stats.best_score);
        }
        Err(e) => warn!("Could not read stats: {}", e),
    }
}
