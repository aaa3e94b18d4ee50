//! Rotation simulator CLI - schedules, damages and regenerates doubles events
//! in memory and reports how well the rotation held up.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use metrics::{build_event_metrics, EventConfig, EventMetrics};
use output::OutputWriter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rotation_engine::RotationConfig;
use simulator::{EventParams, Simulator};
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "rotation-simulator")]
#[command(about = "In-memory doubles rotation and regeneration simulator")]
struct Args {
    /// Confirmed players per event
    #[arg(short, long, default_value = "10")]
    players: usize,

    /// Matches per player (overrides ROTATION_TARGET_MATCHES)
    #[arg(short, long)]
    target: Option<u32>,

    /// Matches completed before regeneration
    #[arg(short, long, default_value = "2")]
    completed: usize,

    /// Probability that a completed record comes back with unusable players
    #[arg(long, default_value = "0.2")]
    corrupt_rate: f64,

    /// Base seed; event N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Number of events to simulate
    #[arg(short, long, default_value = "1")]
    events: u32,

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
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !(0.0..=1.0).contains(&args.corrupt_rate) {
        return Err(format!("--corrupt-rate must be within 0..=1, got {}", args.corrupt_rate).into());
    }

    let mut config = RotationConfig::from_env()?;
    if let Some(target) = args.target {
        config.target_matches_per_player = target;
    }
    let params = EventParams {
        players: args.players,
        completed: args.completed,
        corrupt_rate: args.corrupt_rate,
    };
    let simulator = Simulator::new(config, params)?;
    let quota_cap = simulator.config().quota_cap(args.players);

    if args.show_output {
        info!(
            events = args.events,
            players = args.players,
            target = config.target_matches_per_player,
            completed = args.completed,
            corrupt_rate = args.corrupt_rate,
            "Starting rotation simulator"
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for event_id in 1..=args.events {
        let event_start = Instant::now();
        let seed = match args.seed {
            Some(base) => base.wrapping_add(u64::from(event_id)),
            None => rand::random(),
        };
        let mut rng = StdRng::seed_from_u64(seed);

        match simulator.simulate_event(event_id, &mut rng) {
            Ok(result) => {
                let duration_ms = event_start.elapsed().as_secs_f64() * 1000.0;
                let event_config = EventConfig {
                    players: params.players,
                    target_matches_per_player: config.target_matches_per_player,
                    completed: params.completed,
                    corrupt_rate: params.corrupt_rate,
                    total_events: args.events,
                };
                let metrics =
                    build_event_metrics(event_id, seed, event_config, quota_cap, &result, duration_ms);

                if let Err(e) = output_writer.write_event(&metrics) {
                    warn!("Failed to write metrics for event {}: {}", event_id, e);
                }
                if args.verbose {
                    info!(
                        event_id,
                        skipped = metrics.result.skipped_records,
                        upcoming = metrics.result.upcoming_matches,
                        "Event regenerated"
                    );
                }
                results.push(metrics);
            }
            Err(e) => {
                errors += 1;
                warn!(code = %e.code(), "Event {} failed: {}", event_id, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.events);
    }

    Ok(())
}

fn print_summary(results: &[EventMetrics], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Events completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);

    if results.is_empty() {
        return;
    }
    println!(
        "Average time per event: {:?}",
        elapsed / results.len() as u32
    );

    let over_cap = results
        .iter()
        .filter(|m| m.result.max_matches > m.result.quota_cap)
        .count();
    let unscheduled: usize = results.iter().map(|m| m.result.unscheduled_players).sum();
    let skipped: usize = results.iter().map(|m| m.result.skipped_records).sum();
    let repeats: usize = results.iter().map(|m| m.result.repeated_teammate_pairs).sum();

    println!("\n=== Rotation Health ===");
    println!("Events over quota cap: {}", over_cap);
    println!("Players left unscheduled: {}", unscheduled);
    println!("Completed records skipped: {}", skipped);
    println!(
        "Repeated teammate pairs per event: {:.2}",
        repeats as f64 / results.len() as f64
    );
}
