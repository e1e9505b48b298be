use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use starstrike_app::game_loop::{spawn_game_loop, LoopSettings, TICK_RATE};
use starstrike_app::state::AppState;
use starstrike_core::config::SimConfig;
use starstrike_sim::SimulationEngine;

#[derive(Parser, Debug)]
#[command(name = "starstrike")]
#[command(about = "Headless STARSTRIKE simulation runner")]
struct Cli {
    /// JSON config file; missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the RNG seed from the config
    #[arg(long)]
    seed: Option<u64>,
    /// Simulated seconds to run
    #[arg(long, default_value_t = 120.0)]
    seconds: f64,
    /// Pace ticks to wall-clock time
    #[arg(long)]
    realtime: bool,
    /// Leave the ship uncontrolled instead of flying the autopilot
    #[arg(long)]
    idle: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    let engine = SimulationEngine::new(config)?;

    let max_ticks = (cli.seconds.max(0.0) * TICK_RATE as f64).round() as u64;
    let settings = LoopSettings {
        max_ticks: Some(max_ticks),
        realtime: cli.realtime,
        autopilot: !cli.idle,
    };

    let app = AppState::new();
    let (tx, handle) = spawn_game_loop(engine, settings, app.latest_snapshot.clone())?;
    // The loop stops on disconnect, so the sender must outlive the join.
    if let Ok(mut slot) = app.command_tx.lock() {
        *slot = Some(tx);
    }

    let report = handle
        .join()
        .map_err(|_| "game loop thread panicked")?;

    if let Some(snapshot) = &report.final_snapshot {
        log::info!(
            "finished after {} ticks: wave {}, score {}, shields {}",
            report.ticks,
            snapshot.wave,
            snapshot.score,
            snapshot.shields
        );
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
