//! Standalone terminal dashboard for the Monty Hall simulator.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;

use clap::Parser;
use mh_core::{GameConfig, Strategy};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "monty-tui",
    about = "Terminal dashboard for the Monty Hall game show",
    version
)]
struct Args {
    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Starting strategy: manual, stay, or switch
    #[arg(long, default_value = "manual")]
    strategy: Strategy,

    /// Append logs to this file (nothing is logged otherwise)
    #[arg(long)]
    log: Option<PathBuf>,
}

/// Logs never go to the terminal while the dashboard owns it.
fn init_tracing(log: Option<&PathBuf>) -> Result<(), String> {
    let Some(path) = log else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("cannot open log file {}: {e}", path.display()))?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();
    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_tracing(args.log.as_ref()) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let mut config = GameConfig::default().with_strategy(args.strategy);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let app = mh_tui::app::TuiApp::new(&config);

    if let Err(e) = mh_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
