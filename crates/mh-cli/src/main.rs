//! Command-line shell for the Monty Hall simulator.
//!
//! Every invocation loads one session from the session store, applies a
//! single operation, and writes the store back.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use mh_core::Strategy;
use mh_simulation::{DEFAULT_BATCH_SIZE, TrialMode};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "monty",
    about = "Monty Hall game show simulator",
    version,
    propagate_version = true
)]
struct Cli {
    /// Session store file
    #[arg(long, global = true, default_value = ".monty/sessions.json")]
    store: PathBuf,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new session and make it current
    New {
        /// Play strategy: manual, stay, or switch
        #[arg(short, long, default_value = "manual")]
        strategy: Strategy,
    },

    /// Pick a door (1-3) to start the round
    Choose {
        /// Door number
        door: usize,

        /// Session id or unique prefix (default: current session)
        #[arg(long)]
        session: Option<String>,
    },

    /// Make the final pick (1-3) after the host opened a door
    Decide {
        /// Door number
        door: usize,

        /// Session id or unique prefix (default: current session)
        #[arg(long)]
        session: Option<String>,
    },

    /// Start a new round, keeping the statistics
    Reset {
        /// Session id or unique prefix (default: current session)
        #[arg(long)]
        session: Option<String>,
    },

    /// Simulate rounds for both strategies and add them to the statistics
    Auto {
        /// Rounds per strategy
        #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
        trials: u64,

        /// Session id or unique prefix (default: current session)
        #[arg(long)]
        session: Option<String>,
    },

    /// Show the doors, the round status, and the statistics
    Status {
        /// Session id or unique prefix (default: current session)
        #[arg(long)]
        session: Option<String>,
    },

    /// Change the play strategy
    Strategy {
        /// manual, stay, or switch
        mode: Strategy,

        /// Session id or unique prefix (default: current session)
        #[arg(long)]
        session: Option<String>,
    },

    /// List stored sessions
    Sessions,

    /// Run a standalone batch and print a report
    Simulate {
        /// Rounds per strategy
        #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
        trials: u64,

        /// RNG seed for a reproducible batch
        #[arg(short, long)]
        seed: Option<u64>,

        /// independent (a fresh round per strategy) or paired (one round scored twice)
        #[arg(short, long, default_value = "independent")]
        mode: TrialMode,
    },

    /// Launch the interactive terminal dashboard
    Tui {
        /// RNG seed for a reproducible game
        #[arg(short, long)]
        seed: Option<u64>,

        /// Starting strategy
        #[arg(long)]
        strategy: Option<Strategy>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = cli.store.as_path();
    let result = match cli.command {
        Commands::New { strategy } => commands::new::run(store, strategy),
        Commands::Choose { door, session } => {
            commands::play::choose(store, session.as_deref(), door)
        }
        Commands::Decide { door, session } => {
            commands::play::decide(store, session.as_deref(), door)
        }
        Commands::Reset { session } => commands::play::reset(store, session.as_deref()),
        Commands::Auto { trials, session } => {
            commands::auto::run(store, session.as_deref(), trials)
        }
        Commands::Status { session } => commands::status::run(store, session.as_deref()),
        Commands::Strategy { mode, session } => {
            commands::play::strategy(store, session.as_deref(), mode)
        }
        Commands::Sessions => commands::sessions::run(store),
        Commands::Simulate { trials, seed, mode } => commands::simulate::run(trials, seed, mode),
        Commands::Tui { seed, strategy } => commands::tui::run(seed, strategy),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
