use std::path::Path;

use colored::Colorize;
use mh_simulation::{BatchConfig, simulate_into};

/// Run a batch on the session's RNG and merge it into the session's tallies.
pub fn run(store: &Path, session: Option<&str>, trials: u64) -> Result<(), String> {
    let mut loaded = super::load(store, session)?;
    let config = BatchConfig::default().with_trials(trials);
    let batch = simulate_into(&mut loaded.game, &config);
    let game = loaded.save()?;

    println!(
        "  {} {} rounds per strategy {}",
        "Simulated".bold(),
        trials,
        format!("(batch: stay {}, switch {})", batch.stay, batch.switch).dimmed()
    );
    println!();
    println!("{}", super::stats_table(game.scoreboard()));
    Ok(())
}
