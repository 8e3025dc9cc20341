use std::path::Path;

use colored::Colorize;
use mh_core::{Game, GameConfig, Strategy};

pub fn run(store_path: &Path, strategy: Strategy) -> Result<(), String> {
    let mut store = super::open_store(store_path)?;
    let game = Game::new(&GameConfig::default().with_strategy(strategy));
    let id = store.create(game.snapshot());
    store.save().map_err(|e| e.to_string())?;

    println!(
        "  {} session {} {}",
        "Started".green().bold(),
        id,
        format!("(strategy: {})", strategy.label()).dimmed()
    );
    println!();
    super::print_round(&game);
    Ok(())
}
