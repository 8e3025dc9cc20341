use std::path::Path;

use colored::Colorize;

pub fn run(store: &Path, session: Option<&str>) -> Result<(), String> {
    let loaded = super::load(store, session)?;
    let game = &loaded.game;

    println!(
        "  {} {} {}",
        "Session".bold(),
        loaded.id,
        format!("(strategy: {})", game.strategy().label()).dimmed()
    );
    println!();
    super::print_round(game);
    println!();
    println!("{}", super::stats_table(game.scoreboard()));
    Ok(())
}
