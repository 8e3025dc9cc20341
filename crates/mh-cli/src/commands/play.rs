use std::path::Path;

use colored::Colorize;
use mh_core::{GameError, Phase, Strategy};

fn rejected(e: GameError) -> String {
    tracing::warn!(error = %e, "operation rejected");
    e.to_string()
}

/// First pick. Finishes the round straight away under an automatic strategy.
pub fn choose(store: &Path, session: Option<&str>, number: usize) -> Result<(), String> {
    let door = super::parse_door(number)?;
    let mut loaded = super::load(store, session)?;
    loaded.game.choose(door).map_err(rejected)?;
    let game = loaded.save()?;
    super::print_round(&game);
    if game.session().phase() == Phase::Finished {
        println!();
        println!("{}", super::stats_table(game.scoreboard()));
    }
    Ok(())
}

/// Final pick.
pub fn decide(store: &Path, session: Option<&str>, number: usize) -> Result<(), String> {
    let door = super::parse_door(number)?;
    let mut loaded = super::load(store, session)?;
    loaded.game.decide(door).map_err(rejected)?;
    let game = loaded.save()?;
    super::print_round(&game);
    println!();
    println!("{}", super::stats_table(game.scoreboard()));
    Ok(())
}

pub fn reset(store: &Path, session: Option<&str>) -> Result<(), String> {
    let mut loaded = super::load(store, session)?;
    loaded.game.reset();
    let game = loaded.save()?;
    println!("  {}", "New round".bold());
    println!();
    super::print_round(&game);
    Ok(())
}

pub fn strategy(store: &Path, session: Option<&str>, strategy: Strategy) -> Result<(), String> {
    let mut loaded = super::load(store, session)?;
    loaded.game.set_strategy(strategy);
    loaded.save()?;
    println!("  Strategy set to {}", strategy.label().bold());
    Ok(())
}
