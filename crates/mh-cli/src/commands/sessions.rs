use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(store_path: &Path) -> Result<(), String> {
    let store = super::open_store(store_path)?;
    if store.is_empty() {
        println!("  No sessions in {}.", store.path().display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Id", "Strategy", "Round", "Games", "Updated"]);

    for stored in store.sessions() {
        let current = if store.current() == Some(stored.id) {
            "*".green().bold().to_string()
        } else {
            String::new()
        };
        table.add_row(vec![
            current,
            stored.id.short(),
            stored.game.strategy.to_string(),
            stored.game.session.phase().to_string(),
            stored.game.scoreboard.total_games().to_string(),
            stored.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{table}");
    println!("  {} session(s)", store.len());
    Ok(())
}
