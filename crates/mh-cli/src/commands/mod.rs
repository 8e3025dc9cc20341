pub mod auto;
pub mod new;
pub mod play;
pub mod sessions;
pub mod simulate;
pub mod status;
pub mod tui;

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use mh_core::store::{SessionId, SessionStore};
use mh_core::{Door, DoorContent, Game, GameConfig, Scoreboard, StrategyTally};

/// A session pulled out of the store for one request.
pub struct Loaded {
    pub store: SessionStore,
    pub id: SessionId,
    pub game: Game,
}

impl Loaded {
    /// Write the game back into the store and persist it.
    pub fn save(mut self) -> Result<Game, String> {
        self.store
            .put(self.id, self.game.snapshot())
            .map_err(|e| e.to_string())?;
        self.store.save().map_err(|e| e.to_string())?;
        Ok(self.game)
    }
}

fn open_store(path: &Path) -> Result<SessionStore, String> {
    SessionStore::open(path).map_err(|e| e.to_string())
}

/// Open the store and rehydrate the requested session with a fresh RNG.
fn load(path: &Path, session: Option<&str>) -> Result<Loaded, String> {
    let store = open_store(path)?;
    let id = store.resolve(session).map_err(|e| e.to_string())?;
    let snapshot = store.get(id).map_err(|e| e.to_string())?.clone();
    let game = Game::from_snapshot(snapshot, GameConfig::default().rng())
        .map_err(|e| e.to_string())?;
    tracing::debug!(%id, phase = %game.session().phase(), "session loaded");
    Ok(Loaded { store, id, game })
}

/// Parse a door number as typed on the command line.
fn parse_door(number: usize) -> Result<Door, String> {
    Door::from_number(number).map_err(|e| e.to_string())
}

/// Print one line per door followed by the round's status line.
fn print_round(game: &Game) {
    for view in game.session().door_views() {
        let content = match view.content {
            DoorContent::Closed => "closed".normal(),
            DoorContent::Car => "car".green().bold(),
            DoorContent::Goat if view.opening => "goat (opened by the host)".yellow(),
            DoorContent::Goat => "goat".dimmed(),
        };
        let marker = if view.selected {
            "<- your pick".cyan().to_string()
        } else {
            String::new()
        };
        println!("  {:<8} {content} {marker}", view.door.to_string().bold());
    }
    println!();
    println!("  {}", game.status_message());
}

/// Statistics table with one row per decision kind.
fn stats_table(board: &Scoreboard) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Strategy", "Record", "Win rate"]);
    for (label, tally) in [("Stay", &board.stay), ("Switch", &board.switch)] {
        table.add_row(vec![
            label.to_string(),
            tally.to_string(),
            format_rate_bar(tally),
        ]);
    }
    table
}

fn format_rate_bar(tally: &StrategyTally) -> String {
    let rate = tally.win_rate();
    let filled = (rate * 20.0).round() as usize;
    let empty = 20_usize.saturating_sub(filled);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(empty));

    if tally.games() == 0 {
        format!("[{}]", bar.dimmed())
    } else if rate >= 0.5 {
        format!("[{}]", bar.green())
    } else {
        format!("[{}]", bar.yellow())
    }
}
