//! Application state: the game plus dashboard-only flags.

use mh_core::{Door, Game, GameConfig, GameError, Phase, Strategy};
use mh_simulation::{BatchConfig, DEFAULT_BATCH_SIZE, simulate_into};
use ratatui::layout::{Position, Rect};

/// Main application state for the dashboard.
pub struct TuiApp {
    /// The game being played.
    pub game: Game,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// One-line feedback about the last action, shown under the status.
    pub notice: Option<String>,
    /// Where each door was last drawn, for mouse hit testing.
    pub door_areas: [Rect; 3],
}

impl TuiApp {
    /// Create the app with a fresh game.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            game: Game::new(config),
            show_help: false,
            should_quit: false,
            notice: None,
            door_areas: [Rect::default(); 3],
        }
    }

    /// A door was picked: first pick while choosing, final pick while
    /// deciding. Picks the game rejects are ignored.
    pub fn select_door(&mut self, door: Door) {
        match self.game.select(door) {
            Ok(_) => self.notice = None,
            Err(GameError::WrongPhase {
                phase: Phase::Finished,
                ..
            }) => {
                self.notice = Some("Press n to start a new game.".to_string());
            }
            Err(e) => {
                tracing::warn!(error = %e, %door, "selection ignored");
                self.notice = Some(e.to_string());
            }
        }
    }

    /// Switch the play strategy. Applies from the next first pick.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.game.set_strategy(strategy);
        self.notice = Some(format!("Strategy: {}", strategy.label()));
    }

    /// Start a new round, keeping the statistics.
    pub fn new_game(&mut self) {
        self.game.reset();
        self.notice = None;
    }

    /// Simulate a default batch into the statistics.
    pub fn auto_simulate(&mut self) {
        simulate_into(&mut self.game, &BatchConfig::default());
        self.notice = Some(format!(
            "Simulated {DEFAULT_BATCH_SIZE} rounds per strategy."
        ));
    }

    /// Zero both tallies.
    pub fn clear_statistics(&mut self) {
        self.game.clear_statistics();
        self.notice = Some("Statistics cleared.".to_string());
    }

    /// The door drawn at a terminal cell, if any.
    pub fn door_at(&self, column: u16, row: u16) -> Option<Door> {
        let position = Position::new(column, row);
        Door::ALL
            .into_iter()
            .zip(self.door_areas)
            .find(|(_, area)| area.contains(position))
            .map(|(door, _)| door)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> TuiApp {
        TuiApp::new(&GameConfig::default().with_seed(8))
    }

    fn door(number: usize) -> Door {
        Door::from_number(number).unwrap()
    }

    #[test]
    fn select_walks_through_a_round() {
        let mut app = app();
        app.select_door(door(1));
        assert_eq!(app.game.session().phase(), Phase::Deciding);
        app.select_door(door(1));
        assert_eq!(app.game.session().phase(), Phase::Finished);
        assert_eq!(app.game.scoreboard().stay.games(), 1);

        app.select_door(door(2));
        assert_eq!(app.game.scoreboard().total_games(), 1);
        assert_eq!(app.notice.as_deref(), Some("Press n to start a new game."));
    }

    #[test]
    fn clicking_the_open_door_is_ignored() {
        let mut app = app();
        app.select_door(door(1));
        let revealed = app.game.session().revealed().unwrap();
        app.select_door(revealed);
        assert_eq!(app.game.session().phase(), Phase::Deciding);
        assert!(app.notice.is_some());
    }

    #[test]
    fn auto_simulate_and_clear() {
        let mut app = app();
        app.auto_simulate();
        assert_eq!(app.game.scoreboard().stay.games(), 100);
        assert_eq!(app.game.scoreboard().switch.games(), 100);
        app.clear_statistics();
        assert_eq!(app.game.scoreboard().total_games(), 0);
    }

    #[test]
    fn new_game_keeps_statistics() {
        let mut app = app();
        app.set_strategy(Strategy::AlwaysSwitch);
        app.select_door(door(3));
        assert_eq!(app.game.session().phase(), Phase::Finished);
        app.new_game();
        assert_eq!(app.game.session().phase(), Phase::Choosing);
        assert_eq!(app.game.scoreboard().switch.games(), 1);
    }

    #[test]
    fn door_hit_testing() {
        let mut app = app();
        app.door_areas = [
            Rect::new(0, 2, 13, 9),
            Rect::new(15, 2, 13, 9),
            Rect::new(30, 2, 13, 9),
        ];
        assert_eq!(app.door_at(16, 5), Some(door(2)));
        assert_eq!(app.door_at(14, 5), None);
        assert_eq!(app.door_at(31, 0), None);
    }
}
