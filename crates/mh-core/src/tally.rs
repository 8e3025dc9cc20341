use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::strategy::Decision;

/// Running win/game counter for one strategy.
///
/// Fields are private so the only ways to change a tally are [`record`]
/// and [`merge`], which keep `wins <= games`. Deserialization accepts any
/// counts; [`validate`] checks the invariant on loaded data.
///
/// [`record`]: StrategyTally::record
/// [`merge`]: StrategyTally::merge
/// [`validate`]: StrategyTally::validate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyTally {
    wins: u64,
    games: u64,
}

impl StrategyTally {
    /// An empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tally from counts, rejecting `wins > games`.
    pub fn from_counts(wins: u64, games: u64) -> GameResult<Self> {
        if wins > games {
            return Err(GameError::Inconsistent(format!(
                "tally has {wins} wins in {games} games"
            )));
        }
        Ok(Self { wins, games })
    }

    /// Check `wins <= games`.
    pub fn validate(&self) -> GameResult<()> {
        Self::from_counts(self.wins, self.games).map(|_| ())
    }

    /// Games won.
    pub fn wins(&self) -> u64 {
        self.wins
    }

    /// Games played.
    pub fn games(&self) -> u64 {
        self.games
    }

    /// Games lost.
    pub fn losses(&self) -> u64 {
        self.games.saturating_sub(self.wins)
    }

    /// Count one completed game. Counters saturate at `u64::MAX`.
    pub fn record(&mut self, won: bool) {
        self.games = self.games.saturating_add(1);
        if won {
            self.wins = self.wins.saturating_add(1).min(self.games);
        }
    }

    /// Add another tally's counts to this one. Counters saturate at
    /// `u64::MAX`.
    pub fn merge(&mut self, other: &StrategyTally) {
        self.games = self.games.saturating_add(other.games);
        self.wins = self.wins.saturating_add(other.wins).min(self.games);
    }

    /// Fraction of games won in `0.0..=1.0`; 0 when no games were played.
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Win rate as a percentage.
    pub fn win_percentage(&self) -> f64 {
        self.win_rate() * 100.0
    }
}

impl fmt::Display for StrategyTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wins: {}/{} ({})",
            self.wins,
            self.games,
            format_percentage(self.win_percentage())
        )
    }
}

/// Format a percentage with one decimal place, e.g. `66.7%`.
pub fn format_percentage(pct: f64) -> String {
    format!("{pct:.1}%")
}

/// The pair of tallies kept per game: one for staying, one for switching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds where the final door was the first pick.
    pub stay: StrategyTally,
    /// Rounds where the player moved to the other closed door.
    pub switch: StrategyTally,
}

impl Scoreboard {
    /// An empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tally that `decision` is attributed to.
    pub fn tally(&self, decision: Decision) -> &StrategyTally {
        match decision {
            Decision::Stay => &self.stay,
            Decision::Switch => &self.switch,
        }
    }

    /// Count one completed round under `decision`.
    pub fn record(&mut self, decision: Decision, won: bool) {
        match decision {
            Decision::Stay => self.stay.record(won),
            Decision::Switch => self.switch.record(won),
        }
    }

    /// Add another scoreboard's counts to this one.
    pub fn merge(&mut self, other: &Scoreboard) {
        self.stay.merge(&other.stay);
        self.switch.merge(&other.switch);
    }

    /// Win percentages as `(stay, switch)`.
    pub fn rates(&self) -> (f64, f64) {
        (self.stay.win_percentage(), self.switch.win_percentage())
    }

    /// Games played across both strategies.
    pub fn total_games(&self) -> u64 {
        self.stay.games().saturating_add(self.switch.games())
    }

    /// Check both tallies.
    pub fn validate(&self) -> GameResult<()> {
        self.stay.validate()?;
        self.switch.validate()
    }

    /// Reset both tallies to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rate_is_zero() {
        let tally = StrategyTally::new();
        assert_eq!(tally.win_rate(), 0.0);
        assert_eq!(format_percentage(tally.win_percentage()), "0.0%");
    }

    #[test]
    fn record_counts_games_and_wins() {
        let mut tally = StrategyTally::new();
        tally.record(true);
        tally.record(false);
        tally.record(true);
        assert_eq!(tally.games(), 3);
        assert_eq!(tally.wins(), 2);
        assert_eq!(tally.losses(), 1);
        insta::assert_snapshot!(tally.to_string(), @"Wins: 2/3 (66.7%)");
    }

    #[test]
    fn from_counts_rejects_more_wins_than_games() {
        assert!(StrategyTally::from_counts(3, 3).is_ok());
        assert!(StrategyTally::from_counts(4, 3).is_err());
    }

    #[test]
    fn deserialize_is_lenient_and_validate_checks_invariant() {
        let ok: StrategyTally = serde_json::from_str(r#"{"wins":1,"games":4}"#).unwrap();
        assert_eq!(ok.wins(), 1);
        assert!(ok.validate().is_ok());

        let bad: StrategyTally = serde_json::from_str(r#"{"wins":5,"games":4}"#).unwrap();
        assert!(matches!(bad.validate(), Err(GameError::Inconsistent(_))));

        let board = Scoreboard {
            stay: StrategyTally::new(),
            switch: bad,
        };
        assert!(board.validate().is_err());
    }

    #[test]
    fn counters_saturate_instead_of_overflowing() {
        let mut tally = StrategyTally::from_counts(0, u64::MAX).unwrap();
        tally.record(false);
        assert_eq!(tally.games(), u64::MAX);
        tally.record(true);
        assert_eq!(tally.games(), u64::MAX);
        assert_eq!(tally.wins(), 1);

        let mut full = StrategyTally::from_counts(u64::MAX, u64::MAX).unwrap();
        full.record(true);
        assert_eq!((full.wins(), full.games()), (u64::MAX, u64::MAX));

        let mut merged = StrategyTally::from_counts(3, 10).unwrap();
        merged.merge(&full);
        assert_eq!(merged.games(), u64::MAX);
        assert!(merged.wins() <= merged.games());
        assert!(merged.validate().is_ok());
    }

    #[test]
    fn scoreboard_attributes_to_one_tally() {
        let mut board = Scoreboard::new();
        board.record(Decision::Switch, true);
        assert_eq!(board.switch.games(), 1);
        assert_eq!(board.stay.games(), 0);
        board.record(Decision::Stay, false);
        assert_eq!(board.stay.games(), 1);
        assert_eq!(board.stay.wins(), 0);
        assert_eq!(board.total_games(), 2);
    }

    #[test]
    fn scoreboard_merge_and_rates() {
        let mut a = Scoreboard::new();
        a.record(Decision::Stay, true);
        let mut b = Scoreboard::new();
        b.record(Decision::Stay, false);
        b.record(Decision::Switch, true);
        a.merge(&b);
        assert_eq!(a.stay.games(), 2);
        assert_eq!(a.rates(), (50.0, 100.0));
        a.clear();
        assert_eq!(a, Scoreboard::default());
    }
}
