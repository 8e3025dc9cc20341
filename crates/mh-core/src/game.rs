//! A game: the current session, the scoreboard, the play strategy, and the
//! RNG, owned together and threaded through every operation.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::door::Door;
use crate::error::{GameError, GameResult};
use crate::session::{Phase, RoundOutcome, Session};
use crate::strategy::{Decision, Strategy};
use crate::tally::Scoreboard;

/// The persistable part of a [`Game`]. The RNG is not stored; a rehydrated
/// game gets a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The current round.
    pub session: Session,
    /// Tallies accumulated across rounds and batches.
    pub scoreboard: Scoreboard,
    /// Active play strategy.
    pub strategy: Strategy,
}

impl GameSnapshot {
    /// Check the session and tally invariants.
    pub fn validate(&self) -> GameResult<()> {
        self.session.validate()?;
        self.scoreboard.validate()
    }
}

/// An interactive Monty Hall game.
pub struct Game {
    session: Session,
    scoreboard: Scoreboard,
    strategy: Strategy,
    rng: StdRng,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.session.phase())
            .field("strategy", &self.strategy)
            .field("scoreboard", &self.scoreboard)
            .finish()
    }
}

impl Game {
    /// Start a game with an empty scoreboard and a fresh round.
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = config.rng();
        let session = Session::new(&mut rng);
        Self {
            session,
            scoreboard: Scoreboard::new(),
            strategy: config.strategy,
            rng,
        }
    }

    /// Rehydrate a game from a snapshot, rejecting inconsistent state.
    pub fn from_snapshot(snapshot: GameSnapshot, rng: StdRng) -> GameResult<Self> {
        snapshot.validate()?;
        Ok(Self {
            session: snapshot.session,
            scoreboard: snapshot.scoreboard,
            strategy: snapshot.strategy,
            rng,
        })
    }

    /// Capture the persistable state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            session: self.session.clone(),
            scoreboard: self.scoreboard,
            strategy: self.strategy,
        }
    }

    /// The current round.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Accumulated tallies.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Active play strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Change the play strategy. Takes effect on the next first pick.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// The game's RNG, for headless batches that should share it.
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Win percentages as `(stay, switch)`.
    pub fn rates(&self) -> (f64, f64) {
        self.scoreboard.rates()
    }

    /// Status line for the current round.
    pub fn status_message(&self) -> String {
        self.session.status_message()
    }

    /// Make the first pick. Under an automatic strategy the final pick
    /// follows immediately and the round finishes.
    pub fn choose(&mut self, door: Door) -> GameResult<&Session> {
        self.session.choose(door, &mut self.rng)?;

        if let Some(decision) = self.strategy.auto_decision() {
            let final_door = match decision {
                Decision::Stay => door,
                Decision::Switch => self.session.switch_target().ok_or_else(|| {
                    GameError::Inconsistent("no closed door left to switch to".to_string())
                })?,
            };
            self.finish(final_door)?;
        }

        Ok(&self.session)
    }

    /// Make the final pick and record it on the scoreboard.
    pub fn decide(&mut self, door: Door) -> GameResult<&Session> {
        self.finish(door)?;
        Ok(&self.session)
    }

    /// Route a door click the way a shell sees it: first pick while
    /// choosing, final pick while deciding.
    pub fn select(&mut self, door: Door) -> GameResult<&Session> {
        match self.session.phase() {
            Phase::Choosing => self.choose(door),
            Phase::Deciding => self.decide(door),
            Phase::Finished => Err(GameError::WrongPhase {
                operation: "select a door",
                phase: Phase::Finished,
            }),
        }
    }

    /// Start a new round with a freshly drawn car. The scoreboard is kept.
    pub fn reset(&mut self) -> &Session {
        self.session = Session::new(&mut self.rng);
        tracing::debug!("new round");
        &self.session
    }

    /// Zero both tallies.
    pub fn clear_statistics(&mut self) {
        self.scoreboard.clear();
    }

    /// Merge externally computed tallies (a headless batch) into the
    /// scoreboard. The current round is untouched.
    pub fn absorb(&mut self, batch: &Scoreboard) {
        self.scoreboard.merge(batch);
    }

    fn finish(&mut self, door: Door) -> GameResult<RoundOutcome> {
        let outcome = self.session.decide(door)?;
        self.scoreboard.record(outcome.decision, outcome.won);
        Ok(outcome)
    }
}
