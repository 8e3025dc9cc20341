//! Core game model for the Monty Hall simulator.
//!
//! A [`Game`] owns one [`Session`] (the hidden car, the player's pick and the
//! host's reveal), a [`Scoreboard`] with one [`StrategyTally`] per decision
//! kind, the active play [`Strategy`], and the RNG that drives every draw.
//! Presentation shells hold a `Game` and call [`Game::choose`],
//! [`Game::decide`] and [`Game::reset`] in response to user input.
//!
//! The [`store::SessionStore`] persists game snapshots to JSON so that a
//! request/response shell can rehydrate a session on every request.

/// Game configuration (seed and initial strategy).
pub mod config;
/// Doors, prizes, and uniform draws over the three-door domain.
pub mod door;
/// Error types used throughout the crate.
pub mod error;
/// The game: session, scoreboard, strategy, and RNG bundled together.
pub mod game;
/// The session state machine for a single round.
pub mod session;
/// JSON-backed store of game snapshots keyed by session id.
pub mod store;
/// Play strategies and decision classification.
pub mod strategy;
/// Per-strategy win/game counters and derived win rates.
pub mod tally;

/// Re-export of [`config::GameConfig`].
pub use config::GameConfig;
/// Re-export door types.
pub use door::{DOOR_COUNT, Door, DoorContent, DoorView, Prize};
/// Re-export error types.
pub use error::{GameError, GameResult};
/// Re-export game types.
pub use game::{Game, GameSnapshot};
/// Re-export session types.
pub use session::{Phase, RoundOutcome, Session};
/// Re-export strategy types.
pub use strategy::{Decision, Strategy};
/// Re-export tally types.
pub use tally::{Scoreboard, StrategyTally, format_percentage};
