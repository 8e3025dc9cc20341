//! Headless batch simulation of Monty Hall rounds.
//!
//! A batch plays many rounds without touching any interactive session and
//! returns the resulting [`mh_core::Scoreboard`]. Callers that want the
//! results on a game's scoreboard use [`simulate_into`], which draws from
//! the game's RNG and merges the batch tallies in one step.

/// Batch size and trial mode.
pub mod config;
/// Error types for the simulation crate.
pub mod error;
/// Batch runners.
pub mod batch;
/// A single simulated round.
pub mod trial;

/// Re-exports of [`batch::run_batch`] and [`batch::simulate_into`].
pub use batch::{run_batch, simulate_into};
/// Re-exports of [`config::BatchConfig`], [`config::TrialMode`], and [`config::DEFAULT_BATCH_SIZE`].
pub use config::{BatchConfig, DEFAULT_BATCH_SIZE, TrialMode};
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-export of [`trial::Trial`].
pub use trial::Trial;
